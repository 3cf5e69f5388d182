use crate::analysis::calculator::MatchCollection;
use crate::analysis::document::StatisticsDocument;
use crate::error::AppError;
use crate::roster::RosterTable;
use chrono::Local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const MATCH_DETAILS_FILE: &str = "match_details.json";
pub const ROSTER_FILE: &str = "teams_with_puuid.json";
pub const GENERAL_STATS_FILE: &str = "general_stats.json";
pub const TEAM_STATS_FILE: &str = "team_stats.json";

/// JSON documents of one tournament edition, under `{data_dir}/edition_{N}/`.
#[derive(Debug, Clone)]
pub struct EditionStore {
    pub edition: u32,
    edition_dir: PathBuf,
    backup: bool,
}

impl EditionStore {
    pub fn new(data_dir: &Path, edition: u32) -> Self {
        EditionStore {
            edition,
            edition_dir: data_dir.join(format!("edition_{}", edition)),
            backup: true,
        }
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn edition_dir(&self) -> &Path {
        &self.edition_dir
    }

    pub fn exists(&self) -> bool {
        self.edition_dir.is_dir()
    }

    pub fn load_match_details(&self) -> Result<MatchCollection, AppError> {
        Ok(self.read_json(MATCH_DETAILS_FILE)?.unwrap_or_default())
    }

    pub fn load_roster(&self) -> Result<RosterTable, AppError> {
        Ok(self.read_json(ROSTER_FILE)?.unwrap_or_default())
    }

    pub fn load_general_stats(&self) -> Result<StatisticsDocument, AppError> {
        self.read_json(GENERAL_STATS_FILE)?.ok_or_else(|| {
            AppError::MissingDocument(
                self.edition_dir.join(GENERAL_STATS_FILE).display().to_string(),
            )
        })
    }

    pub fn save_general_stats(&self, stats: &StatisticsDocument) -> Result<PathBuf, AppError> {
        self.write_json(GENERAL_STATS_FILE, stats)
    }

    /// Writes the per-team view (`{team: {team_stats, players}}`).
    pub fn save_team_stats(&self, stats: &StatisticsDocument) -> Result<PathBuf, AppError> {
        self.write_json(TEAM_STATS_FILE, &stats.team_breakdown())
    }

    fn read_json<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>, AppError> {
        let path = self.edition_dir.join(filename);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("File not found: {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(AppError::IoError(e)),
        };

        serde_json::from_str(&content).map(Some).map_err(|e| {
            AppError::JsonError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn write_json<T: Serialize>(&self, filename: &str, data: &T) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.edition_dir)?;
        let path = self.edition_dir.join(filename);

        if self.backup && path.exists() {
            self.backup_file(&path, filename)?;
        }

        let json = serde_json::to_string_pretty(data).map_err(|e| {
            AppError::JsonError(format!("Failed to serialize {}: {}", filename, e))
        })?;
        fs::write(&path, json)?;

        tracing::debug!("Saved {}", path.display());
        Ok(path)
    }

    fn backup_file(&self, path: &Path, filename: &str) -> Result<(), AppError> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let backup_path = self
            .edition_dir
            .join(format!("{}.backup_{}", filename, timestamp));

        fs::copy(path, &backup_path)?;
        tracing::debug!("Backup created: {}", backup_path.display());
        Ok(())
    }
}

/// Edition numbers with an `edition_{N}` directory under `data_dir`, ascending.
pub fn list_editions(data_dir: &Path) -> Result<Vec<u32>, AppError> {
    let entries = match fs::read_dir(data_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(AppError::IoError(e)),
    };

    let mut editions: Vec<u32> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            entry
                .file_name()
                .to_str()
                .and_then(|name| name.strip_prefix("edition_"))
                .and_then(|number| number.parse().ok())
        })
        .collect();

    editions.sort_unstable();
    Ok(editions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_inputs_load_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = EditionStore::new(tmp.path(), 7);

        assert!(!store.exists());
        assert!(store.load_match_details().unwrap().is_empty());
        assert!(store.load_roster().unwrap().is_empty());
        assert!(matches!(
            store.load_general_stats(),
            Err(AppError::MissingDocument(_))
        ));
    }

    #[test]
    fn test_loads_inputs_in_file_order() {
        let tmp = tempfile::tempdir().unwrap();
        let store = EditionStore::new(tmp.path(), 7);
        fs::create_dir_all(store.edition_dir()).unwrap();
        fs::write(
            store.edition_dir().join(MATCH_DETAILS_FILE),
            r#"{"EUW1_2": {"info": {}}, "EUW1_1": {"info": {}}}"#,
        )
        .unwrap();
        fs::write(
            store.edition_dir().join(ROSTER_FILE),
            json!({"KCDQ": {"players": [{"puuid": "p1"}]}}).to_string(),
        )
        .unwrap();

        let matches = store.load_match_details().unwrap();
        let ids: Vec<_> = matches.keys().cloned().collect();
        assert_eq!(ids, vec!["EUW1_2", "EUW1_1"]);
        assert_eq!(store.load_roster().unwrap()["KCDQ"].players.len(), 1);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let store = EditionStore::new(tmp.path(), 1);
        fs::create_dir_all(store.edition_dir()).unwrap();
        fs::write(store.edition_dir().join(ROSTER_FILE), "{not json").unwrap();

        assert!(matches!(store.load_roster(), Err(AppError::JsonError(_))));
    }

    #[test]
    fn test_corrupt_statistics_are_not_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let store = EditionStore::new(tmp.path(), 2);
        fs::create_dir_all(store.edition_dir()).unwrap();
        fs::write(store.edition_dir().join(GENERAL_STATS_FILE), "{\"metadata\": 3").unwrap();

        assert!(matches!(
            store.load_general_stats(),
            Err(AppError::JsonError(_))
        ));
    }

    #[test]
    fn test_save_round_trips_and_backs_up() {
        let tmp = tempfile::tempdir().unwrap();
        let store = EditionStore::new(tmp.path(), 3);
        let stats = StatisticsDocument::default();

        store.save_general_stats(&stats).unwrap();
        store.save_general_stats(&stats).unwrap();
        store.save_team_stats(&stats).unwrap();

        assert_eq!(store.load_general_stats().unwrap(), stats);

        let backups = fs::read_dir(store.edition_dir())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with("general_stats.json.backup_")
            })
            .count();
        assert!(backups >= 1);
    }

    #[test]
    fn test_save_without_backup() {
        let tmp = tempfile::tempdir().unwrap();
        let store = EditionStore::new(tmp.path(), 3).with_backup(false);
        let stats = StatisticsDocument::default();

        store.save_general_stats(&stats).unwrap();
        store.save_general_stats(&stats).unwrap();

        let files = fs::read_dir(store.edition_dir()).unwrap().count();
        assert_eq!(files, 1);
    }

    #[test]
    fn test_list_editions() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["edition_6", "edition_10", "edition_4", "edition_x", "notes"] {
            fs::create_dir_all(tmp.path().join(name)).unwrap();
        }
        fs::write(tmp.path().join("edition_99"), "not a directory").unwrap();

        assert_eq!(list_editions(tmp.path()).unwrap(), vec![4, 6, 10]);
        assert!(list_editions(&tmp.path().join("missing")).unwrap().is_empty());
    }
}
