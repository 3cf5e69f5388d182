use crate::api::models::DataDragonChampions;
use crate::error::AppError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const EMBEDDED_TABLE: &str = include_str!("../data/champions.json");

/// Champion id → name lookup plus the pick-name aliases.
///
/// Match payloads name picks by their internal key (`MonkeyKing`) but bans by
/// numeric id, so both paths go through this table to land on the same name.
#[derive(Debug, Clone, Deserialize)]
pub struct ChampionTable {
    #[serde(default)]
    aliases: HashMap<String, String>,
    ids: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TableFile {
    DataDragon(DataDragonChampions),
    Table(ChampionTable),
}

impl ChampionTable {
    pub fn embedded() -> Self {
        serde_json::from_str(EMBEDDED_TABLE).unwrap_or_else(|e| {
            tracing::error!("embedded champion table is invalid: {}", e);
            ChampionTable {
                aliases: HashMap::new(),
                ids: HashMap::new(),
            }
        })
    }

    /// Loads either our `{aliases, ids}` file or a Data Dragon `champion.json`.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::ChampionTable(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let file: TableFile = serde_json::from_str(&content).map_err(|e| {
            AppError::ChampionTable(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        let table = match file {
            TableFile::DataDragon(ddragon) => Self::from_data_dragon(ddragon),
            TableFile::Table(mut table) => {
                if table.ids.is_empty() {
                    return Err(AppError::ChampionTable(format!(
                        "{} has an empty `ids` table",
                        path.display()
                    )));
                }
                if table.aliases.is_empty() {
                    table.aliases = Self::embedded().aliases;
                }
                table
            }
        };

        tracing::debug!(
            "Loaded champion table from {} ({} ids)",
            path.display(),
            table.ids.len()
        );
        Ok(table)
    }

    pub fn from_data_dragon(ddragon: DataDragonChampions) -> Self {
        let aliases = Self::embedded().aliases;
        let ids = ddragon
            .data
            .into_values()
            .map(|champion| {
                let name = aliases
                    .get(&champion.id)
                    .cloned()
                    .unwrap_or(champion.id);
                (champion.key, name)
            })
            .collect();

        ChampionTable { aliases, ids }
    }

    /// Canonical display name for a pick.
    pub fn canonical_name(&self, champion_name: &str) -> String {
        self.aliases
            .get(champion_name)
            .cloned()
            .unwrap_or_else(|| champion_name.to_string())
    }

    /// Name for a banned champion id; `None` for unknown ids and the `-1` marker.
    pub fn name_for_id(&self, champion_id: i64) -> Option<&str> {
        self.ids.get(&champion_id.to_string()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for ChampionTable {
    fn default() -> Self {
        Self::embedded()
    }
}
