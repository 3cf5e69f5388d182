use crate::error::AppError;
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "data/editions";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub champion_table: Option<PathBuf>,
    pub backup: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("OCCILAN_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let champion_table = env::var("OCCILAN_CHAMPION_TABLE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let backup = match env::var("OCCILAN_BACKUP") {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                AppError::ConfigError(format!(
                    "OCCILAN_BACKUP must be true or false, got '{}'",
                    value
                ))
            })?,
            Err(_) => true,
        };

        let log_level =
            env::var("OCCILAN_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            data_dir,
            champion_table,
            backup,
            log_level,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
