use crate::codec::CsvMapping;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Key of the persisted snapshot. Bump the suffix when the record layout
/// changes so an old snapshot is detected instead of misread.
pub const DEFAULT_STORAGE_KEY: &str = "ev_charge_records_v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_seed_file")]
    pub seed_file: String,
    #[serde(default)]
    pub csv_mapping: CsvMapping,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_seed_file() -> String {
    Config::seed_file_path().to_string_lossy().to_string()
}
fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            storage_key: default_storage_key(),
            seed_file: default_seed_file(),
            csv_mapping: CsvMapping::default(),
            currency_symbol: default_currency_symbol(),
        }
    }

    /// Return the standard configuration directory (`~/.evlogbook`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".evlogbook")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("evlogbook.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("evlogbook.sqlite")
    }

    /// Default location of the CSV used to seed an empty logbook
    pub fn seed_file_path() -> PathBuf {
        Self::config_dir().join("initial_data.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path.clone());

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path).map_err(|e: io::Error| {
                AppError::Config(format!("cannot create {}: {e}", db_path.display()))
            })?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
