use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default SQLite file, created next to wherever the binary is run
pub const DEFAULT_DATABASE_PATH: &str = "bacon_social_media.db";
/// Environment variable that overrides `database.path`
pub const DATABASE_PATH_ENV: &str = "BACON_DATABASE_PATH";

const CONFIG_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Deserialize)]
pub struct Database {
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database: Database,
}

impl Settings {
    /// Load from `settings.toml` in the current directory (if any) and the environment
    pub fn new() -> Result<Self, ConfigError> {
        let config_file = PathBuf::from(CONFIG_FILE_NAME);
        let config_file = config_file.exists().then_some(config_file);
        Self::load(config_file.as_deref(), std::env::var(DATABASE_PATH_ENV).ok())
    }

    /// Build settings from defaults, then `config_file`, then `database_override`.
    ///
    /// Later sources win.
    pub fn load(
        config_file: Option<&Path>,
        database_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().set_default("database.path", DEFAULT_DATABASE_PATH)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path));
        }

        if let Some(db_path) = database_override {
            builder = builder.set_override("database.path", db_path)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Database path to open; a path given on the command line beats the settings
    pub fn database_path(&self, cli_override: Option<String>) -> String {
        cli_override.unwrap_or_else(|| self.database.path.clone())
    }
}
