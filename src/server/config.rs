use std::path::PathBuf;

use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub catalog_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            catalog_path: PathBuf::from(required_var("CATALOG_PATH")?),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    let value =
        std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))?;

    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvValue {
            var: name.to_string(),
            reason: "value is empty".to_string(),
        });
    }

    Ok(value)
}
