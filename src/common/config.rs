// src/common/config.rs
//! Runtime configuration read from the environment (after `.env` is loaded)

use std::env;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:3001,http://localhost:5173";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub reset_db: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or unparsable values
    /// fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://notice_api.db".to_string());

        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let reset_db = lookup("RESET_DB")
            .unwrap_or_else(|| "false".to_string())
            .to_lowercase()
            == "true";

        Self {
            database_url,
            port,
            cors_origins,
            reset_db,
        }
    }
}
