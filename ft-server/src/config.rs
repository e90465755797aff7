use crate::error::{Result as ServerErrorResult, ServerError};

use std::env;

use log::LevelFilter;

/// Server configuration, read once at startup from the environment
/// (a `.env` file is honored when present).
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// Path to the SQLite database file
    pub database_path: String,
    /// Secret used to sign and verify HS256 tokens
    pub jwt_secret: String,
    /// Log level filter
    pub log_level: LevelFilter,
    /// Colored log output (disable for non-TTY sinks)
    pub log_colored: bool,
}

impl Config {
    pub fn from_env() -> ServerErrorResult<Self> {
        // Missing .env is fine; real environments set variables directly
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ServerError::EnvVar {
            message: "JWT_SECRET must be set".to_string(),
        })?;

        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .to_lowercase()
            .as_str()
        {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            other => {
                return Err(ServerError::EnvVar {
                    message: format!("Invalid LOG_LEVEL: {other}"),
                });
            }
        };

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "fintrack.db".to_string()),
            jwt_secret,
            log_level,
            log_colored: env::var("LOG_COLORED")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
        })
    }

    pub fn log_summary(&self) {
        log::info!("Config: bind_addr={}", self.bind_addr);
        log::info!("Config: database_path={}", self.database_path);
        log::info!("Config: log_level={:?}", self.log_level);
    }
}
