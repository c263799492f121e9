use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub log_format: LogFormat,

    /// Breeding and hatch sessions older than this are purged.
    pub session_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let log_format = match std::env::var("LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            Ok(value) if value.eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            Ok(value) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "LOG_FORMAT".to_string(),
                    value,
                }
                .into())
            }
            Err(_) => LogFormat::Pretty,
        };

        let session_ttl_hours = match std::env::var("SESSION_TTL_HOURS") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "SESSION_TTL_HOURS".to_string(),
                value: value.clone(),
            })?,
            Err(_) => DEFAULT_SESSION_TTL_HOURS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            log_format,
            session_ttl_hours,
        })
    }
}
