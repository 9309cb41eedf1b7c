/// Configuration management for Portfolio Service
///
/// This module handles loading and managing configuration from environment variables.
/// `main` loads a `.env` file first, if one exists.
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration (server shape only)
    pub cors: CorsConfig,
    /// Storage configuration
    pub storage: StorageConfig,
    /// Logging configuration
    pub log: LogConfig,
}

/// How the API routes are mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServeMode {
    /// One long-running app; CORS via middleware
    Server,
    /// One independent function per route with permissive CORS headers
    Functions,
}

impl FromStr for ServeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server" => Ok(Self::Server),
            "functions" => Ok(Self::Functions),
            other => Err(format!("unknown serve mode '{other}' (expected server|functions)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}' (expected text|json)")),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    #[validate(length(min = 1))]
    pub host: String,
    /// Server port to bind to
    #[validate(range(min = 1))]
    pub port: u16,
    /// Worker threads (0 = actix default)
    pub workers: usize,
    /// Route mounting shape
    pub mode: ServeMode,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Insert the demonstration content at startup
    pub seed_demo_data: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let production = app_env.eq_ignore_ascii_case("production");

        let app = AppConfig {
            env: app_env,
            host: std::env::var("PORTFOLIO_SERVICE_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env_or_default("PORTFOLIO_SERVICE_PORT", 8080)?,
            workers: parse_env_or_default("PORTFOLIO_SERVICE_WORKERS", 0)?,
            mode: parse_env_or_default("PORTFOLIO_SERVE_MODE", ServeMode::Server)?,
        };
        app.validate()
            .map_err(|e| format!("invalid application settings: {}", e))?;

        let cors = {
            let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                Ok(value) => value,
                Err(_) if production => {
                    return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                }
                Err(_) => "http://localhost:5173".to_string(),
            };

            if production && allowed_origins.trim() == "*" {
                return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
            }

            CorsConfig { allowed_origins }
        };

        Ok(Config {
            app,
            cors,
            storage: StorageConfig {
                seed_demo_data: parse_env_or_default("PORTFOLIO_SEED_DEMO_DATA", true)?,
            },
            log: LogConfig {
                format: parse_env_or_default("LOG_FORMAT", LogFormat::Text)?,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, val, e)),
        Err(_) => Ok(default),
    }
}
