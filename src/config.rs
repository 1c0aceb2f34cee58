use std::{env, net::IpAddr, str::FromStr};

use dotenvy::dotenv;
use log::{debug, info, warn};

use crate::errors::ConfigError;

// Server-specific configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub workers: usize,
}

// Application-specific configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub environment: Environment,
    pub log_level: String,
}

// Environment enum for different deployment environments
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!(
                "Invalid environment: {}. Must be one of: development, testing, production",
                s
            )),
        }
    }
}

type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first if present
    pub fn load() -> ConfigResult<Self> {
        match dotenv() {
            Ok(path) => debug!(".env file loaded from {}", path.display()),
            Err(e) => warn!("Could not load .env file: {}", e),
        }

        let config = Self::from_lookup(|key| env::var(key))?;
        info!("Configuration loaded successfully");
        debug!("Loaded config: {:?}", config);

        Ok(config)
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let server = ServerConfig {
            host: get_or_default(&lookup, "SERVER_HOST", "127.0.0.1")?,
            port: get_or_default(&lookup, "SERVER_PORT", "3000")?,
            workers: get_or_default(&lookup, "SERVER_WORKERS", "4")?,
        };

        let version = env!("CARGO_PKG_VERSION");

        let app = AppConfig {
            name: get_or_default(&lookup, "APP_NAME", "url-shortener")?,
            version: get_or_default(&lookup, "APP_VERSION", version)?,
            environment: get_or_default(&lookup, "APP_ENVIRONMENT", "development")?,
            log_level: get_or_default(&lookup, "RUST_LOG", "info")?,
        };

        Ok(Config { server, app })
    }
}

/// Helper function to get a variable with a default value
fn get_or_default<T, F>(lookup: &F, key: &str, default: &str) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Result<String, env::VarError>,
{
    let parse = |raw: &str| {
        raw.parse::<T>().map_err(|e| ConfigError::Parse {
            key: key.to_string(),
            reason: e.to_string(),
        })
    };

    match lookup(key) {
        Ok(val) => parse(val.trim()),
        Err(env::VarError::NotPresent) => {
            debug!("{} not set, using default: {}", key, default);
            parse(default)
        }
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
            key: key.to_string(),
        }),
    }
}
