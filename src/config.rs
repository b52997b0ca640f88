use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Invalid value for {name}: {value:?}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub app_version: String,
    pub app_description: String,
    pub host: String,
    pub server_port: u16,
    pub debug: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app_name: "Cars REST API".to_string(),
            app_version: "1.0.0".to_string(),
            app_description: "A REST service to manage cars with full CRUD operations".to_string(),
            host: "0.0.0.0".to_string(),
            server_port: 8000,
            debug: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let debug = parse_var("DEBUG", defaults.debug)?;

        Ok(Config {
            app_name: env::var("APP_NAME").unwrap_or(defaults.app_name),
            app_version: env::var("APP_VERSION").unwrap_or(defaults.app_version),
            app_description: env::var("APP_DESCRIPTION").unwrap_or(defaults.app_description),
            host: env::var("HOST").unwrap_or(defaults.host),
            server_port: parse_var("PORT", defaults.server_port)?,
            debug,
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| {
                if debug {
                    "debug".to_string()
                } else {
                    defaults.log_level
                }
            }),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.server_port)
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| ConfigError { name, value }),
        Err(_) => Ok(default),
    }
}
