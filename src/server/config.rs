use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Allowed CORS origin, any origin is allowed when unset
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
        })
    }

    /// Socket address the HTTP listener binds to.
    pub fn bind_address(&self) -> Result<SocketAddr, AppError> {
        let address = format!("{}:{}", self.host, self.port);

        address.parse::<SocketAddr>().map_err(|_| {
            ConfigError::InvalidEnvVar {
                name: "HOST".to_string(),
                value: self.host.clone(),
            }
            .into()
        })
    }
}
