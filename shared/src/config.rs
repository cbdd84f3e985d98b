use std::env;

use anyhow::{Context, Result};
use secrecy::SecretString;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST").context("DATABASE_HOST is not set")?,
            port: env::var("DATABASE_PORT")
                .context("DATABASE_PORT is not set")?
                .parse::<u16>()
                .context("DATABASE_PORT is not a valid port number")?,
            username: env::var("DATABASE_USERNAME").context("DATABASE_USERNAME is not set")?,
            password: SecretString::from(
                env::var("DATABASE_PASSWORD").context("DATABASE_PASSWORD is not set")?,
            ),
            database: env::var("DATABASE_NAME").context("DATABASE_NAME is not set")?,
        };

        let server = ServerConfig {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| ServerConfig::DEFAULT_HOST.into()),
            port: match env::var("SERVER_PORT") {
                Ok(v) => v
                    .parse::<u16>()
                    .context("SERVER_PORT is not a valid port number")?,
                Err(_) => ServerConfig::DEFAULT_PORT,
            },
        };

        Ok(Self { database, server })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub database: String,
}

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
