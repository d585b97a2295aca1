//! Server configuration
//!
//! Values come from environment variables (`PORT`, `BIND_HOST`,
//! `DATABASE_PATH`), falling back to the defaults below.

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_DATABASE_PATH: &str = "produtos.db";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_host: String,
    pub port: u16,
    pub database_path: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::load(config::Environment::default().try_parsing(true))
    }

    fn load(env: config::Environment) -> Result<Self> {
        config::Config::builder()
            .set_default("bind_host", DEFAULT_BIND_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("database_path", DEFAULT_DATABASE_PATH)?
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}
