use ::config::{Config, ConfigError, Environment, File};
use dotenv::dotenv;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub log_level: String,
}

impl Settings {
    /// Defaults, then `config.toml` if present, then `APP_*` environment
    /// variables (`APP_APPLICATION__PORT=9000`).
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();
        let mut s = Config::default();
        s.set_default("application.host", "127.0.0.1")?;
        s.set_default("application.port", 8080_i64)?;
        s.set_default("database.url", ":memory:")?;
        s.set_default("log_level", "info")?;
        s.merge(File::with_name("config").required(false))?;
        s.merge(Environment::with_prefix("APP").separator("__"))?;
        s.try_into()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }
}
