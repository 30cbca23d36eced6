use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[allow(unused)]
pub struct Backend {
    /// Base URL of the authentication backend.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Backend {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            url: "http://localhost:3001/api/auth".into(),
            timeout: 10,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[allow(unused)]
pub struct Settings {
    pub backend: Backend,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("backend.url", "http://localhost:3001/api/auth")?
            .set_default("backend.timeout", 10)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }
}
