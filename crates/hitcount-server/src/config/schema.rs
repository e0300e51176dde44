use std::net::SocketAddr;

use hitcount_core::error::{HitcountError, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub service: ServiceSection,

    #[serde(default)]
    pub log: LogSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            service: ServiceSection::default(),
            log: LogSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(HitcountError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.service.validate()?;
        self.log.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            listen: default_listen(),
            greeting: default_greeting(),
        }
    }
}

impl ServiceSection {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(HitcountError::BadRequest("service.name must not be empty".into()));
        }
        if self.greeting.trim().is_empty() {
            return Err(HitcountError::BadRequest(
                "service.greeting must not be empty".into(),
            ));
        }
        self.listen_addr()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            HitcountError::BadRequest(format!(
                "service.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogSection {
    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.level).map_err(|e| {
            HitcountError::BadRequest(format!(
                "log.level is not a valid filter ({}): {e}",
                self.level
            ))
        })?;
        Ok(())
    }
}

fn default_version() -> u32 {
    1
}
fn default_name() -> String {
    "hitcount".into()
}
fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_greeting() -> String {
    "Hello from Dockerized hitcount".into()
}
fn default_log_level() -> String {
    "info".into()
}
