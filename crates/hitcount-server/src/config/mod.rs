//! Server config loader (strict parsing + env overrides).
//!
//! Resolution order:
//! 1. `HITCOUNT_CONFIG` names a YAML file, which must exist.
//! 2. Otherwise `hitcount.yaml` in the working directory, if present.
//! 3. Otherwise built-in defaults.
//!
//! `HITCOUNT_LISTEN` and `HITCOUNT_LOG` override the file afterwards.

pub mod schema;

use std::fs;
use std::path::Path;

use hitcount_core::error::{HitcountError, Result};

pub use schema::{LogSection, ServerConfig, ServiceSection};

pub const CONFIG_ENV: &str = "HITCOUNT_CONFIG";
pub const LISTEN_ENV: &str = "HITCOUNT_LISTEN";
pub const LOG_ENV: &str = "HITCOUNT_LOG";
pub const DEFAULT_CONFIG_FILE: &str = "hitcount.yaml";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| HitcountError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| HitcountError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load config using the process environment.
pub fn load() -> Result<ServerConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Load config with an injectable env lookup.
pub fn load_with<F>(env: F) -> Result<ServerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = match env(CONFIG_ENV) {
        Some(path) => load_from_file(&path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => load_from_file(DEFAULT_CONFIG_FILE)?,
        None => ServerConfig::default(),
    };

    if let Some(listen) = env(LISTEN_ENV) {
        cfg.service.listen = listen;
    }
    if let Some(level) = env(LOG_ENV) {
        cfg.log.level = level;
    }

    cfg.validate()?;
    Ok(cfg)
}
