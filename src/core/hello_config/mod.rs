// src/core/hello_config/mod.rs

use serde::{Serialize, Deserialize};
use std::env;
use std::fmt;

use crate::core::error::HelloError;

pub mod hello_config_hook;
pub mod hello_config_loop;

pub use hello_config_hook::*;
pub use hello_config_loop::*;

pub const ENV_USR_FUN_ENABLED: &str = "HELLO_USR_FUN_ENABLED";
pub const ENV_INTERVAL_MS: &str = "HELLO_INTERVAL_MS";
pub const ENV_MAX_ITERATIONS: &str = "HELLO_MAX_ITERATIONS";

/// Grundlegende Konfiguration der Anwendung.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct HelloConfig {
    pub hook_config: HookConfig,
    pub loop_config: LoopConfig,
}

impl HelloConfig {
    /// Lädt `.env` (falls vorhanden) und wendet die `HELLO_*` Variablen an.
    pub fn from_env() -> Result<Self, HelloError> {
        dotenv::dotenv().ok();
        let mut config = HelloConfig::default();
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), HelloError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_USR_FUN_ENABLED) {
            self.hook_config.usr_fun_enabled = parse_bool(ENV_USR_FUN_ENABLED, &raw)?;
        }
        if let Some(raw) = lookup(ENV_INTERVAL_MS) {
            self.loop_config.interval_ms = parse_u64(ENV_INTERVAL_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_ITERATIONS) {
            self.loop_config.max_iterations = Some(parse_u64(ENV_MAX_ITERATIONS, &raw)?);
        }
        Ok(())
    }

    /// Ohne Pause wäre die Schleife ein Busy-Wait.
    pub fn validate(&self) -> Result<(), HelloError> {
        if self.loop_config.interval_ms == 0 {
            return Err(HelloError::Config("interval_ms must be greater than zero".to_string()));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, HelloError> {
        serde_json::from_str(json).map_err(|e| HelloError::Config(format!("Invalid JSON config: {}", e)))
    }

    pub fn to_json(&self) -> Result<String, HelloError> {
        serde_json::to_string_pretty(self).map_err(|e| HelloError::Config(e.to_string()))
    }
}

impl fmt::Display for HelloConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hook: {:?}, Loop: {:?}", self.hook_config, self.loop_config)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, HelloError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "y" | "yes" | "on" => Ok(true),
        "0" | "false" | "n" | "no" | "off" | "" => Ok(false),
        other => Err(HelloError::Config(format!("{}: expected a boolean, got '{}'", key, other))),
    }
}

fn parse_u64(key: &str, raw: &str) -> Result<u64, HelloError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| HelloError::Config(format!("{}: {} ('{}')", key, e, raw)))
}
