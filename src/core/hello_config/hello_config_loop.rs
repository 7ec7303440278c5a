// src/core/hello_config/hello_config_loop.rs

use serde::{Serialize, Deserialize};
use std::time::Duration;

/// Feste Ausgabezeile; nicht konfigurierbar.
pub const HELLO_LINE: &str = "Hello, World!";
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// Konfiguration für die Hauptschleife.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoopConfig {
    pub interval_ms: u64, // Pause nach jeder Ausgabe
    pub max_iterations: Option<u64>, // None = läuft für immer
}

impl LoopConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        LoopConfig {
            interval_ms: DEFAULT_INTERVAL_MS,
            max_iterations: None,
        }
    }
}
