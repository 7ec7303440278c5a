// src/core/hello_config/hello_config_hook.rs

use serde::{Serialize, Deserialize};

/// Rohwert von CONFIG_USR_FUN zur Build-Zeit (leer, wenn nicht gesetzt).
pub const USR_FUN_BUILD_RAW: &str = env!("HELLO_USR_FUN_DEFAULT");

/// Kconfig-Stil: `y`, `1`, `true`, `yes` aktivieren, alles andere nicht.
pub fn parse_build_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "y" | "1" | "true" | "yes")
}

/// Konfiguration für den optionalen Startup-Hook (`usr_fun`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HookConfig {
    pub usr_fun_enabled: bool,
}

impl Default for HookConfig {
    fn default() -> Self {
        HookConfig {
            usr_fun_enabled: parse_build_flag(USR_FUN_BUILD_RAW),
        }
    }
}
