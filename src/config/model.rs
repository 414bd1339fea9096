//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application runs without a config file.

use crate::store::account::Balance;
use serde::{Deserialize, Serialize};

/// Amount moved by each button press in the stock demo.
pub const DEFAULT_AMOUNT: i64 = 1000;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub account: AccountConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default)]
    pub initial_balance: Balance,
}

/// Button amounts and redraw timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_amount")]
    pub deposit_amount: i64,
    #[serde(default = "default_amount")]
    pub withdraw_amount: i64,
    /// How many ticks a status message stays up before the key hints return.
    #[serde(default = "default_status_timeout_ticks")]
    pub status_timeout_ticks: u32,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            deposit_amount: default_amount(),
            withdraw_amount: default_amount(),
            status_timeout_ticks: default_status_timeout_ticks(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_amount() -> i64 {
    DEFAULT_AMOUNT
}
fn default_status_timeout_ticks() -> u32 {
    60
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".into()
}
fn default_log_dir() -> String {
    "~/.local/share/crabbank/logs".into()
}
