//! Demo runtime settings
//!
//! Read once from the environment at startup; every field has a default so
//! the binary runs with no configuration at all.

use std::time::{SystemTime, UNIX_EPOCH};

/// Settings for the headless demo binary
#[derive(Debug, Clone)]
pub struct Settings {
    /// Simulation seed (`BADGE_PONG_SEED`); defaults to the wall clock
    pub seed: u64,
    /// Ticks to run before exiting (`BADGE_PONG_TICKS`)
    pub ticks: u64,
    /// Honor feedback delays in real time (`BADGE_PONG_REALTIME`)
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            ticks: 5_000,
            realtime: false,
        }
    }
}

impl Settings {
    /// Load settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            seed: env_u64("BADGE_PONG_SEED").unwrap_or(defaults.seed),
            ticks: env_u64("BADGE_PONG_TICKS").unwrap_or(defaults.ticks),
            realtime: std::env::var("BADGE_PONG_REALTIME")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.realtime),
        }
    }
}

fn env_u64(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring unparsable {key}={raw}");
            None
        }
    }
}
