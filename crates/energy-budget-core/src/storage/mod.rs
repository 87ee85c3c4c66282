mod config;

pub use config::{Config, DefaultsConfig, RecommendationsConfig};

use std::path::PathBuf;
use tracing::warn;

/// Returns `~/.config/energy-budget[-dev]/` based on ENERGY_BUDGET_ENV,
/// without touching the filesystem.
///
/// Set ENERGY_BUDGET_ENV=dev to use development data directory. Falls back to
/// `./.config` when no home directory is known.
pub fn config_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| {
        warn!("home directory not found, using current directory for configuration");
        PathBuf::from(".")
    });
    let base_dir = home.join(".config");

    let env = std::env::var("ENERGY_BUDGET_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("energy-budget-dev")
    } else {
        base_dir.join("energy-budget")
    }
}

/// Same as [`config_dir`], creating the directory if needed.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
