mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::scoring::{validate_scoring, ScoringConfig};

/// Get the config directory path (~/.config/nutriscan/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("nutriscan"))
}

/// Get the default config file path (~/.config/nutriscan/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/nutriscan/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
/// - The scoring section fails validation
///
/// A missing file at the default path is not an error: the built-in rubric is used.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => {
            let default_path = get_config_path()?;
            if !default_path.exists() {
                warn!(path = %default_path.display(), "no config file, using default scoring");
                return Ok(Config::default());
            }
            default_path
        }
    };

    let config = read_config(&config_path)?;
    info!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Load just the scoring rubric, falling back to the default one.
pub fn load_scoring(path: Option<PathBuf>) -> Result<ScoringConfig> {
    Ok(load_config(path)?.effective_scoring())
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    if let Some(ref scoring) = config.scoring {
        if let Err(errors) = validate_scoring(scoring) {
            anyhow::bail!(
                "Invalid scoring config in {}:\n  {}",
                config_path.display(),
                errors.join("\n  ")
            );
        }
    }

    Ok(config)
}
