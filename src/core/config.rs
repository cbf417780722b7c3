//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lostfound/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::core::navigation::Tab;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LostFoundConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_tab: Option<Tab>,
    pub submit_delay_ms: Option<u64>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactConfig {
    pub opener: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_tab: Tab,
    pub submit_delay: Duration,
    pub log_level: LevelFilter,
    pub opener: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&LostFoundConfig::default(), None, |_: &str| None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lostfound/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lostfound").join("config.toml"))
}

/// Load config from `~/.lostfound/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LostFoundConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LostFoundConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LostFoundConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LostFoundConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<LostFoundConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LostFoundConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Campus Lost & Found Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_tab = "lost"                 # "lost", "found", "post" or "info"
# submit_delay_ms = 1000             # Pause before a posted item is acknowledged
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# [contact]
# opener = "xdg-open"                # Program that receives mailto:/tel: links
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_tab` is from the `--tab` flag (None = not specified).
pub fn resolve(config: &LostFoundConfig, cli_tab: Option<Tab>) -> ResolvedConfig {
    resolve_with(config, cli_tab, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env`.
pub fn resolve_with(
    config: &LostFoundConfig,
    cli_tab: Option<Tab>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start tab: CLI → env → config → default
    let start_tab = cli_tab
        .or_else(|| {
            env("LOSTFOUND_START_TAB").and_then(|s| parse_env("LOSTFOUND_START_TAB", &s, parse_tab))
        })
        .or(config.general.start_tab)
        .unwrap_or_default();

    // Submit delay: env → config → default
    let submit_delay_ms = env("LOSTFOUND_SUBMIT_DELAY_MS")
        .and_then(|s| parse_env("LOSTFOUND_SUBMIT_DELAY_MS", &s, |v| v.parse::<u64>().ok()))
        .or(config.general.submit_delay_ms)
        .unwrap_or(DEFAULT_SUBMIT_DELAY_MS);

    // Log level: env → config → default
    let parse_level = |v: &str| LevelFilter::from_str(v).ok();
    let log_level = env("LOSTFOUND_LOG_LEVEL")
        .and_then(|s| parse_env("LOSTFOUND_LOG_LEVEL", &s, parse_level))
        .or_else(|| {
            config
                .general
                .log_level
                .as_deref()
                .and_then(|s| parse_env("log_level", s, parse_level))
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Opener: env → config → platform default
    let opener = env("LOSTFOUND_OPENER").or_else(|| config.contact.opener.clone());

    ResolvedConfig {
        start_tab,
        submit_delay: Duration::from_millis(submit_delay_ms),
        log_level,
        opener,
    }
}

fn parse_tab(value: &str) -> Option<Tab> {
    <Tab as clap::ValueEnum>::from_str(value, true).ok()
}

fn parse_env<T>(key: &str, value: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(value.trim());
    if parsed.is_none() {
        warn!("Ignoring invalid value for {}: {:?}", key, value);
    }
    parsed
}
