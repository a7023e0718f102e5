//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.wayfare/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::tab::Tab;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WayfareConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Tab to select at startup ("home", "shop" or "settings").
    pub start_tab: Option<String>,
    /// Milliseconds before the shimmer demo flips from loading to loaded.
    pub loading_delay_ms: Option<u64>,
    /// Seed value for each screen's cart badge.
    pub cart_badge: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

/// The shimmer demo simulates a five-second load before revealing content.
pub const DEFAULT_LOADING_DELAY_MS: u64 = 5000;
/// Every screen in the demo seeds its cart badge with five items.
pub const DEFAULT_CART_BADGE: u32 = 5;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_tab: Tab,
    pub loading_delay: Duration,
    pub cart_badge: u32,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            start_tab: Tab::default(),
            loading_delay: Duration::from_millis(DEFAULT_LOADING_DELAY_MS),
            cart_badge: DEFAULT_CART_BADGE,
        }
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

/// Returns the path to `~/.wayfare/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".wayfare").join("config.toml"))
}

/// Load config from `~/.wayfare/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WayfareConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WayfareConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WayfareConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(WayfareConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: WayfareConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Wayfare Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_tab = "home"          # "home", "shop" or "settings"
# loading_delay_ms = 5000     # shimmer demo: time until content "loads"
# cart_badge = 5              # seed value for each screen's cart badge
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars
/// → CLI flags. `cli_tab` and `cli_loading_delay_ms` come from CLI flags
/// (`None` = not specified).
pub fn resolve(
    config: &WayfareConfig,
    cli_tab: Option<Tab>,
    cli_loading_delay_ms: Option<u64>,
) -> ResolvedConfig {
    // Start tab: CLI → env → config → default
    let start_tab = cli_tab
        .or_else(|| parse_tab(std::env::var("WAYFARE_START_TAB").ok().as_deref()))
        .or_else(|| parse_tab(config.general.start_tab.as_deref()))
        .unwrap_or_default();

    // Loading delay: CLI → env → config → default
    let loading_delay_ms = cli_loading_delay_ms
        .or_else(|| {
            std::env::var("WAYFARE_LOADING_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or(config.general.loading_delay_ms)
        .unwrap_or(DEFAULT_LOADING_DELAY_MS);

    // Cart badge seed: config → default (no CLI flag; it's demo data)
    let cart_badge = config.general.cart_badge.unwrap_or(DEFAULT_CART_BADGE);

    ResolvedConfig {
        start_tab,
        loading_delay: Duration::from_millis(loading_delay_ms),
        cart_badge,
    }
}

/// Parse a tab name, warning on values that don't name a tab.
fn parse_tab(raw: Option<&str>) -> Option<Tab> {
    let raw = raw?;
    match Tab::from_id(raw) {
        Some(tab) => Some(tab),
        None => {
            warn!("Unknown tab {raw:?} in config, falling back to default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_empty_config_gives_defaults() {
        let resolved = resolve(&WayfareConfig::default(), None, None);
        assert_eq!(resolved.start_tab, Tab::Home);
        assert_eq!(
            resolved.loading_delay,
            Duration::from_millis(DEFAULT_LOADING_DELAY_MS)
        );
        assert_eq!(resolved.cart_badge, DEFAULT_CART_BADGE);
    }

    #[test]
    fn test_resolve_cli_beats_config_file() {
        let config = WayfareConfig {
            general: GeneralConfig {
                start_tab: Some("settings".into()),
                loading_delay_ms: Some(100),
                cart_badge: Some(9),
            },
        };
        let resolved = resolve(&config, Some(Tab::Shop), Some(250));
        assert_eq!(resolved.start_tab, Tab::Shop);
        assert_eq!(resolved.loading_delay, Duration::from_millis(250));
        assert_eq!(resolved.cart_badge, 9);
    }

    #[test]
    fn test_resolve_config_file_values_apply() {
        let config = WayfareConfig {
            general: GeneralConfig {
                start_tab: Some("shop".into()),
                loading_delay_ms: Some(1500),
                cart_badge: None,
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.start_tab, Tab::Shop);
        assert_eq!(resolved.loading_delay, Duration::from_millis(1500));
        assert_eq!(resolved.cart_badge, DEFAULT_CART_BADGE);
    }

    #[test]
    fn test_unknown_tab_name_falls_back_to_default() {
        let config = WayfareConfig {
            general: GeneralConfig {
                start_tab: Some("inventory".into()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.start_tab, Tab::Home);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: WayfareConfig = toml::from_str("[general]\nstart_tab = \"shop\"\n").unwrap();
        assert_eq!(config.general.start_tab.as_deref(), Some("shop"));
        assert_eq!(config.general.loading_delay_ms, None);
    }
}
