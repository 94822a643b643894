//! Platform-specific directory management
//!
//! Locates the directory holding the report settings. Follows the XDG Base
//! Directory Specification on Linux and standard locations on macOS.
//!
//! `BSP_METADOC_CONFIG_DIR` overrides the default config directory.

use std::env;
use std::path::PathBuf;

use crate::config::defaults::SETTINGS_FILE;

/// Environment variable overriding the config directory
pub const ENV_CONFIG_DIR: &str = "BSP_METADOC_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "bsp-metadoc";

/// Directory provider for bsp-metadoc
#[derive(Debug, Clone)]
pub struct MetadocDirs {
    config_dir: PathBuf,
}

impl MetadocDirs {
    /// Create a new `MetadocDirs` instance
    ///
    /// Checks the environment first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use an explicit config directory
    #[must_use]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the config directory path
    /// - Linux: `$XDG_CONFIG_HOME/bsp-metadoc` or `~/.config/bsp-metadoc`
    /// - macOS: `~/Library/Application Support/bsp-metadoc`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the settings file path
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for MetadocDirs {
    fn default() -> Self {
        Self::new()
    }
}
