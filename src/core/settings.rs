//! Report settings
//!
//! Reads the report parameters from `config.toml` in the config directory
//! or from an explicit path. Every setting is optional and falls back to
//! the built-in values in [`crate::config::defaults`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::defaults;
use crate::error::SettingsError;
use crate::infra::dirs::MetadocDirs;

/// Report settings for bsp-metadoc
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Table layout
    #[serde(default)]
    pub table: TableSettings,

    /// Community kernel list
    #[serde(default)]
    pub kernels: KernelSettings,

    /// Userspace package table
    #[serde(default)]
    pub userspace: UserspaceSettings,

    /// SoC package table
    #[serde(default)]
    pub soc: SocSettings,
}

/// Table layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSettings {
    /// Spaces between columns
    pub spacing: Option<usize>,
}

/// Community kernel list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KernelSettings {
    /// Layers whose kernels are listed
    pub community_layers: Option<Vec<String>>,
}

/// Userspace package table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserspaceSettings {
    /// Packages expected to be uniform across boards
    pub packages: Option<Vec<String>>,
}

/// SoC package table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocSettings {
    /// SoC columns
    pub families: Option<Vec<String>>,

    /// Packages resolved per SoC
    pub packages: Option<Vec<String>>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

impl Settings {
    /// Load settings from the config directory
    ///
    /// A missing file yields the defaults.
    pub fn load(dirs: &MetadocDirs) -> Result<Self, SettingsError> {
        Self::load_from_path(&dirs.settings_path())
    }

    /// Load settings from a specific path
    ///
    /// A missing file yields the defaults; an unreadable or invalid file is
    /// an error.
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse from TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get the effective column spacing
    #[must_use]
    pub fn spacing(&self) -> usize {
        self.table.spacing.unwrap_or(defaults::TABLE_SPACING)
    }

    /// Get the effective community kernel layers
    #[must_use]
    pub fn community_layers(&self) -> Vec<String> {
        self.kernels
            .community_layers
            .clone()
            .unwrap_or_else(|| owned(defaults::COMMUNITY_KERNEL_LAYERS))
    }

    /// Get the effective userspace packages
    #[must_use]
    pub fn userspace_packages(&self) -> Vec<String> {
        self.userspace
            .packages
            .clone()
            .unwrap_or_else(|| owned(defaults::USERSPACE_PACKAGES))
    }

    /// Get the effective SoC columns, sorted
    #[must_use]
    pub fn soc_families(&self) -> Vec<String> {
        let mut families = self
            .soc
            .families
            .clone()
            .unwrap_or_else(|| owned(defaults::SOC_FAMILIES));
        families.sort();
        families.dedup();
        families
    }

    /// Get the effective per-SoC packages
    #[must_use]
    pub fn soc_packages(&self) -> Vec<String> {
        self.soc
            .packages
            .clone()
            .unwrap_or_else(|| owned(defaults::SOC_PACKAGES))
    }
}
