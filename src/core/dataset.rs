//! Board metadata dataset
//!
//! Typed view of the serialized board/recipe mapping produced by the
//! metadata collector. The dataset is loaded once and only ever borrowed.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConsistencyError;

/// Abstract component provided by the kernel recipe
pub const KERNEL: &str = "virtual/kernel";

/// Abstract component provided by the bootloader recipe
pub const BOOTLOADER: &str = "virtual/bootloader";

/// Barebox recipe key
pub const BAREBOX: &str = "barebox";

/// Bootloader assumed when a board does not override it
pub const DEFAULT_BOOTLOADER: &str = "u-boot";

/// How one package is provided for one board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct RecipeDescriptor {
    /// Concrete provider name (e.g. "linux-imx")
    pub recipe: String,

    /// Version identifier, canonicalised to a string
    #[serde(deserialize_with = "version_string")]
    pub version: String,

    /// Layer the recipe comes from
    #[serde(default)]
    pub layer: String,

    /// Human-readable description of the provider
    #[serde(default)]
    pub description: String,

    /// Regex restricting the package to matching SoCs
    #[serde(default, deserialize_with = "non_empty")]
    pub compatible_machine: Option<String>,
}

/// One supported hardware board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BoardRecord {
    /// Colon-separated SoC identifiers
    pub soc_family: String,

    /// Bootloader override; `None` means u-boot
    #[serde(default, deserialize_with = "non_empty")]
    pub image_bootloader: Option<String>,

    /// Recipes keyed by package or virtual component name
    #[serde(default)]
    pub recipes: BTreeMap<String, RecipeDescriptor>,
}

impl BoardRecord {
    /// SoC tokens of the board's family
    pub fn soc_tokens(&self) -> impl Iterator<Item = &str> {
        self.soc_family.split(':').filter(|s| !s.is_empty())
    }

    /// Check whether the board belongs to the given SoC
    pub fn in_soc_family(&self, soc: &str) -> bool {
        self.soc_tokens().any(|token| token == soc)
    }

    /// Get a recipe by key
    pub fn recipe(&self, key: &str) -> Option<&RecipeDescriptor> {
        self.recipes.get(key)
    }

    /// Check whether the board uses the given bootloader
    ///
    /// Either the image-bootloader override or the `virtual/bootloader`
    /// provider may name it.
    pub fn uses_bootloader(&self, name: &str) -> bool {
        self.image_bootloader.as_deref() == Some(name)
            || self.recipe(BOOTLOADER).is_some_and(|r| r.recipe == name)
    }

    /// Check whether the board boots the default bootloader image
    pub fn uses_default_bootloader(&self) -> bool {
        self.image_bootloader
            .as_deref()
            .map_or(true, |b| b == DEFAULT_BOOTLOADER)
    }
}

/// Serialization format of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl DataFormat {
    /// Pick the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Complete board metadata, keyed by board name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Dataset {
    boards: BTreeMap<String, BoardRecord>,
}

impl Dataset {
    /// Build a dataset from board records
    pub fn new(boards: BTreeMap<String, BoardRecord>) -> Self {
        Self { boards }
    }

    /// Parse from JSON string
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Parse from TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse content in the given format
    pub fn parse(content: &str, format: DataFormat) -> Result<Self, String> {
        match format {
            DataFormat::Json => Self::from_json(content).map_err(|e| e.to_string()),
            DataFormat::Toml => Self::from_toml(content).map_err(|e| e.to_string()),
        }
    }

    /// Iterate boards in name order
    pub fn boards(&self) -> impl Iterator<Item = (&str, &BoardRecord)> {
        self.boards.iter().map(|(name, board)| (name.as_str(), board))
    }

    /// Get a board by name
    pub fn get(&self, name: &str) -> Option<&BoardRecord> {
        self.boards.get(name)
    }

    /// Number of boards
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Check whether the dataset has no boards
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Look up a recipe a report depends on
    pub fn require_recipe(
        &self,
        board: &str,
        recipe: &str,
    ) -> Result<&RecipeDescriptor, ConsistencyError> {
        self.get(board)
            .and_then(|b| b.recipe(recipe))
            .ok_or_else(|| ConsistencyError::MissingRecipe {
                board: board.to_string(),
                recipe: recipe.to_string(),
            })
    }
}

/// Accept string or numeric versions
///
/// Floats use Rust's shortest round-trip form, which can differ from the
/// producer's spelling for exponents (`1e16` rather than `1e+16`).
fn version_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawVersion {
        Text(String),
        Integer(i64),
        Unsigned(u64),
        Float(f64),
    }

    Ok(match RawVersion::deserialize(deserializer)? {
        RawVersion::Text(s) => s,
        RawVersion::Integer(i) => i.to_string(),
        RawVersion::Unsigned(u) => u.to_string(),
        RawVersion::Float(f) => format!("{f:?}"),
    })
}

/// Treat null and empty strings as absent
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
