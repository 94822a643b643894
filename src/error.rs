//! Error types for bsp-metadoc
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Dataset loading errors
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Failed to deserialize the data file
    #[error("Failed to parse data file '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}

/// Report settings errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read settings file
    #[error("Failed to read settings file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Failed to parse settings file
    #[error("Failed to parse settings file '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}

/// Table rendering errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    /// A row does not have as many cells as the header
    #[error("Table row {row} has {actual} columns, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Column spacing must be at least one space
    #[error("Table column spacing must be at least 1")]
    InvalidSpacing,
}

/// Data consistency violations found while aggregating board metadata
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    /// A package expected to be uniform has different versions across boards
    #[error("multiple versions have been found for {package}: {}", versions.join(", "))]
    VersionConflict {
        package: String,
        versions: Vec<String>,
    },

    /// A package expected to apply to every board declares a machine restriction
    #[error("Package {package} has restrictions with regard to boards: COMPATIBLE_MACHINE={pattern} (board {board})")]
    RestrictionViolation {
        package: String,
        board: String,
        pattern: String,
    },

    /// A board belongs to more than one exclusive group
    #[error("Board {board} has been found in {} SoCs", groups.join(" and "))]
    MultiMembership { board: String, groups: Vec<String> },

    /// The most frequent value of a group is not unique
    #[error("The most frequent versions ({}) for {package} are equally distributed among boards of SoC {soc}. Cannot determine which one to use.", candidates.join(", "))]
    AmbiguousMajority {
        package: String,
        soc: String,
        candidates: Vec<String>,
    },

    /// A board lacks a recipe the report relies on
    #[error("Board {board} has no '{recipe}' recipe")]
    MissingRecipe { board: String, recipe: String },

    /// A compatible-machine pattern is not a valid regular expression
    #[error("Package {package} on board {board} has an invalid COMPATIBLE_MACHINE '{pattern}': {error}")]
    InvalidPattern {
        package: String,
        board: String,
        pattern: String,
        error: String,
    },
}

/// Report generation errors
#[derive(Error, Debug)]
pub enum ReportError {
    /// The dataset violated one or more consistency rules
    #[error("{report}: {} consistency error(s) found", errors.len())]
    Inconsistent {
        report: String,
        errors: Vec<ConsistencyError>,
    },

    /// The report table could not be rendered
    #[error("{report}: {source}")]
    Table {
        report: String,
        #[source]
        source: TableError,
    },
}

impl ReportError {
    /// Individual violations carried by this error, if any
    pub fn violations(&self) -> &[ConsistencyError] {
        match self {
            Self::Inconsistent { errors, .. } => errors,
            Self::Table { .. } => &[],
        }
    }
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// A non-directory entry occupies the output path
    #[error("A file named {path} already exists. Aborting.")]
    NotADirectory { path: PathBuf },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Top-level bsp-metadoc error type
#[derive(Error, Debug)]
pub enum MetadocError {
    /// Dataset error
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Settings error
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Report error
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}
