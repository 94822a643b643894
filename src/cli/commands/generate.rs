//! Generate command implementation
//!
//! Loads the settings and the board metadata, then generates and writes
//! each selected report in turn. The first failing report aborts the run.

use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::output;
use crate::core::dataset::{DataFormat, Dataset};
use crate::core::reports::{self, ReportKind};
use crate::core::settings::Settings;
use crate::error::{DatasetError, MetadocError};
use crate::infra::dirs::MetadocDirs;
use crate::infra::filesystem;

/// Load report settings from an explicit path or the config directory
pub fn load_settings(config: Option<&Path>) -> Result<Settings> {
    match config {
        Some(path) => {
            if !path.exists() {
                bail!("Settings file not found: {}", path.display());
            }
            Ok(Settings::load_from_path(path).map_err(MetadocError::from)?)
        }
        None => Ok(Settings::load(&MetadocDirs::new()).map_err(MetadocError::from)?),
    }
}

/// Read and parse the board metadata file
pub fn load_dataset(path: &Path) -> Result<Dataset, MetadocError> {
    let content = filesystem::read_file(path)?;
    let dataset = Dataset::parse(&content, DataFormat::from_path(path)).map_err(|error| {
        DatasetError::Parse {
            path: path.to_path_buf(),
            error,
        }
    })?;
    Ok(dataset)
}

/// Report kinds to generate, in generation order
fn selected_kinds(requested: &[ReportKind]) -> Vec<ReportKind> {
    if requested.is_empty() {
        return ReportKind::ALL.to_vec();
    }
    let mut kinds = requested.to_vec();
    kinds.sort();
    kinds.dedup();
    kinds
}

/// Execute the generate command
pub fn execute(
    data_file: &Path,
    output_dir: &Path,
    config: Option<&Path>,
    requested: &[ReportKind],
) -> Result<()> {
    let settings = load_settings(config)?;
    let dataset = load_dataset(data_file)?;
    tracing::info!(
        "Loaded {} boards from {}",
        dataset.len(),
        data_file.display()
    );

    filesystem::ensure_output_dir(output_dir).map_err(MetadocError::from)?;

    for kind in selected_kinds(requested) {
        let report = match reports::generate(kind, &dataset, &settings) {
            Ok(report) => report,
            Err(e) => {
                for violation in e.violations() {
                    output::error(violation);
                }
                return Err(MetadocError::from(e).into());
            }
        };

        for warning in &report.warnings {
            output::warn(warning);
        }

        let path = output_dir.join(report.file_name());
        output::info(format!("Writing {}", path.display()));
        filesystem::write_file(&path, &report.content).map_err(MetadocError::from)?;
    }

    Ok(())
}
