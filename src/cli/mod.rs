//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;
use std::ffi::OsStr;
use std::path::PathBuf;

use crate::core::reports::ReportKind;

/// Generate BSP documentation fragments from collected board metadata
///
/// Reads the board metadata file and writes the kernel, bootloader and
/// package tables into the output directory.
#[derive(Parser, Debug)]
#[command(name = "bsp-metadoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Board metadata file (JSON, or TOML with a .toml extension)
    pub data_file: PathBuf,

    /// Directory the documentation fragments are written to
    pub output_dir: PathBuf,

    /// Report settings file (defaults to config.toml in the config directory)
    #[arg(short, long, env = "BSP_METADOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only generate this report; may be repeated
    /// (kernel, u-boot, barebox, community-kernels, userspace, soc)
    #[arg(short, long = "report", value_name = "REPORT")]
    pub reports: Vec<ReportKind>,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress lines; warnings and errors are still shown
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check for the single-dash `-help` spelling clap does not know
    pub fn wants_legacy_help<I, S>(args: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        args.into_iter()
            .skip(1)
            .any(|a| a.as_ref() == OsStr::new("-help"))
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        commands::generate::execute(
            &self.data_file,
            &self.output_dir,
            self.config.as_deref(),
            &self.reports,
        )
    }
}
