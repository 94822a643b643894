//! bsp-metadoc CLI - BSP documentation generator
//!
//! Entry point for the bsp-metadoc command-line application.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use bsp_metadoc::cli::output::{display_error, OutputConfig};
use bsp_metadoc::cli::Cli;

fn main() -> Result<()> {
    if Cli::wants_legacy_help(std::env::args_os()) {
        Cli::command().print_help()?;
        println!();
        std::process::exit(0);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            e.print()?;
            std::process::exit(code);
        }
    };

    let output_config = OutputConfig::new(cli.quiet, cli.verbose);
    output_config.apply_global();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(output_config.log_level().into()),
        )
        .init();

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
