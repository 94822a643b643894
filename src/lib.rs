//! bsp-metadoc - BSP documentation generator
//!
//! This library turns the board metadata collected from a BSP build into
//! plain-text documentation fragments: kernel and bootloader providers per
//! board, community kernels, and package versions per SoC.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (no I/O operations)
//! - [`infra`] - Infrastructure layer (filesystem, directories)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
