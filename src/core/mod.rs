//! Core business logic module
//!
//! This module contains all business logic for bsp-metadoc.
//! It has NO I/O operations - those belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`dataset`] - Board and recipe records
//! - [`format`] - Version formatting and table rendering
//! - [`consistency`] - Conflict and majority checks
//! - [`aggregate`] - Grouping boards and resolving versions per group
//! - [`reports`] - Documentation report generators
//! - [`settings`] - Report settings

pub mod aggregate;
pub mod consistency;
pub mod dataset;
pub mod format;
pub mod reports;
pub mod settings;
