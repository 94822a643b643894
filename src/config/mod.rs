//! Configuration and constants
//!
//! - [`defaults`] - Built-in report parameters

pub mod defaults;
