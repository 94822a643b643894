//! Infrastructure layer
//!
//! Handles all I/O operations: filesystem access and directory lookup.
//! This module is the only place where side effects occur.

pub mod dirs;
pub mod filesystem;
