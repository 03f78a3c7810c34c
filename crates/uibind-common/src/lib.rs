//! Shared utilities for uibind crates.
//!
//! Every artifact the tool writes goes through [`write_atomic`], so a
//! failed save never leaves a truncated file where the previous one was.

pub mod fs;

pub use fs::{WriteError, write_atomic};
