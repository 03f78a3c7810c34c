//! CLI library components for uibind.

pub mod logging;
pub mod summary;
