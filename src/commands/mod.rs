//! Command implementations

pub mod completions;
pub mod copy;
pub mod version;
