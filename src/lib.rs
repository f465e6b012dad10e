use std::sync::OnceLock;

pub mod commands;
pub mod file_parsers;

/// Application-level verbosity
pub static VERBOSE: OnceLock<bool> = OnceLock::new();
