//! Input/output operations and error handling

/// Command-line interface for the puzzle generator binary
pub mod cli;
/// Engine constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and word-list loading
pub mod error;
/// Word-list file loading
pub mod wordlist;
