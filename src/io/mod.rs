/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and channel extraction
pub mod image;
/// Traversal progress display
pub mod progress;
/// Run report formatting
pub mod report;
