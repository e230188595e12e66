//! Input/output around the collage core: errors, defaults, sources and the CLI

/// Command-line arguments and the batch driver
pub mod cli;
/// Layout constants and runtime defaults
pub mod configuration;
/// Error type shared by every operation
pub mod error;
/// Saving rendered collages
pub mod image;
/// Tracing subscriber setup for the binary
pub mod logging;
/// JSON export of placement records
pub mod metadata;
/// Batch progress display
pub mod progress;
/// Source directory scanning and tile selection
pub mod sources;
