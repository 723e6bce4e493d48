//! Input/output operations, configuration and error handling

/// Command-line parsing and the top-level runner
pub mod cli;
/// Generation constants and output file naming
pub mod configuration;
/// Error types and constructors shared across the crate
pub mod error;
/// Grayscale colormap encoding and PNG persistence
pub mod image;
/// Terminal progress bars and status lines
pub mod progress;
