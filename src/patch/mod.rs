//! Gabor patch rendering and random parameter sampling

/// Grating, trimmed Gaussian window and their product
pub mod generator;
/// Random parameter draws shared by the composers
pub mod sampling;

pub use generator::{PatchParams, gabor_patch};
