//! Gabor patch generation for vision-science stimuli
//!
//! A Gabor patch is a sinusoidal grating windowed by a 2D Gaussian. Patches are
//! rendered as dense `f64` arrays, encoded through a grayscale colormap and
//! written either as one tiled contact sheet or as a set of individual files.

#![forbid(unsafe_code)]

/// Contact sheet and random set composition
pub mod compose;
/// Input/output operations, configuration and error handling
pub mod io;
/// Coordinate grids shared by the patch computations
pub mod math;
/// Patch rendering and random parameter sampling
pub mod patch;

pub use io::error::{GaborError, Result};
