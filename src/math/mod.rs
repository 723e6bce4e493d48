//! Mathematical utilities for patch rendering

/// Centered coordinate ramps and meshgrids
pub mod coordinates;
