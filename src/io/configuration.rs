//! Generation constants and output naming

use std::ops::RangeInclusive;

// Hardcoded sheet run
/// Side length of every patch on the contact sheet
pub const SHEET_PATCH_SIZE: u32 = 256;
/// Number of patches per sheet row
pub const SHEET_WIDTH: u32 = 4;
/// Number of sheet rows
pub const SHEET_HEIGHT: u32 = 6;

// Hardcoded random set run
/// Number of individual patches written by the random set
pub const RANDOM_SET_COUNT: usize = 4;
/// Inclusive range of random patch sizes for the random set
pub const RANDOM_SET_SIZE_RANGE: RangeInclusive<u32> = 96..=512;

// Parameter sampling
/// Patch size is divided by a draw from this range to get the wavelength
pub const WAVELENGTH_DIVISOR_RANGE: RangeInclusive<u32> = 5..=10;
/// Patch size is divided by a draw from this range to get sigma
pub const SIGMA_DIVISOR_RANGE: RangeInclusive<u32> = 6..=10;
/// Orientations are multiples of this many degrees
pub const ORIENTATION_STEP_DEGREES: f64 = 10.0;
/// Number of orientation steps drawn from, `0..=18` covers 0° to 180°
pub const ORIENTATION_STEPS: RangeInclusive<u32> = 0..=18;
/// Phase is drawn from this range of whole cycles
pub const PHASE_RANGE: RangeInclusive<u32> = 0..=1;

// Patch rendering
/// Window values below this are forced to zero
pub const DEFAULT_TRIM_THRESHOLD: f64 = 0.005;
/// Brightness offsets are `step / BRIGHTNESS_DIVISOR` for a step in this range
pub const BRIGHTNESS_STEPS: RangeInclusive<i32> = -5..=5;
/// Divisor turning a brightness step into an offset
pub const BRIGHTNESS_DIVISOR: f64 = 10.0;

// Output layout
/// Directory receiving contact sheets
pub const SHEET_OUTPUT_DIR: &str = "sheets";
/// Directory receiving the random set
pub const SET_OUTPUT_DIR: &str = "set";
/// Prefix of per-patch files removed after compositing
pub const TRANSIENT_PREFIX: &str = "tmp_gabor_";
/// Prefix of random set files
pub const SET_FILE_PREFIX: &str = "gabor_";
/// Prefix of contact sheet files
pub const SHEET_FILE_PREFIX: &str = "sheet_";

/// File name of the `index`-th transient sheet tile, e.g. `tmp_gabor_007.png`
pub fn transient_file_name(index: usize) -> String {
    format!("{TRANSIENT_PREFIX}{index:03}.png")
}

/// File name of the `index`-th random set patch, e.g. `gabor_001.png`
pub fn set_file_name(index: usize) -> String {
    format!("{SET_FILE_PREFIX}{index:03}.png")
}

/// File name of a `width`×`height` contact sheet, e.g. `sheet_4x6.png`
pub fn sheet_file_name(width: u32, height: u32) -> String {
    format!("{SHEET_FILE_PREFIX}{width}x{height}.png")
}
