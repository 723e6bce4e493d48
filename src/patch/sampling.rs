//! Random parameter draws shared by the sheet and set composers

use crate::io::configuration::{
    ORIENTATION_STEP_DEGREES, ORIENTATION_STEPS, PHASE_RANGE, RANDOM_SET_SIZE_RANGE,
    SIGMA_DIVISOR_RANGE, WAVELENGTH_DIVISOR_RANGE,
};
use crate::patch::generator::PatchParams;
use rand::Rng;

/// Draws patch parameters scaled to a given patch size
///
/// Wavelength and sigma are the size divided by small random integers, so
/// every patch shows between five and ten cycles and a window of comparable
/// relative width regardless of its resolution.
#[derive(Debug, Clone, Copy)]
pub struct PatchSampler {
    randomize_brightness: bool,
}

impl PatchSampler {
    /// Sampler whose patches carry the given brightness behaviour
    pub const fn new(randomize_brightness: bool) -> Self {
        Self {
            randomize_brightness,
        }
    }

    /// Sample parameters for a patch of side `size`
    pub fn sample<R: Rng + ?Sized>(&self, size: u32, rng: &mut R) -> PatchParams {
        let side = f64::from(size);
        let wavelength_divisor: u32 = rng.random_range(WAVELENGTH_DIVISOR_RANGE);
        let orientation_step: u32 = rng.random_range(ORIENTATION_STEPS);
        let sigma_divisor: u32 = rng.random_range(SIGMA_DIVISOR_RANGE);
        let phase: u32 = rng.random_range(PHASE_RANGE);

        PatchParams::new(
            size as usize,
            side / f64::from(wavelength_divisor),
            ORIENTATION_STEP_DEGREES * f64::from(orientation_step),
            side / f64::from(sigma_divisor),
            f64::from(phase),
        )
        .with_random_brightness(self.randomize_brightness)
    }

    /// Sample a size from the random set range, then parameters for it
    pub fn sample_with_random_size<R: Rng + ?Sized>(&self, rng: &mut R) -> PatchParams {
        let size: u32 = rng.random_range(RANDOM_SET_SIZE_RANGE);
        self.sample(size, rng)
    }
}
