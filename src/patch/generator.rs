//! Gabor patch rendering
//!
//! A patch is the elementwise product of two factors computed over the same
//! centered grid:
//!
//! - a sinusoidal grating, rotated by the orientation and shifted by the phase,
//!   optionally offset by one global brightness constant
//! - a Gaussian window with a hard cutoff at the trim threshold
//!
//! Samples are not clamped or normalized here; the encoder is responsible for
//! mapping them onto pixel values.

use crate::io::configuration::{BRIGHTNESS_DIVISOR, BRIGHTNESS_STEPS, DEFAULT_TRIM_THRESHOLD};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::math::coordinates::{centered_ramp, meshgrid};
use ndarray::{Array2, Zip};
use rand::Rng;
use std::f64::consts::TAU;

/// Geometric and rendering parameters of a single patch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchParams {
    /// Side length in samples
    pub size: usize,
    /// Samples per grating cycle
    pub wavelength: f64,
    /// Grating orientation in degrees, any finite value
    pub orientation_degrees: f64,
    /// Standard deviation of the Gaussian window in samples
    pub sigma: f64,
    /// Phase as a fraction of a cycle
    pub phase: f64,
    /// Window values below this become exactly zero
    pub trim_threshold: f64,
    /// Add one random global offset to the grating
    pub randomize_brightness: bool,
}

impl PatchParams {
    /// Parameters with the default trim threshold and fixed brightness
    pub const fn new(
        size: usize,
        wavelength: f64,
        orientation_degrees: f64,
        sigma: f64,
        phase: f64,
    ) -> Self {
        Self {
            size,
            wavelength,
            orientation_degrees,
            sigma,
            phase,
            trim_threshold: DEFAULT_TRIM_THRESHOLD,
            randomize_brightness: false,
        }
    }

    /// Replace the window cutoff
    pub const fn with_trim_threshold(self, trim_threshold: f64) -> Self {
        Self {
            trim_threshold,
            ..self
        }
    }

    /// Enable or disable the random brightness offset
    pub const fn with_random_brightness(self, randomize_brightness: bool) -> Self {
        Self {
            randomize_brightness,
            ..self
        }
    }

    /// Check that rendering these parameters yields finite samples
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is zero
    /// - `wavelength` or `sigma` is zero (division by zero)
    /// - `wavelength` or `sigma` is negative
    /// - any real parameter is NaN or infinite
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &"patch must be at least one sample wide",
            ));
        }
        check_divisor("wavelength", "spatial frequency", self.wavelength)?;
        check_divisor("sigma", "gaussian window", self.sigma)?;
        check_finite("orientation_degrees", self.orientation_degrees)?;
        check_finite("phase", self.phase)?;
        check_finite("trim_threshold", self.trim_threshold)?;
        Ok(())
    }
}

fn check_finite(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid_parameter(parameter, &value, &"must be finite"))
    }
}

// Zero is reported as a numeric failure rather than a bad argument
fn check_divisor(parameter: &'static str, operation: &'static str, value: f64) -> Result<()> {
    check_finite(parameter, value)?;
    if value == 0.0 {
        return Err(computation_error(
            operation,
            &format!("division by zero: {parameter} is 0"),
        ));
    }
    if value < 0.0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    Ok(())
}

fn grating_on(params: &PatchParams, xm: &Array2<f64>, ym: &Array2<f64>) -> Array2<f64> {
    let freq = params.size as f64 / params.wavelength;
    let phase_rad = params.phase * TAU;
    let theta = params.orientation_degrees.to_radians();
    let (sin_theta, cos_theta) = theta.sin_cos();

    Zip::from(xm)
        .and(ym)
        .map_collect(|&x, &y| {
            let rotated = x.mul_add(cos_theta, y * sin_theta);
            (rotated * freq).mul_add(TAU, phase_rad).sin()
        })
}

fn window_on(params: &PatchParams, xm: &Array2<f64>, ym: &Array2<f64>) -> Array2<f64> {
    let relative_sigma = params.sigma / params.size as f64;
    let denominator = 2.0 * relative_sigma * relative_sigma;
    let trim = params.trim_threshold;

    Zip::from(xm).and(ym).map_collect(|&x, &y| {
        let value = (-x.mul_add(x, y * y) / denominator).exp();
        if value < trim { 0.0 } else { value }
    })
}

/// Sinusoidal grating without any brightness offset
///
/// # Errors
///
/// Returns an error if the parameters fail [`PatchParams::validate`]
pub fn grating(params: &PatchParams) -> Result<Array2<f64>> {
    params.validate()?;
    let (xm, ym) = meshgrid(&centered_ramp(params.size));
    Ok(grating_on(params, &xm, &ym))
}

/// Gaussian window with values below the trim threshold set to zero
///
/// # Errors
///
/// Returns an error if the parameters fail [`PatchParams::validate`]
pub fn gaussian_window(params: &PatchParams) -> Result<Array2<f64>> {
    params.validate()?;
    let (xm, ym) = meshgrid(&centered_ramp(params.size));
    Ok(window_on(params, &xm, &ym))
}

/// Render a patch with an explicit brightness offset
///
/// The offset is added to every grating sample before windowing, so trimmed
/// samples stay exactly zero. `randomize_brightness` is ignored here.
///
/// # Errors
///
/// Returns an error if the parameters fail [`PatchParams::validate`]
pub fn render_patch(params: &PatchParams, brightness_offset: f64) -> Result<Array2<f64>> {
    params.validate()?;
    let (xm, ym) = meshgrid(&centered_ramp(params.size));

    let mut grating = grating_on(params, &xm, &ym);
    grating.mapv_inplace(|v| v + brightness_offset);

    Ok(grating * &window_on(params, &xm, &ym))
}

/// Draw one of the eleven offsets `-0.5, -0.4, ..., 0.5`
pub fn sample_brightness_offset<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let step: i32 = rng.random_range(BRIGHTNESS_STEPS);
    f64::from(step) / BRIGHTNESS_DIVISOR
}

/// Render a Gabor patch
///
/// When `randomize_brightness` is set a single offset is drawn from `rng` and
/// applied to the whole grating; otherwise `rng` is untouched and the result
/// is a pure function of `params`.
///
/// # Errors
///
/// Returns an error if the parameters fail [`PatchParams::validate`]
pub fn gabor_patch<R: Rng + ?Sized>(params: &PatchParams, rng: &mut R) -> Result<Array2<f64>> {
    params.validate()?;
    let offset = if params.randomize_brightness {
        sample_brightness_offset(rng)
    } else {
        0.0
    };
    render_patch(params, offset)
}
