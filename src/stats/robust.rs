//! Outlier-robust estimation of the sample spacing ("resolution") of a
//! wavelength axis.
//!
//! Spectra come off the instrument on an almost uniform wavelength grid, but
//! stitched orders or chip gaps leave a handful of oversized steps. A single
//! sigma-clip pass over the consecutive differences removes those before
//! averaging.
//!
//! Degenerate inputs (fewer than two samples, zero-variance differences) are
//! legitimate in sparse data and degrade gracefully; nothing in this module
//! returns an error.

use crate::domain::PrepConfig;
use crate::mask::Mask;

/// Speed of light in km/s.
const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;

pub(crate) fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation (no Bessel correction).
pub(crate) fn stdev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mu = mean(data);
    let var = data.iter().map(|x| (x - mu) * (x - mu)).sum::<f64>() / data.len() as f64;
    var.sqrt()
}

/// Single-pass sigma clip.
///
/// Keeps the elements with `|x - mean| < m * stdev` and returns them
/// together with the boolean mask used. Not iterative. A zero standard
/// deviation means every element equals the mean, so everything is kept
/// (no outliers, not an error).
pub fn reject_outliers(data: &[f64], m: f64) -> (Vec<f64>, Mask) {
    let mu = mean(data);
    let sigma = stdev(data);
    if sigma == 0.0 {
        return (data.to_vec(), Mask::all(data.len()));
    }

    let mask = Mask::from_fn(data.len(), |i| (data[i] - mu).abs() < m * sigma);
    (mask.select(data), mask)
}

/// Outlier-robust mean sample spacing of a monotonically sorted wavelength
/// axis, in the same unit as the input.
///
/// Emits a non-fatal `log::warn!` when the surviving spacings have
/// `stdev/mean` above `config.uniformity_threshold` (sampling judged
/// non-uniform). The warning never alters the computed result. Fewer than
/// two samples yield a resolution of 0.
pub fn resolution(wl: &[f64], config: &PrepConfig) -> f64 {
    if wl.len() < 2 {
        return 0.0;
    }

    let diff: Vec<f64> = wl.windows(2).map(|w| w[1] - w[0]).collect();
    let (diff, _mask) = reject_outliers(&diff, config.clip_sigma);

    let average = mean(&diff);
    let sigma = stdev(&diff);

    // average == 0 would make the ratio meaningless (and a zero spacing is
    // already as uniform as it gets), so the check is skipped.
    if average != 0.0 && sigma / average > config.uniformity_threshold {
        log::warn!(
            "non-constant resolution: spacing {average:.4} +/- {sigma:.4} over {} samples",
            wl.len()
        );
    }
    average
}

/// Velocity resolution of a piece of spectrum in km/s, blind to whether the
/// axis has been restframed.
pub fn velocity_resolution(wl: &[f64], config: &PrepConfig) -> f64 {
    let wl_res = resolution(wl, config);
    let wl_av = mean(wl);
    if wl_av == 0.0 {
        return 0.0;
    }
    wl_res / wl_av * SPEED_OF_LIGHT_KM_S
}

/// Root-mean-square scatter of a signal about its own mean.
pub fn spectrum_rms(y: &[f64]) -> f64 {
    if y.is_empty() {
        return 0.0;
    }
    let mu = mean(y);
    (y.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / y.len() as f64).sqrt()
}
