//! Restframe conversion and block-average binning.
//!
//! Binning runs before restframing in the pipeline, so a binned spectrum
//! comes back without a restframe column; callers re-add it explicitly.

use crate::domain::Spectrum;
use crate::error::PrepError;

/// Remove the redshift stretch from a single wavelength.
pub fn restframe_wl(wl: f64, redshift: f64) -> f64 {
    wl / (1.0 + redshift)
}

/// Restframe a whole wavelength axis.
pub fn restframe_axis(wl: &[f64], redshift: f64) -> Vec<f64> {
    wl.iter().map(|&w| restframe_wl(w, redshift)).collect()
}

/// Return the spectrum with its restframe wavelength column (re)computed
/// from the observed axis and the given redshift.
pub fn add_restframe(spectrum: Spectrum, redshift: f64) -> Spectrum {
    let wl_rest = restframe_axis(spectrum.wl(), redshift);
    Spectrum::from_validated(
        spectrum.wl().to_vec(),
        spectrum.flux().to_vec(),
        spectrum.stdev().to_vec(),
        Some(wl_rest),
    )
}

/// Mean of each consecutive block of `n` values.
fn average_blocks(x: &[f64], n: usize) -> Vec<f64> {
    x.chunks_exact(n)
        .map(|c| c.iter().sum::<f64>() / n as f64)
        .collect()
}

/// Uncertainty of each block mean: `sqrt(e1^2 + ... + en^2) / n`.
fn average_blocks_err(e: &[f64], n: usize) -> Vec<f64> {
    e.chunks_exact(n)
        .map(|c| c.iter().map(|v| v * v).sum::<f64>().sqrt() / n as f64)
        .collect()
}

/// Bin a spectrum by averaging `n` adjacent samples together.
///
/// The spectrum is truncated to the largest prefix whose length is a
/// multiple of `n`; trailing remainder samples are dropped, not padded.
/// Wavelength and flux become block means; uncertainties propagate as the
/// mean of `n` independent measurements. `n == 0` or `n` larger than the
/// spectrum is a contract violation.
pub fn bin_spectrum(spectrum: &Spectrum, n: usize) -> Result<Spectrum, PrepError> {
    if n == 0 || n > spectrum.len() {
        return Err(PrepError::InvalidBinFactor {
            n,
            len: spectrum.len(),
        });
    }

    let tsize = spectrum.len() / n * n;
    let wl = average_blocks(&spectrum.wl()[..tsize], n);
    let flux = average_blocks(&spectrum.flux()[..tsize], n);
    let stdev = average_blocks_err(&spectrum.stdev()[..tsize], n);

    Ok(Spectrum::from_validated(wl, flux, stdev, None))
}
