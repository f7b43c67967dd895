//! Gaussian width conversions.
//!
//! The fitting stage works in sigma; instrument specs and line-width limits
//! are quoted as FWHM. `FWHM = 2 sqrt(2 ln 2) * sigma`.

/// Convert a Gaussian sigma to its full width at half maximum.
pub fn sigma_to_fwhm(sigma: f64) -> f64 {
    sigma * 2.0 * (2.0 * std::f64::consts::LN_2).sqrt()
}

/// Convert a full width at half maximum to the Gaussian sigma.
pub fn fwhm_to_sigma(fwhm: f64) -> f64 {
    fwhm / (2.0 * (2.0 * std::f64::consts::LN_2).sqrt())
}
