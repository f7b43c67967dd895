//! Crate error type.
//!
//! Only contract violations are errors here. Degenerate but legitimate
//! inputs (empty spectra, zero-variance difference arrays) degrade
//! gracefully inside the individual operations and never surface as
//! `PrepError`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrepError {
    /// Binning factor outside `1..=len`.
    #[error("invalid bin factor {n} for a spectrum of {len} samples")]
    InvalidBinFactor { n: usize, len: usize },

    /// Parallel spectrum columns disagree in length.
    #[error("column length mismatch: {0}")]
    LengthMismatch(String),

    /// Wavelength axis decreases at the given sample index.
    #[error("wavelength axis is not monotonically non-decreasing at sample {0}")]
    NonMonotonic(usize),

    /// An operation needed the restframe column before it was added.
    #[error("spectrum has no restframe wavelength column; call add_restframe first")]
    MissingRestframe,
}
