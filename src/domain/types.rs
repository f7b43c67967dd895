//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they
//! can be:
//!
//! - used in-memory during preprocessing and fitting
//! - loaded from external line tables and config files
//! - re-exported alongside fit results without conversion
//!
//! All wavelengths are in the same physical unit throughout (Å in the
//! shipped defaults); the code never converts units, it only requires
//! consistency.

use serde::{Deserialize, Serialize};

use crate::error::PrepError;

/// A loaded 1-D spectrum, stored column-wise.
///
/// Invariants, enforced at construction:
///
/// - all columns have the same length
/// - the wavelength axis is monotonically non-decreasing
///
/// The restframe column is derived data: it is owned by the spectrum and
/// recomputed only by explicit restframe-conversion calls
/// (`spectrum::ops::add_restframe`), never touched by masking code.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    wl: Vec<f64>,
    flux: Vec<f64>,
    stdev: Vec<f64>,
    wl_rest: Option<Vec<f64>>,
}

impl Spectrum {
    /// Build a spectrum from its observed columns, validating the §3
    /// invariants.
    pub fn new(wl: Vec<f64>, flux: Vec<f64>, stdev: Vec<f64>) -> Result<Self, PrepError> {
        if flux.len() != wl.len() || stdev.len() != wl.len() {
            return Err(PrepError::LengthMismatch(format!(
                "wl={} flux={} stdev={}",
                wl.len(),
                flux.len(),
                stdev.len()
            )));
        }
        for i in 1..wl.len() {
            if wl[i] < wl[i - 1] {
                return Err(PrepError::NonMonotonic(i));
            }
        }
        Ok(Self {
            wl,
            flux,
            stdev,
            wl_rest: None,
        })
    }

    /// Internal constructor for columns already known to satisfy the
    /// invariants (outputs of binning / restframing).
    pub(crate) fn from_validated(
        wl: Vec<f64>,
        flux: Vec<f64>,
        stdev: Vec<f64>,
        wl_rest: Option<Vec<f64>>,
    ) -> Self {
        Self {
            wl,
            flux,
            stdev,
            wl_rest,
        }
    }

    /// Observed wavelength axis.
    pub fn wl(&self) -> &[f64] {
        &self.wl
    }

    /// Flux column.
    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// Per-sample flux uncertainty (same unit as flux).
    pub fn stdev(&self) -> &[f64] {
        &self.stdev
    }

    /// Restframe wavelength axis, if it has been added.
    pub fn wl_rest(&self) -> Option<&[f64]> {
        self.wl_rest.as_deref()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.wl.len()
    }

    /// Whether the spectrum holds no samples.
    pub fn is_empty(&self) -> bool {
        self.wl.is_empty()
    }
}

/// One entry of an externally supplied line table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDefinition {
    /// Short identifier, e.g. `"Halpha"` or `"OIII5007"`.
    pub name: String,
    /// Rest (vacuum) wavelength of the line.
    pub wl_vacuum: f64,
    /// Whether the line takes part in joint-fit grouping. Auxiliary lines
    /// (sky features, lines outside the fit sample) are only ever masked,
    /// never grouped.
    pub grouped: bool,
}

/// Observed-frame edges of one telluric absorption band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericBand {
    pub lo: f64,
    pub hi: f64,
}

impl AtmosphericBand {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }
}

/// All tunables consumed by the preprocessing core, threaded explicitly
/// into each operation. No process-wide mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Margin added on each side of a line's rest wavelength when building
    /// its grouping interval. Lines whose padded intervals overlap are fit
    /// jointly.
    pub tolerance: f64,
    /// Full width of the exclusion window cut around *other* lines so they
    /// do not contaminate the continuum estimate.
    pub line_width: f64,
    /// Half-width of the inclusion window kept around each selected line.
    pub cont_width: f64,
    /// Sigma-clip multiplier for outlier rejection.
    pub clip_sigma: f64,
    /// `stdev/mean` ratio of the surviving sample spacings above which the
    /// sampling is flagged as non-uniform (diagnostic only).
    pub uniformity_threshold: f64,
    /// Telluric absorption bands, observed-frame edges.
    pub bands: Vec<AtmosphericBand>,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            tolerance: 10.0,
            line_width: 20.0,
            cont_width: 70.0,
            clip_sigma: 3.0,
            uniformity_threshold: 1e-3,
            // O2 A and B bands, the two strongest optical telluric features.
            bands: vec![
                AtmosphericBand::new(7594.0, 7621.0),
                AtmosphericBand::new(6867.0, 6884.0),
            ],
        }
    }
}
