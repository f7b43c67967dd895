//! The `Mask` type and the masking primitives.
//!
//! A `Mask` is a boolean sequence positionally aligned with a spectrum's
//! samples: `true` means "keep this sample". Every primitive builds a fresh
//! mask; combination (`and`/`or`/`not`) produces a new mask rather than
//! mutating in place.
//!
//! All window comparisons are strict, so samples sitting exactly on a window
//! edge count as outside the kept set.

use crate::domain::AtmosphericBand;
use crate::spectrum::restframe_wl;

/// Boolean keep/drop sequence aligned with a spectrum's samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask(Vec<bool>);

impl Mask {
    /// Mask keeping every sample.
    pub fn all(len: usize) -> Self {
        Self(vec![true; len])
    }

    /// Mask dropping every sample.
    pub fn none(len: usize) -> Self {
        Self(vec![false; len])
    }

    /// Build a mask from a per-index predicate.
    pub fn from_fn(len: usize, f: impl Fn(usize) -> bool) -> Self {
        Self((0..len).map(f).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, i: usize) -> bool {
        self.0[i]
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// Number of kept samples.
    pub fn count_selected(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    /// Logical AND with an equally long mask.
    pub fn and(&self, other: &Mask) -> Mask {
        assert_eq!(self.len(), other.len(), "mask length mismatch");
        Mask(self.0.iter().zip(&other.0).map(|(&a, &b)| a && b).collect())
    }

    /// Logical OR with an equally long mask.
    pub fn or(&self, other: &Mask) -> Mask {
        assert_eq!(self.len(), other.len(), "mask length mismatch");
        Mask(self.0.iter().zip(&other.0).map(|(&a, &b)| a || b).collect())
    }

    /// Logical negation.
    pub fn not(&self) -> Mask {
        Mask(self.0.iter().map(|&b| !b).collect())
    }

    /// Extract the kept elements of an equally long data column.
    pub fn select(&self, data: &[f64]) -> Vec<f64> {
        assert_eq!(self.len(), data.len(), "mask length mismatch");
        data.iter()
            .zip(&self.0)
            .filter_map(|(&x, &keep)| keep.then_some(x))
            .collect()
    }
}

/// Exclude the band of full width `width` around `center`: `true` for
/// samples strictly below `center - width/2` or strictly above
/// `center + width/2`.
pub fn mask_line(wl: &[f64], center: f64, width: f64) -> Mask {
    let wl_min = center - width / 2.0;
    let wl_max = center + width / 2.0;
    Mask::from_fn(wl.len(), |i| wl[i] < wl_min || wl[i] > wl_max)
}

/// Keep the open window `(center - half_width, center + half_width)`.
pub fn select_window(wl: &[f64], center: f64, half_width: f64) -> Mask {
    let wl_min = center - half_width;
    let wl_max = center + half_width;
    Mask::from_fn(wl.len(), |i| wl[i] > wl_min && wl[i] < wl_max)
}

/// Exclude telluric absorption bands from a restframed wavelength axis.
///
/// Band edges are configured in the observed frame and restframed here with
/// the source redshift; the result keeps every sample outside all bands.
pub fn mask_atmosphere(wl_rest: &[f64], redshift: f64, bands: &[AtmosphericBand]) -> Mask {
    let mut absorption = Mask::none(wl_rest.len());
    for band in bands {
        let lo = restframe_wl(band.lo, redshift);
        let hi = restframe_wl(band.hi, redshift);
        let inside = Mask::from_fn(wl_rest.len(), |i| wl_rest[i] > lo && wl_rest[i] < hi);
        absorption = absorption.or(&inside);
    }
    absorption.not()
}
