//! Shared preprocessing pipeline used by whichever front-end drives the fit.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! line grouping -> per-group region selection -> resolution estimate.
//!
//! The output is exactly the hand-off payload the fitting stage consumes:
//! for every joint-fit group, its member lines, the selection mask, and the
//! restframe resolution (for fit priors / line-width bounds).

use rayon::prelude::*;

use crate::domain::{LineDefinition, PrepConfig, Spectrum};
use crate::error::PrepError;
use crate::group::group_lines;
use crate::mask::{Mask, select_lines};
use crate::stats::resolution;

/// Everything the fitting stage needs for one joint-fit group.
#[derive(Debug, Clone)]
pub struct LineRegion {
    /// Member lines of the group, in ascending wavelength order.
    pub lines: Vec<LineDefinition>,
    /// Keep/drop mask over the spectrum's samples.
    pub mask: Mask,
    /// Restframe resolution estimate, same unit as the wavelength axis.
    pub resolution: f64,
}

/// Group the line table and build one selection mask per group.
///
/// The spectrum must already carry its restframe column. Groups are
/// independent, so region construction runs in parallel.
pub fn prepare_regions(
    spectrum: &Spectrum,
    line_list: &[LineDefinition],
    redshift: f64,
    config: &PrepConfig,
) -> Result<Vec<LineRegion>, PrepError> {
    let wl_rest = spectrum.wl_rest().ok_or(PrepError::MissingRestframe)?;
    let res_rest = resolution(wl_rest, config);

    let groups = group_lines(line_list, config.tolerance);

    groups
        .par_iter()
        .map(|group| {
            let selected = &group.segments;
            let others: Vec<LineDefinition> = line_list
                .iter()
                .filter(|l| !selected.iter().any(|s| s.name == l.name))
                .cloned()
                .collect();
            let mask = select_lines(
                selected,
                &others,
                spectrum,
                redshift,
                config.cont_width,
                config,
            )?;
            Ok(LineRegion {
                lines: selected.clone(),
                mask,
                resolution: res_rest,
            })
        })
        .collect()
}
