//! Region selection: the final mask handed to the fitting stage.
//!
//! A sample survives only if it is simultaneously outside the telluric
//! bands, outside every *other* line's exclusion window, and inside at
//! least one *selected* line's inclusion window. The fit then sees the
//! targeted line(s) plus clean continuum, with contaminating neighbours
//! removed.

use crate::domain::{LineDefinition, PrepConfig, Spectrum};
use crate::error::PrepError;
use crate::mask::builders::{Mask, mask_atmosphere, mask_line, select_window};

/// Build the selection mask for one group of lines of interest.
///
/// `cont_width` is the per-call continuum half-width; `config` supplies the
/// exclusion width for other lines and the telluric band list. Requires the
/// spectrum's restframe column.
pub fn select_lines(
    selected_lines: &[LineDefinition],
    other_lines: &[LineDefinition],
    spectrum: &Spectrum,
    redshift: f64,
    cont_width: f64,
    config: &PrepConfig,
) -> Result<Mask, PrepError> {
    let wl_rest = spectrum.wl_rest().ok_or(PrepError::MissingRestframe)?;

    let masked_atm = mask_atmosphere(wl_rest, redshift, &config.bands);

    let mut masked_otherlines = Mask::all(wl_rest.len());
    for line in other_lines {
        let m = mask_line(wl_rest, line.wl_vacuum, config.line_width);
        masked_otherlines = masked_otherlines.and(&m);
    }

    let mut selected = Mask::none(wl_rest.len());
    for line in selected_lines {
        let m = select_window(wl_rest, line.wl_vacuum, cont_width);
        selected = selected.or(&m);
    }

    Ok(masked_atm.and(&masked_otherlines).and(&selected))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::AtmosphericBand;
    use crate::spectrum::add_restframe;

    fn line(name: &str, wl: f64) -> LineDefinition {
        LineDefinition {
            name: name.to_string(),
            wl_vacuum: wl,
            grouped: true,
        }
    }

    fn uniform_spectrum(start: f64, step: f64, n: usize) -> Spectrum {
        let wl: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
        let flux = vec![1.0; n];
        let stdev = vec![0.1; n];
        Spectrum::new(wl, flux, stdev).unwrap()
    }

    #[test]
    fn requires_restframe_column() {
        let spectrum = uniform_spectrum(5000.0, 1.0, 10);
        let err = select_lines(&[], &[], &spectrum, 0.0, 70.0, &PrepConfig::default()).unwrap_err();
        assert_eq!(err, PrepError::MissingRestframe);
    }

    #[test]
    fn keeps_window_minus_contaminants() {
        // z = 0, no telluric bands in range. One selected line at 5000 with
        // a 30 Å half-width window, one contaminating neighbour at 5020 with
        // a 10 Å full exclusion width.
        let spectrum = add_restframe(uniform_spectrum(4950.0, 1.0, 101), 0.0);
        let config = PrepConfig {
            line_width: 10.0,
            bands: vec![],
            ..PrepConfig::default()
        };
        let mask = select_lines(
            &[line("target", 5000.0)],
            &[line("neighbour", 5020.0)],
            &spectrum,
            0.0,
            30.0,
            &config,
        )
        .unwrap();

        let wl = spectrum.wl_rest().unwrap();
        for (i, &w) in wl.iter().enumerate() {
            let in_window = w > 4970.0 && w < 5030.0;
            let in_neighbour = (5015.0..=5025.0).contains(&w);
            assert_eq!(
                mask.get(i),
                in_window && !in_neighbour,
                "sample {i} at {w} Å"
            );
        }
    }

    #[test]
    fn telluric_band_trumps_the_inclusion_window() {
        let spectrum = add_restframe(uniform_spectrum(7580.0, 1.0, 61), 0.0);
        let config = PrepConfig {
            bands: vec![AtmosphericBand::new(7594.0, 7621.0)],
            ..PrepConfig::default()
        };
        let mask = select_lines(&[line("target", 7610.0)], &[], &spectrum, 0.0, 50.0, &config).unwrap();

        let wl = spectrum.wl_rest().unwrap();
        for (i, &w) in wl.iter().enumerate() {
            let expected = w > 7560.0 && w < 7660.0 && !(w > 7594.0 && w < 7621.0);
            assert_eq!(mask.get(i), expected, "sample {i} at {w} Å");
        }
    }

    #[test]
    fn union_of_selected_windows() {
        let spectrum = add_restframe(uniform_spectrum(4000.0, 10.0, 100), 0.0);
        let config = PrepConfig {
            bands: vec![],
            ..PrepConfig::default()
        };
        let mask = select_lines(
            &[line("a", 4200.0), line("b", 4700.0)],
            &[],
            &spectrum,
            0.0,
            50.0,
            &config,
        )
        .unwrap();

        let wl = spectrum.wl_rest().unwrap();
        for (i, &w) in wl.iter().enumerate() {
            let expected = (w > 4150.0 && w < 4250.0) || (w > 4650.0 && w < 4750.0);
            assert_eq!(mask.get(i), expected, "sample {i} at {w} Å");
        }
    }
}
