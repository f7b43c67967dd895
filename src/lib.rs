//! `specprep` library crate.
//!
//! Preprocessing for 1-D emission-line spectroscopy: group nearby spectral
//! lines that must be fit jointly, and build boolean masks that isolate each
//! group from contaminating neighbour lines, telluric absorption bands, and
//! unrelated continuum.
//!
//! Everything here is a pure, synchronous transform over in-memory arrays so
//! that:
//!
//! - core logic is testable without any I/O
//! - calls are trivially parallelizable across spectra or line groups
//! - the downstream fitting stage only ever sees finished groups and masks

pub mod domain;
pub mod error;
pub mod group;
pub mod mask;
pub mod prep;
pub mod spectrum;
pub mod stats;
