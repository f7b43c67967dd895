//! Domain types used throughout the preprocessing pipeline.
//!
//! This module defines:
//!
//! - the columnar 1-D spectrum (`Spectrum`)
//! - line-table entries (`LineDefinition`)
//! - telluric band edges (`AtmosphericBand`)
//! - the immutable configuration value (`PrepConfig`)

pub mod types;

pub use types::*;
