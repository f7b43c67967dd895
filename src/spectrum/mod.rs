//! Per-spectrum transforms: restframe conversion and block-average binning.

pub mod ops;

pub use ops::*;
