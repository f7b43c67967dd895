//! Statistical utilities: outlier rejection, resolution estimation, and
//! Gaussian width conversions.

pub mod gauss;
pub mod robust;

pub use gauss::*;
pub use robust::*;
