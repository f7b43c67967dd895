//! Boolean masks over a wavelength axis and their composition into the
//! final per-group selection.

pub mod builders;
pub mod region;

pub use builders::*;
pub use region::*;
