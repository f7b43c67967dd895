//! Interval grouping: connected components over 1-D intervals.

pub mod components;

pub use components::*;
