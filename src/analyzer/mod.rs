// Analyzer module: one submodule per reporting view family.

pub mod rankings;
pub mod rfm;
pub mod timeseries;
