//! riskmatrix: risk-matrix scoring for GRC tooling.
//!
//! Maps impact×likelihood scores and standalone ordinal levels to
//! qualitative risk levels for 3×3, 4×4 and 5×5 tenant matrices, with
//! optional tenant-defined bands, and extracts the axes from
//! inconsistently named risk records.

pub mod cli;
pub mod config;
pub mod logging;
pub mod matrix;
