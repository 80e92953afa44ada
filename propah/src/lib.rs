//! # Radio Frequency Propogation
//!
//! `propah` decides whether a point-to-point radio link has line of
//! sight, and how much of the first Fresnel zone is clear of
//! terrain.

mod clearance;
mod error;
pub mod fresnel;
mod progress;

pub use {
    crate::{
        clearance::{
            Analyzer, AnalyzerBuilder, ClearanceResult, Obstruction, SampleClearance,
            BLOCKING_THRESHOLD_PCT,
        },
        error::PropahError,
        fresnel::fresnel_radius,
        progress::Progress,
    },
    terrain,
};
