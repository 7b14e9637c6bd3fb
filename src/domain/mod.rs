//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the validated input series (`Dataset`)
//! - plot settings (`AxisLabels`, `PlotRequest`)
//! - fit settings (`DegreeSet`, `Sampling`, `Extrapolation`)

pub mod types;

pub use types::*;
