//! Curve fitting.
//!
//! Responsibilities:
//!
//! - fit one least-squares polynomial per requested degree
//! - sample each fit between the anchor and the extrapolation target

pub mod fitter;
pub mod sampling;

pub use fitter::*;
pub use sampling::*;
