//! File output.

pub mod curve;
