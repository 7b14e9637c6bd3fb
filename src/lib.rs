//! `cliplot` library crate.
//!
//! The binary (`cliplot`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - fitting and figure building are reusable without a terminal

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod tui;
