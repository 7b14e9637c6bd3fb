//! Polynomial model implementation.
//!
//! Models are implemented as small, pure functions so that fitting and
//! sampling code can stay generic over the degree.

pub mod polynomial;

pub use polynomial::*;
