#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// error types for selector parsing.
pub mod error;

/// utilities for interpolation.
pub mod interpolation;

/// analytic uv layout mappings.
pub mod mapping;

/// module containing parallelization utilities.
pub mod parallel;

/// texture face rendering.
pub mod render;

pub use error::SelectorError;
