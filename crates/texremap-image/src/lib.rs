#![deny(missing_docs)]
//! Image types for texture remapping

/// image representation for texture resampling.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize, PixelBuffer};
