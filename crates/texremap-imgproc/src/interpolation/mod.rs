//! Pixel interpolation methods for texture remapping.
//!
//! Every sampler reads from an RGBA source at fractional, unclamped
//! source-pixel coordinates and writes one pixel into a destination slice.
//! Coordinates outside the image are clamped to the border before any read.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, copies the nearest pixel verbatim
//! - **Bilinear**: Linear blend of the four surrounding pixels, rounded up
//! - **Bicubic**: Separable cubic convolution over a 4x4 neighborhood
//! - **Lanczos**: Separable windowed sinc over a 10x10 neighborhood

mod bicubic;
mod bilinear;
mod interpolate;
mod kernel;
mod lanczos;
mod nearest;

pub use bicubic::{bicubic_kernel, BICUBIC};
pub use interpolate::{InterpolationMode, Sampler};
pub use kernel::KernelFilter;
pub use lanczos::{lanczos_kernel, LANCZOS};

/// Clamp an integer pixel index to `[0, len - 1]`.
#[inline]
pub(crate) fn clamp_index(i: i64, len: usize) -> usize {
    i.clamp(0, len as i64 - 1) as usize
}

/// Narrow an accumulated channel value into the `u8` range.
#[inline]
pub(crate) fn saturate_u8(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
