use std::str::FromStr;

use texremap_image::Image;

use super::bicubic::BICUBIC;
use super::bilinear::bilinear_interpolation;
use super::kernel::kernel_interpolation;
use super::lanczos::LANCZOS;
use super::nearest::nearest_neighbor_interpolation;
use crate::error::SelectorError;

/// Interpolation mode for the remap operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    #[default]
    Nearest,
    /// Bilinear interpolation
    Bilinear,
    /// Bicubic interpolation
    Bicubic,
    /// Lanczos interpolation
    Lanczos,
}

impl InterpolationMode {
    /// Resolve a selector tag, falling back to [`InterpolationMode::Nearest`] for unknown tags.
    ///
    /// Accepted tags are `nearest`, `linear`, `cubic` and `lanczos`.
    ///
    /// # Example
    ///
    /// ```
    /// use texremap_imgproc::interpolation::InterpolationMode;
    ///
    /// assert_eq!(InterpolationMode::from_selector("cubic"), InterpolationMode::Bicubic);
    /// assert_eq!(InterpolationMode::from_selector("sharp"), InterpolationMode::Nearest);
    /// ```
    pub fn from_selector(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            log::warn!("unknown interpolation '{tag}', falling back to nearest");
            InterpolationMode::Nearest
        })
    }

    /// The selector tag of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationMode::Nearest => "nearest",
            InterpolationMode::Bilinear => "linear",
            InterpolationMode::Bicubic => "cubic",
            InterpolationMode::Lanczos => "lanczos",
        }
    }
}

impl FromStr for InterpolationMode {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(InterpolationMode::Nearest),
            "linear" => Ok(InterpolationMode::Bilinear),
            "cubic" => Ok(InterpolationMode::Bicubic),
            "lanczos" => Ok(InterpolationMode::Lanczos),
            _ => Err(SelectorError::UnknownInterpolation(s.to_string())),
        }
    }
}

impl std::fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type SampleFn<const C: usize> = fn(&Image<u8, C>, f64, f64, &mut [u8]);

fn bicubic_interpolation<const C: usize>(image: &Image<u8, C>, u: f64, v: f64, pixel: &mut [u8]) {
    kernel_interpolation(image, &BICUBIC, u, v, pixel)
}

fn lanczos_interpolation<const C: usize>(image: &Image<u8, C>, u: f64, v: f64, pixel: &mut [u8]) {
    kernel_interpolation(image, &LANCZOS, u, v, pixel)
}

/// A sampler bound to a source image.
///
/// The interpolation strategy is resolved once on construction and reused for
/// every destination pixel.
///
/// # Example
///
/// ```
/// use texremap_image::{Image, ImageSize};
/// use texremap_imgproc::interpolation::{InterpolationMode, Sampler};
///
/// let src = Image::<u8, 4>::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     9,
/// )
/// .unwrap();
///
/// let sampler = Sampler::new(&src, InterpolationMode::Bilinear);
/// let mut pixel = [0u8; 4];
/// sampler.sample(0.5, 0.5, &mut pixel);
/// assert_eq!(pixel, [9; 4]);
/// ```
#[derive(Clone, Copy)]
pub struct Sampler<'a, const C: usize> {
    src: &'a Image<u8, C>,
    mode: InterpolationMode,
    sample_fn: SampleFn<C>,
}

impl<'a, const C: usize> Sampler<'a, C> {
    /// Bind the interpolation mode to a source image.
    pub fn new(src: &'a Image<u8, C>, mode: InterpolationMode) -> Self {
        let sample_fn: SampleFn<C> = match mode {
            InterpolationMode::Nearest => nearest_neighbor_interpolation::<C>,
            InterpolationMode::Bilinear => bilinear_interpolation::<C>,
            InterpolationMode::Bicubic => bicubic_interpolation::<C>,
            InterpolationMode::Lanczos => lanczos_interpolation::<C>,
        };
        Self {
            src,
            mode,
            sample_fn,
        }
    }

    /// The interpolation mode of this sampler.
    pub fn mode(&self) -> InterpolationMode {
        self.mode
    }

    /// Interpolate the source at the source-pixel coordinates `(x, y)` into `pixel`.
    ///
    /// The coordinates are clamped to the source bounds internally.
    ///
    /// # Panics
    ///
    /// Panics if `pixel` does not hold exactly `C` channels or the source is empty.
    pub fn sample(&self, x: f64, y: f64, pixel: &mut [u8]) {
        (self.sample_fn)(self.src, x, y, pixel)
    }
}
