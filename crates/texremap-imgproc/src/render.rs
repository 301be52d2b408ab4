use texremap_image::{Image, ImageError, PixelBuffer};

use crate::interpolation::{InterpolationMode, Sampler};
use crate::mapping::UvMapping;
use crate::parallel::{self, ExecutionStrategy};

/// Settings of a single face render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// How source pixels are interpolated.
    pub interpolation: InterpolationMode,
    /// The direction of the layout conversion.
    pub mapping: UvMapping,
    /// How destination rows are scheduled.
    pub strategy: ExecutionStrategy,
}

impl RenderOptions {
    /// Create render options with the default execution strategy.
    pub fn new(interpolation: InterpolationMode, mapping: UvMapping) -> Self {
        Self {
            interpolation,
            mapping,
            strategy: ExecutionStrategy::default(),
        }
    }

    /// Build options from selector tags, falling back to nearest and `u2g` for unknown tags.
    ///
    /// # Example
    ///
    /// ```
    /// use texremap_imgproc::interpolation::InterpolationMode;
    /// use texremap_imgproc::mapping::UvMapping;
    /// use texremap_imgproc::render::RenderOptions;
    ///
    /// let options = RenderOptions::from_selectors("lanczos", "g2u");
    /// assert_eq!(options.interpolation, InterpolationMode::Lanczos);
    /// assert_eq!(options.mapping, UvMapping::MbgToMbu);
    /// ```
    pub fn from_selectors(interpolation: &str, mapping: &str) -> Self {
        Self::new(
            InterpolationMode::from_selector(interpolation),
            UvMapping::from_selector(mapping),
        )
    }

    /// Replace the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The fast low quality variant of these options, used for previews.
    pub fn preview(&self) -> Self {
        Self {
            interpolation: InterpolationMode::Bilinear,
            ..*self
        }
    }
}

/// Remap a texture between uv layouts.
///
/// # Arguments
///
/// * `src` - The source texture.
/// * `interpolation` - The interpolation mode to use.
/// * `mapping` - The direction of the conversion.
///
/// # Returns
///
/// A texture with the same size as the source.
///
/// # Example
///
/// ```
/// use texremap_image::{ImageSize, PixelBuffer};
/// use texremap_imgproc::interpolation::InterpolationMode;
/// use texremap_imgproc::mapping::UvMapping;
/// use texremap_imgproc::render::render_face;
///
/// let src = PixelBuffer::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 2,
///     },
///     255,
/// )
/// .unwrap();
///
/// let dst = render_face(&src, InterpolationMode::Nearest, UvMapping::MbuToMbg).unwrap();
/// assert_eq!(dst.size(), src.size());
/// ```
pub fn render_face(
    src: &PixelBuffer,
    interpolation: InterpolationMode,
    mapping: UvMapping,
) -> Result<PixelBuffer, ImageError> {
    render_face_with(src, &RenderOptions::new(interpolation, mapping))
}

/// Remap a texture between uv layouts with explicit [`RenderOptions`].
pub fn render_face_with(
    src: &PixelBuffer,
    options: &RenderOptions,
) -> Result<PixelBuffer, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    render_face_into(src, &mut dst, options)?;
    Ok(dst)
}

/// Remap a texture into a caller owned destination.
///
/// Every destination pixel is written: either interpolated from the source, or
/// set to transparent black when the mapping has no source pixel for it.
///
/// # Errors
///
/// The destination must have the same size as the source.
pub fn render_face_into<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    options: &RenderOptions,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    log::debug!(
        "rendering {}x{} face: interpolation={} mapping={} strategy={:?}",
        src.width(),
        src.height(),
        options.interpolation,
        options.mapping,
        options.strategy
    );

    let (width, height) = (src.width() as f64, src.height() as f64);
    let sampler = Sampler::new(src, options.interpolation);
    let map_coords = options.mapping.mapper();

    parallel::par_iter_rows_indexed(dst, options.strategy, |x, y, dst_pixel| {
        match map_coords(x as f64 / width, y as f64 / height) {
            Some((u, v)) if u >= 0.0 && v >= 0.0 => {
                sampler.sample(u * width, v * height, dst_pixel)
            }
            _ => dst_pixel.fill(0),
        }
    });

    Ok(())
}
