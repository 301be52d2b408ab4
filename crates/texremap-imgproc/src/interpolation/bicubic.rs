use super::kernel::KernelFilter;

/// Free parameter of the cubic convolution kernel.
const B: f64 = -0.5;

/// Cubic convolution weight with `b = -0.5`, supported on `[-2, 2]`.
///
/// # Example
///
/// ```
/// use texremap_imgproc::interpolation::bicubic_kernel;
///
/// assert_eq!(bicubic_kernel(0.0), 1.0);
/// assert_eq!(bicubic_kernel(1.0), 0.0);
/// ```
pub fn bicubic_kernel(x: f64) -> f64 {
    let x = x.abs();
    let x2 = x * x;
    let x3 = x2 * x;
    if x <= 1.0 {
        (B + 2.0) * x3 - (B + 3.0) * x2 + 1.0
    } else {
        B * x3 - 5.0 * B * x2 + 8.0 * B * x - 4.0 * B
    }
}

/// Bicubic resampling over a 4x4 neighborhood.
pub const BICUBIC: KernelFilter = KernelFilter {
    radius: 2,
    weight: bicubic_kernel,
};
