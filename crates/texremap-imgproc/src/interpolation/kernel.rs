use texremap_image::Image;

use super::{clamp_index, saturate_u8};

/// Largest filter radius the tabulation buffers can hold.
pub(crate) const MAX_RADIUS: usize = 5;

/// A separable 1-D resampling kernel.
///
/// The weight function is only evaluated at the `2 * radius` integer offsets
/// around the sample position on each axis.
#[derive(Debug, Clone, Copy)]
pub struct KernelFilter {
    /// Half width of the kernel support in pixels (the filter size).
    pub radius: usize,
    /// The 1-D weight function.
    pub weight: fn(f64) -> f64,
}

/// Discrete convolution of the source with a separable kernel at `(u, v)`.
///
/// Neighbor indices are clamped independently per axis, so near the border the
/// same edge pixel may contribute several weighted taps.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `filter` - The kernel to convolve with. Its radius must not exceed [`MAX_RADIUS`].
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `pixel` - The destination pixel with `C` channels.
pub(crate) fn kernel_interpolation<const C: usize>(
    image: &Image<u8, C>,
    filter: &KernelFilter,
    u: f64,
    v: f64,
    pixel: &mut [u8],
) {
    debug_assert!(filter.radius <= MAX_RADIUS);

    let (rows, cols) = (image.rows(), image.cols());
    let taps = 2 * filter.radius;
    let x_start = u.floor() as i64 - filter.radius as i64 + 1;
    let y_start = v.floor() as i64 - filter.radius as i64 + 1;

    let mut x_kernel = [0f64; 2 * MAX_RADIUS];
    let mut y_kernel = [0f64; 2 * MAX_RADIUS];
    for i in 0..taps {
        x_kernel[i] = (filter.weight)(u - (x_start + i as i64) as f64);
        y_kernel[i] = (filter.weight)(v - (y_start + i as i64) as f64);
    }

    let data = image.as_slice();

    for (k, out) in pixel.iter_mut().enumerate() {
        let mut q = 0.0;
        for (i, wy) in y_kernel[..taps].iter().enumerate() {
            let row = clamp_index(y_start + i as i64, rows) * cols;
            let mut p = 0.0;
            for (j, wx) in x_kernel[..taps].iter().enumerate() {
                let col = clamp_index(x_start + j as i64, cols);
                p += data[(row + col) * C + k] as f64 * wx;
            }
            q += p * wy;
        }
        *out = saturate_u8(q.round());
    }
}
