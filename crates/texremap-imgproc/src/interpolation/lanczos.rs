use std::f64::consts::PI;

use super::kernel::KernelFilter;

const LANCZOS_RADIUS: usize = 5;

/// Lanczos windowed sinc weight with `a = 5`.
///
/// The removable singularity at zero evaluates to exactly `1`.
///
/// # Example
///
/// ```
/// use texremap_imgproc::interpolation::lanczos_kernel;
///
/// assert_eq!(lanczos_kernel(0.0), 1.0);
/// ```
pub fn lanczos_kernel(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let a = LANCZOS_RADIUS as f64;
    let xp = PI * x;
    a * xp.sin() * (xp / a).sin() / (xp * xp)
}

/// Lanczos resampling over a 10x10 neighborhood.
pub const LANCZOS: KernelFilter = KernelFilter {
    radius: LANCZOS_RADIUS,
    weight: lanczos_kernel,
};
