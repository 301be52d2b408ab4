use texremap_image::Image;

use super::{clamp_index, saturate_u8};

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Kernel for bilinear interpolation
///
/// The fractional weights are measured from the clamped floor, so sampling
/// outside the image reproduces the nearest border pixel. Results are rounded up.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `pixel` - The destination pixel with `C` channels.
pub(crate) fn bilinear_interpolation<const C: usize>(
    image: &Image<u8, C>,
    u: f64,
    v: f64,
    pixel: &mut [u8],
) {
    let (rows, cols) = (image.rows(), image.cols());

    let xl = clamp_index(u.floor() as i64, cols);
    let xr = clamp_index(u.ceil() as i64, cols);
    let xf = u - xl as f64;

    let yl = clamp_index(v.floor() as i64, rows);
    let yr = clamp_index(v.ceil() as i64, rows);
    let yf = v - yl as f64;

    let data = image.as_slice();
    let p00 = &data[(yl * cols + xl) * C..][..C];
    let p10 = &data[(yl * cols + xr) * C..][..C];
    let p01 = &data[(yr * cols + xl) * C..][..C];
    let p11 = &data[(yr * cols + xr) * C..][..C];

    for (k, out) in pixel.iter_mut().enumerate() {
        let p0 = lerp(p00[k] as f64, p10[k] as f64, xf);
        let p1 = lerp(p01[k] as f64, p11[k] as f64, xf);
        *out = saturate_u8(lerp(p0, p1, yf).ceil());
    }
}

#[cfg(test)]
mod tests {
    use super::bilinear_interpolation;
    use texremap_image::{Image, ImageError, ImageSize};

    fn checker() -> Result<Image<u8, 4>, ImageError> {
        Image::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![
                0, 0, 0, 255, 100, 0, 0, 255, //
                50, 0, 0, 255, 201, 0, 0, 255,
            ],
        )
    }

    #[test]
    fn bilinear_on_grid_points() -> Result<(), ImageError> {
        let image = checker()?;
        let mut pixel = [0u8; 4];

        bilinear_interpolation(&image, 1.0, 1.0, &mut pixel);
        assert_eq!(pixel, [201, 0, 0, 255]);

        bilinear_interpolation(&image, 1.0, 0.0, &mut pixel);
        assert_eq!(pixel, [100, 0, 0, 255]);

        Ok(())
    }

    #[test]
    fn bilinear_blends_and_rounds_up() -> Result<(), ImageError> {
        let image = checker()?;
        let mut pixel = [0u8; 4];

        bilinear_interpolation(&image, 0.5, 0.0, &mut pixel);
        assert_eq!(pixel[0], 50);

        // (0 + 100 + 50 + 201) / 4 = 87.75
        bilinear_interpolation(&image, 0.5, 0.5, &mut pixel);
        assert_eq!(pixel, [88, 0, 0, 255]);

        Ok(())
    }

    #[test]
    fn bilinear_clamps_outside() -> Result<(), ImageError> {
        let image = checker()?;
        let (mut a, mut b) = ([0u8; 4], [0u8; 4]);

        bilinear_interpolation(&image, -3.25, 0.0, &mut a);
        bilinear_interpolation(&image, 0.0, 0.0, &mut b);
        assert_eq!(a, b);

        bilinear_interpolation(&image, 5.5, 7.75, &mut a);
        bilinear_interpolation(&image, 1.0, 1.0, &mut b);
        assert_eq!(a, b);

        bilinear_interpolation(&image, 0.0, -2.5, &mut a);
        bilinear_interpolation(&image, 0.0, 0.0, &mut b);
        assert_eq!(a, b);

        Ok(())
    }
}
