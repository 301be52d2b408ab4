use texremap_image::Image;

use super::clamp_index;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `pixel` - The destination pixel with `C` channels.
pub(crate) fn nearest_neighbor_interpolation<const C: usize>(
    image: &Image<u8, C>,
    u: f64,
    v: f64,
    pixel: &mut [u8],
) {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = clamp_index(u.round() as i64, cols);
    let iv = clamp_index(v.round() as i64, rows);

    let base = (iv * cols + iu) * C;
    pixel.copy_from_slice(&image.as_slice()[base..base + C]);
}

#[cfg(test)]
mod tests {
    use super::nearest_neighbor_interpolation;
    use texremap_image::{Image, ImageError, ImageSize};

    fn ramp() -> Result<Image<u8, 4>, ImageError> {
        // 3x2, channel 0 holds 10 * (y * 3 + x)
        let data = (0..6u8)
            .flat_map(|i| [i * 10, 1, 2, 255])
            .collect::<Vec<_>>();
        Image::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            data,
        )
    }

    #[test]
    fn nearest_rounds_to_closest() -> Result<(), ImageError> {
        let image = ramp()?;
        let mut pixel = [0u8; 4];

        nearest_neighbor_interpolation(&image, 1.4, 0.6, &mut pixel);
        assert_eq!(pixel, [40, 1, 2, 255]);

        nearest_neighbor_interpolation(&image, 1.5, 0.2, &mut pixel);
        assert_eq!(pixel, [20, 1, 2, 255]);

        Ok(())
    }

    #[test]
    fn nearest_clamps_outside() -> Result<(), ImageError> {
        let image = ramp()?;
        let (mut a, mut b) = ([0u8; 4], [0u8; 4]);

        nearest_neighbor_interpolation(&image, -7.3, -0.8, &mut a);
        nearest_neighbor_interpolation(&image, 0.0, 0.0, &mut b);
        assert_eq!(a, b);

        nearest_neighbor_interpolation(&image, 40.0, 9.5, &mut a);
        nearest_neighbor_interpolation(&image, 2.0, 1.0, &mut b);
        assert_eq!(a, b);
        assert_eq!(a[0], 50);

        Ok(())
    }
}
