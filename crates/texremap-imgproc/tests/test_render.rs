use texremap_image::{ImageError, ImageSize, PixelBuffer};
use texremap_imgproc::interpolation::{InterpolationMode, Sampler};
use texremap_imgproc::mapping::{map_mbg_to_mbu, UvMapping};
use texremap_imgproc::parallel::ExecutionStrategy;
use texremap_imgproc::render::{render_face, render_face_with, RenderOptions};

const MODES: [InterpolationMode; 4] = [
    InterpolationMode::Nearest,
    InterpolationMode::Bilinear,
    InterpolationMode::Bicubic,
    InterpolationMode::Lanczos,
];

fn gradient(width: usize, height: usize) -> Result<PixelBuffer, ImageError> {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                ((x + y) % 256) as u8,
                255,
            ]);
        }
    }
    PixelBuffer::new(ImageSize { width, height }, data)
}

#[test]
fn white_square_mirror_is_invariant() -> Result<(), ImageError> {
    let src = PixelBuffer::from_size_val(
        ImageSize {
            width: 2,
            height: 2,
        },
        255,
    )?;

    let dst = render_face(&src, InterpolationMode::Nearest, UvMapping::MbuToMbg)?;

    assert_eq!(dst.size(), src.size());
    assert_eq!(dst.as_slice(), &[255u8; 16]);

    Ok(())
}

fn single_red_pixel(size: ImageSize, x: usize, y: usize) -> Result<PixelBuffer, ImageError> {
    let mut data = [0u8, 0, 0, 255].repeat(size.width * size.height);
    let base = (y * size.width + x) * 4;
    data[base..base + 4].copy_from_slice(&[255, 0, 0, 255]);
    PixelBuffer::new(size, data)
}

fn red_pixels(image: &PixelBuffer) -> Result<Vec<(usize, usize)>, ImageError> {
    let mut found = vec![];
    for y in 0..image.height() {
        for x in 0..image.width() {
            assert_eq!(image.get_pixel(x, y, 3)?, 255);
            if image.get_pixel(x, y, 0)? == 255 {
                found.push((x, y));
            }
        }
    }
    Ok(found)
}

#[test]
fn red_pixel_is_mirrored() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 4,
        height: 3,
    };

    // destination column x samples source column `width - x`, clamped to the border
    let src = single_red_pixel(size, 1, 0)?;
    let dst = render_face(&src, InterpolationMode::Nearest, UvMapping::MbuToMbg)?;
    assert_eq!(red_pixels(&dst)?, vec![(size.width - 1, 0)]);

    let src = single_red_pixel(size, size.width - 1, 2)?;
    let dst = render_face(&src, InterpolationMode::Nearest, UvMapping::MbuToMbg)?;
    assert_eq!(red_pixels(&dst)?, vec![(0, 2), (1, 2)]);

    Ok(())
}

#[test]
fn mirror_never_samples_first_column() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 4,
        height: 3,
    };
    let src = single_red_pixel(size, 0, 0)?;
    let dst = render_face(&src, InterpolationMode::Nearest, UvMapping::MbuToMbg)?;
    assert!(red_pixels(&dst)?.is_empty());

    Ok(())
}

#[test]
fn invalid_coordinates_are_transparent() -> Result<(), ImageError> {
    let src = gradient(32, 16)?;

    for mode in MODES {
        let dst = render_face(&src, mode, UvMapping::MbgToMbu)?;
        let mut transparent = 0;

        for y in 0..src.height() {
            for x in 0..src.width() {
                let u = x as f64 / src.width() as f64;
                let v = y as f64 / src.height() as f64;
                if map_mbg_to_mbu(u, v).is_none() {
                    transparent += 1;
                    for c in 0..4 {
                        assert_eq!(dst.get_pixel(x, y, c)?, 0);
                    }
                } else {
                    // lanczos weights only approximately sum to one
                    assert!(dst.get_pixel(x, y, 3)? > 240);
                }
            }
        }

        assert!(transparent > 0);
    }

    Ok(())
}

#[test]
fn mapped_pixels_match_sampler() -> Result<(), ImageError> {
    let src = gradient(16, 16)?;

    for mode in MODES {
        let dst = render_face(&src, mode, UvMapping::MbgToMbu)?;
        let sampler = Sampler::new(&src, mode);

        for (x, y) in [(4, 8), (12, 8), (6, 3), (10, 13)] {
            let (u, v) = map_mbg_to_mbu(x as f64 / 16.0, y as f64 / 16.0).unwrap();
            let mut expected = [0u8; 4];
            sampler.sample(u * 16.0, v * 16.0, &mut expected);
            let base = (y * 16 + x) * 4;
            assert_eq!(&dst.as_slice()[base..base + 4], &expected);
        }
    }

    Ok(())
}

#[test]
fn serial_and_parallel_agree() -> Result<(), ImageError> {
    let src = gradient(37, 23)?;

    for mode in MODES {
        for mapping in [UvMapping::MbgToMbu, UvMapping::MbuToMbg] {
            let options = RenderOptions::new(mode, mapping);
            let parallel = render_face_with(&src, &options)?;
            let serial =
                render_face_with(&src, &options.with_strategy(ExecutionStrategy::Serial))?;
            assert_eq!(parallel, serial, "{mode} {mapping}");
        }
    }

    Ok(())
}

#[test]
fn uniform_source_survives_resampling() -> Result<(), ImageError> {
    let src = PixelBuffer::from_size_val(
        ImageSize {
            width: 12,
            height: 9,
        },
        128,
    )?;

    for mode in [
        InterpolationMode::Nearest,
        InterpolationMode::Bilinear,
        InterpolationMode::Bicubic,
    ] {
        let dst = render_face(&src, mode, UvMapping::MbuToMbg)?;
        assert!(dst.as_slice().iter().all(|&v| v == 128), "{mode}");
    }

    Ok(())
}

#[test]
fn wrong_buffer_length_is_rejected() {
    let res = PixelBuffer::new(
        ImageSize {
            width: 3,
            height: 3,
        },
        vec![0u8; 3 * 3 * 3],
    );
    assert_eq!(res, Err(ImageError::InvalidChannelShape(27, 36)));
}
