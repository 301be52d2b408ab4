use argh::FromArgs;
use std::{path::PathBuf, time::Instant};

use texremap::imgproc::{
    interpolation::InterpolationMode,
    mapping::UvMapping,
    parallel::ExecutionStrategy,
    render::{render_face_with, RenderOptions},
};
use texremap::io::functional as F;

#[derive(FromArgs)]
/// Convert a texture between the MBG and MBU uv layouts
struct Args {
    /// path to the input texture
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output png
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// interpolation mode: nearest, linear, cubic or lanczos
    #[argh(option, default = "String::from(\"nearest\")")]
    interpolation: String,

    /// mapping direction: g2u (MBG to MBU) or u2g (MBU to MBG)
    #[argh(option, default = "String::from(\"u2g\")")]
    mapping: String,

    /// optional path for a fast bilinear preview written before the final render
    #[argh(option)]
    preview: Option<PathBuf>,

    /// reject unknown interpolation or mapping tags instead of falling back
    #[argh(switch)]
    strict: bool,

    /// render on the current thread only
    #[argh(switch)]
    serial: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut options = if args.strict {
        RenderOptions::new(
            args.interpolation.parse::<InterpolationMode>()?,
            args.mapping.parse::<UvMapping>()?,
        )
    } else {
        RenderOptions::from_selectors(&args.interpolation, &args.mapping)
    };
    if args.serial {
        options = options.with_strategy(ExecutionStrategy::Serial);
    }

    // read the texture
    let src = F::read_image_any_rgba8(&args.input)?;
    log::info!(
        "loaded {} ({}x{})",
        args.input.display(),
        src.width(),
        src.height()
    );

    if let Some(preview_path) = &args.preview {
        let start = Instant::now();
        let preview = render_face_with(&src, &options.preview())?;
        F::write_image_png_rgba8(preview_path, &preview)?;
        log::info!(
            "preview written to {} in {:?}",
            preview_path.display(),
            start.elapsed()
        );
    }

    let start = Instant::now();
    let dst = render_face_with(&src, &options)?;
    F::write_image_png_rgba8(&args.output, &dst)?;
    log::info!(
        "{} render ({}) written to {} in {:?}",
        options.interpolation,
        options.mapping,
        args.output.display(),
        start.elapsed()
    );

    Ok(())
}
