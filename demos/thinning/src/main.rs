use argh::FromArgs;
use std::path::PathBuf;

use skelet::image::Image;
use skelet::imgproc::{
    resize,
    thinning::{self, ShrinkUpdate, ThinningConfig},
    threshold,
};
use skelet::io::functional as F;

#[derive(FromArgs)]
/// Binarize, downsample and thin a grayscale image
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output image
    #[argh(option, short = 'o', default = "PathBuf::from(\"thinning.bmp\")")]
    output_path: PathBuf,

    /// pixels strictly above this value are foreground
    #[argh(option, default = "127")]
    threshold: u8,

    /// keep one pixel out of every `step x step` block before thinning
    #[argh(option, default = "8")]
    step: usize,

    /// read neighbours from the start-of-pass image instead of the working image
    #[argh(switch)]
    snapshot: bool,

    /// stop after this many passes even if not converged
    #[argh(option)]
    max_iterations: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the image
    let image = F::read_image_any_gray8(&args.image_path)?;
    log::info!("Read {} with size {}", args.image_path.display(), image.size());

    // binarize the image as u8
    let mut bin = Image::<u8, 1>::from_size_val(image.size(), 0)?;
    threshold::threshold_binary(&image, &mut bin, args.threshold, 255)?;

    // keep the top-left pixel of every block
    let small_size = resize::downsample_size(bin.size(), args.step)?;
    let mut small = Image::<u8, 1>::from_size_val(small_size, 0)?;
    resize::downsample(&bin, &mut small, args.step)?;

    let config = ThinningConfig {
        update: if args.snapshot {
            ShrinkUpdate::Snapshot
        } else {
            ShrinkUpdate::Sequential
        },
        max_iterations: args.max_iterations,
        ..Default::default()
    };
    let (skeleton, report) = thinning::skeletonize_with(&small, &config)?;
    log::info!(
        "Thinning: {} iterations, {} pixels removed, converged: {}",
        report.iterations,
        report.removed,
        report.converged
    );

    F::write_image_gray8(&args.output_path, &skeleton)?;
    log::info!("Wrote {}", args.output_path.display());

    Ok(())
}
