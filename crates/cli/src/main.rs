use std::path::PathBuf;
use std::process;

use clap::Parser;

use shape_blur_core::pipeline::run_batch;
use shape_blur_core::shared::constants::DEFAULT_BLUR_KERNEL;

/// Blur the largest closed shape inside a fixed region of every image in a folder.
#[derive(Parser, Debug)]
#[command(name = "shape-blur", version)]
struct Cli {
    /// Directory of input images (jpg, jpeg, png, bmp, tiff, tif).
    #[arg(long)]
    input: PathBuf,

    /// Directory for results; created if missing.
    #[arg(long)]
    output: PathBuf,

    /// Region to search: x y width height, in pixels.
    #[arg(
        long,
        num_args = 4,
        value_names = ["X", "Y", "W", "H"],
        allow_negative_numbers = true,
        required = true
    )]
    rect: Vec<i64>,

    /// Gaussian blur kernel size applied inside the shape (must be odd).
    #[arg(long, default_value_t = DEFAULT_BLUR_KERNEL as i64, allow_negative_numbers = true)]
    blur_kernel: i64,

    /// Also write the grayscale, edge, region and mask images for each input.
    #[arg(long)]
    debug: bool,

    /// Number of images processed in parallel (1 = sequential).
    #[arg(long, default_value_t = 1)]
    jobs: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let report = run_batch(
        &cli.input,
        &cli.output,
        &cli.rect,
        cli.blur_kernel,
        cli.debug,
        cli.jobs,
    )?;

    log::info!(
        "{} of {} image(s) written to {}",
        report.processed_count(),
        report.total(),
        cli.output.display()
    );
    Ok(())
}
