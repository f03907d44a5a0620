use std::path::PathBuf;

use clap::Parser;

use fadeloop::{CropBox, FadeloopError, PipelineConfig};

/// Create a looping cross-fade GIF from a directory of images.
#[derive(Parser, Debug)]
#[command(name = "fadeloop", version)]
struct Cli {
    /// Directory containing the source images.
    #[arg(long, default_value = "./input")]
    input: PathBuf,

    /// Output GIF file.
    #[arg(long, default_value = "output.gif")]
    output: PathBuf,

    /// Duration of each frame in milliseconds.
    #[arg(long, default_value_t = 50)]
    duration: u32,

    /// Number of frames for the cross-fade transition effect.
    #[arg(long, default_value_t = 4)]
    transition: u32,

    /// Crop box for the images in the format 'left,upper,right,lower'.
    #[arg(long)]
    crop: Option<String>,

    /// Delay in milliseconds for each image before its transition.
    #[arg(long, default_value_t = 2000)]
    delay: u32,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let crop = match &cli.crop {
        Some(s) => Some(CropBox::parse(s)?),
        None => None,
    };

    let cfg = PipelineConfig {
        input_dir: cli.input,
        out_path: cli.output,
        frame_duration_ms: cli.duration,
        transition_frames: cli.transition,
        delay_ms: cli.delay,
        crop,
        ..PipelineConfig::default()
    };

    match fadeloop::create_gif(&cfg) {
        Ok(()) => {
            eprintln!("wrote {}", cfg.out_path.display());
            Ok(())
        }
        Err(err @ FadeloopError::NoImagesFound(_)) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
