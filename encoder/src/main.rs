use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ParallelProgressIterator;
use oled_anim_lib::{Encoder, Header, Params, Path, PathBuf, RgbaImage, Source, Storage};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::fs;
use tracing::info;

/// Converts an image sequence into a compressed QMK OLED animation.
#[derive(Parser, Debug)]
#[command(name = "oled-anim", version, about)]
struct Cli {
    /// Path to the generated C header
    #[arg(short = 'o', default_value = "animation.h")]
    output: PathBuf,

    /// Mean RGB value a pixel has to exceed to be lit
    #[arg(short = 't', default_value_t = Params::DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Store every packed value in a 9-bit field, for older firmware
    #[arg(long)]
    legacy_fields: bool,

    /// Directory of PNG frames, or an animated GIF
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let storage = if cli.legacy_fields {
        Storage::Legacy
    } else {
        Storage::Minimal
    };

    let params = Params::new(cli.threshold, storage);
    let source = load(&cli.input)?;

    info!(frames = source.len(), input = %cli.input.display(), "loaded frames");

    let anim = Encoder::new(&params)
        .encode(source.images())
        .context("Couldn't encode animation")?;

    let stats = anim.stats();

    eprintln!("{:#?}", stats);

    match stats.compression_ratio() {
        Some(ratio) => info!("compression ratio: {:.3} to 1", ratio),
        None => info!("compression ratio: n/a"),
    }

    fs::write(&cli.output, Header::new(&anim).to_string())
        .with_context(|| format!("Couldn't write header: {}", cli.output.display()))?;

    info!(output = %cli.output.display(), bytes = stats.total_bytes(), "wrote header");

    Ok(())
}

fn load(input: &Path) -> Result<Source> {
    if Source::is_gif(input) {
        return Source::from_gif(input);
    }

    let paths = Source::paths(input)?;
    let len = paths.len();

    let images = paths
        .into_par_iter()
        .progress_count(len as u64)
        .map(Source::decode)
        .collect::<Result<Vec<RgbaImage>>>()?;

    Ok(Source::from_images(images))
}
