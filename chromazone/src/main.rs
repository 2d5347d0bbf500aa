// CLI entry for chromazone
use anyhow::{Context, Result};
use chromazone::color::parse_hex;
use chromazone::filter::Strategy;
use chromazone::{DEFAULT_MAX_COLORS, Options};
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chromazone",
    version,
    about = "Turn a drawing into a paint-by-number page",
    after_help = "Example:\n  chromazone --in drawing.png --out coloring.png --delimiter-strategy border --border-color '#000' --max-colors 15"
)]
struct Cli {
    /// Input image (PNG, JPEG or WebP)
    #[arg(long = "in", value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output image, must be a .png file (checked before the input is read)
    #[arg(long = "out", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// How zone boundaries are found: "border" or "color"
    #[arg(long = "delimiter-strategy", default_value_t = Strategy::Color)]
    strategy: Strategy,

    /// Hex color of the drawing lines, for the border strategy
    #[arg(long = "border-color", default_value = "#000")]
    border_color: String,

    /// Border color tolerance in percent (0-100)
    #[arg(long = "border-tolerance", default_value_t = 10.0)]
    border_tolerance: f64,

    /// Color range tolerance in percent (0-100)
    #[arg(long = "color-tolerance", default_value_t = 10.0)]
    color_tolerance: f64,

    /// Maximum number of palette colors (0 = unlimited)
    #[arg(long = "max-colors", default_value_t = DEFAULT_MAX_COLORS)]
    max_colors: usize,
}

fn build_options(cli: &Cli) -> Result<Options> {
    let mut opts = Options::default();
    opts.boundary.strategy = cli.strategy;
    opts.boundary.border_color = parse_hex(&cli.border_color).context("--border-color")?;
    opts.boundary.border_tolerance_pct = cli.border_tolerance;
    opts.boundary.color_tolerance_pct = cli.color_tolerance;
    opts.max_colors = cli.max_colors;
    opts.validate().context("invalid options")?;
    Ok(opts)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let opts = build_options(&cli)?;
    chromazone::convert_file(&cli.input, &cli.output, &opts)
        .with_context(|| format!("converting {}", cli.input.display()))?;
    Ok(())
}
