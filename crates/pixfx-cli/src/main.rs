//! pixfx - pixel transforms on gamma-encoded PNG files
//!
//! Decodes to linear light, applies one transform, encodes back.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pixfx")]
#[command(author, version, about = "Pixel transforms for gamma-encoded PNG images")]
#[command(long_about = "
Applies brightness, contrast, blur, convolution and combine operations to
PNG images. Pixels are gamma-decoded to linear light before processing and
clamped + gamma-encoded on output.

Examples:
  pixfx brightness lake.png -o lake_bright.png -f 1.7
  pixfx contrast lake.png -o lake_contrast.png -f 2 --mid 0.5
  pixfx blur city.png -o city_blur.png -s 15
  pixfx kernel city.png -o city_sobel_x.png --preset sobel-x
  pixfx kernel city.png -o custom.png --weights 0,-1,0,-1,5,-1,0,-1,0
  pixfx combine gx.png gy.png -o edges.png
  pixfx --config pixfx.yaml --parallel edges city.png -o city_edges.png
")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Use the row-parallel implementations
    #[arg(long, global = true)]
    parallel: bool,

    /// YAML pipeline config (gamma, input_dir, output_dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Gamma for decode/encode (overrides config)
    #[arg(short, long, global = true)]
    gamma: Option<f32>,

    /// Directory relative inputs are read from (overrides config)
    #[arg(long, global = true)]
    input_dir: Option<PathBuf>,

    /// Directory relative outputs are written to (overrides config)
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Multiply every value by a factor
    #[command(visible_alias = "b")]
    Brightness(BrightnessArgs),

    /// Scale distance from a midpoint
    Contrast(ContrastArgs),

    /// Apply box blur
    Blur(BlurArgs),

    /// Convolve with a preset or explicit kernel
    #[command(visible_alias = "k")]
    Kernel(KernelArgs),

    /// Root-sum-of-squares merge of two images
    Combine(CombineArgs),

    /// Sobel gradient magnitude
    Edges(EdgesArgs),
}

#[derive(Args)]
pub(crate) struct BrightnessArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Factor (> 0); < 1 darkens, > 1 brightens
    #[arg(short, long)]
    factor: f32,
}

#[derive(Args)]
pub(crate) struct ContrastArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Contrast factor
    #[arg(short, long, allow_hyphen_values = true)]
    factor: f32,

    /// Pivot value
    #[arg(long, default_value = "0.5")]
    mid: f32,
}

#[derive(Args)]
pub(crate) struct BlurArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Kernel size (positive, odd)
    #[arg(short, long, default_value = "3")]
    size: usize,

    /// Divide border pixels by their truncated window size instead of size²
    #[arg(long)]
    renormalize_edges: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum KernelPreset {
    /// 1x1 pass-through
    Identity,
    /// Uniform 1/size² weights
    Box,
    /// Sobel, vertical gradient
    SobelX,
    /// Sobel, horizontal gradient
    SobelY,
    /// Laplacian sharpen (uses --amount)
    Sharpen,
}

#[derive(Args)]
pub(crate) struct KernelArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Built-in kernel
    #[arg(short, long, value_enum, conflicts_with = "weights")]
    preset: Option<KernelPreset>,

    /// Row-major weights, comma separated
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    weights: Option<Vec<f32>>,

    /// Kernel side (box preset, or explicit weights; inferred for weights if omitted)
    #[arg(short, long)]
    size: Option<usize>,

    /// Sharpen strength
    #[arg(short, long, default_value = "1.0")]
    amount: f32,
}

#[derive(Args)]
pub(crate) struct CombineArgs {
    /// First image
    a: PathBuf,

    /// Second image
    b: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
pub(crate) struct EdgesArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let ctx = commands::Context::from_cli(&cli)?;

    match cli.command {
        Commands::Brightness(args) => commands::brightness::run(args, &ctx),
        Commands::Contrast(args) => commands::contrast::run(args, &ctx),
        Commands::Blur(args) => commands::blur::run(args, &ctx),
        Commands::Kernel(args) => commands::kernel::run(args, &ctx),
        Commands::Combine(args) => commands::combine::run(args, &ctx),
        Commands::Edges(args) => commands::edges::run(args, &ctx),
    }
}
