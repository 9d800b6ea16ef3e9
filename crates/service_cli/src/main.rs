//! pi-anim - Animated Monte Carlo Estimation of π
//!
//! Command-line driver for the quadrant sampling engine. Frames are written
//! to stdout (or `--output`) as text or JSON lines; logs go to stderr.
//!
//! # Commands
//!
//! - `pi-anim pseudo` - Animate pseudorandom sampling
//! - `pi-anim quasi` - Animate Sobol sampling
//! - `pi-anim compare` - Both sources side by side
//! - `pi-anim check` - Validate the configuration file
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate loads configuration, sets up
//! logging and wires `pi_engine` playback to a renderer.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::run::{Mode, OutputFormat, RunOptions};
use config::{AnimationConfig, RunOverrides};
pub use error::{CliError, Result};

/// Animated Monte Carlo estimation of π
#[derive(Parser)]
#[command(name = "pi-anim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pi-anim.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate pseudorandom sampling
    Pseudo(RunArgs),

    /// Animate quasirandom (Sobol) sampling
    Quasi(RunArgs),

    /// Animate both sources side by side
    Compare(RunArgs),

    /// Check configuration
    Check,
}

#[derive(Args)]
struct RunArgs {
    /// Points per source
    #[arg(short = 'n', long)]
    points: Option<usize>,

    /// Points added per frame
    #[arg(short, long)]
    points_per_frame: Option<usize>,

    /// Seed for the pseudorandom source
    #[arg(short, long)]
    seed: Option<u64>,

    /// Consume Sobol points first-to-last instead of last-to-first
    #[arg(long)]
    forward: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Include point coordinates in JSON frames
    #[arg(long)]
    include_points: bool,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RunArgs {
    fn into_options(self) -> RunOptions {
        RunOptions {
            overrides: RunOverrides {
                n_points: self.points,
                points_per_frame: self.points_per_frame,
                seed: self.seed,
                sobol_order: self
                    .forward
                    .then_some(pi_engine::source::SobolOrder::Forward),
            },
            format: self.format,
            include_points: self.include_points,
            output: self.output,
        }
    }
}

fn init_tracing(config: &AnimationConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: &Path) -> Result<AnimationConfig> {
    Ok(AnimationConfig::load_or_default(path)?.with_env_override()?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Pseudo(args) => {
            config.validate()?;
            commands::run::run(&config, Mode::Pseudo, &args.into_options())
        }
        Commands::Quasi(args) => {
            config.validate()?;
            commands::run::run(&config, Mode::Quasi, &args.into_options())
        }
        Commands::Compare(args) => {
            config.validate()?;
            commands::run::run(&config, Mode::Compare, &args.into_options())
        }
        Commands::Check => commands::check::run(&config),
    }
}
