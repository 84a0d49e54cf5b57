use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gcodescope::commands::{scale, view};
use gcodescope::{init_logging, Config, BUILD_DATE, VERSION};

#[derive(Parser)]
#[command(name = "gcodescope")]
#[command(about = "Scale and preview G-code toolpaths", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    /// Configuration file (.toml or .json). Defaults to the platform config directory
    #[arg(long = "config", global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scale axis coordinates
    #[command(alias = "s")]
    Scale(scale::ScaleArgs),

    /// Render a toolpath preview
    #[command(alias = "v")]
    View(view::ViewArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug)?;
    tracing::debug!("gcodescope {} (built {})", VERSION, BUILD_DATE);

    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Scale(args) => scale::execute(args, &config),
        Commands::View(args) => view::execute(args, &config),
    }
}
