use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use gcodescope_core::{Axis, ScaleFactors};
use gcodescope_settings::Config;
use gcodescope_visualizer::{default_output_path, read_document, write_document, AxisScaler};
use tracing::{debug, info};

#[derive(Args, Debug, Default, Clone)]
#[command(about = "Scale X/Y/Z coordinates of a G-code file")]
pub struct ScaleArgs {
    /// G-code file to scale
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Destination file. Defaults to `<stem>_scaled_x.._y.._z..<ext>` next to the input
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// X scale factor
    #[arg(short = 'x', long = "x-factor", value_name = "FACTOR", allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// Y scale factor
    #[arg(short = 'y', long = "y-factor", value_name = "FACTOR", allow_negative_numbers = true)]
    pub y: Option<f64>,

    /// Z scale factor
    #[arg(short = 'z', long = "z-factor", value_name = "FACTOR", allow_negative_numbers = true)]
    pub z: Option<f64>,
}

impl ScaleArgs {
    /// Configured factors with any command line values applied on top
    pub fn factors(&self, config: &Config) -> ScaleFactors {
        let mut factors = config.scale;
        for (axis, value) in [(Axis::X, self.x), (Axis::Y, self.y), (Axis::Z, self.z)] {
            if let Some(value) = value {
                factors.set(axis, value);
            }
        }
        factors
    }
}

/// Scale `input` and write the result, returning where it was written
pub fn scale_file(input: &Path, output: Option<&Path>, factors: &ScaleFactors) -> Result<PathBuf> {
    factors.validate()?;

    let document = read_document(input)?;
    let destination = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input, factors));

    debug!(
        "Scaling {} by x={} y={} z={}",
        input.display(),
        factors.x,
        factors.y,
        factors.z
    );
    let scaled = AxisScaler::new(*factors).scale_document(&document);
    write_document(&destination, &scaled)?;

    info!("Wrote {} lines", scaled.lines().count());
    Ok(destination)
}

pub fn execute(args: ScaleArgs, config: &Config) -> Result<()> {
    let factors = args.factors(config);
    let destination = scale_file(&args.input, args.output.as_deref(), &factors)
        .with_context(|| format!("Failed to scale {}", args.input.display()))?;

    println!("Scaled file saved as: {}", destination.display());
    Ok(())
}
