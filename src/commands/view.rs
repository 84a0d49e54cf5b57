use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use gcodescope_settings::Config;
use gcodescope_visualizer::{
    read_document, reconstruct, render_svg, write_document, write_trace, BoundingBox,
    ReconstructOptions, RenderOptions,
};
use tracing::{debug, warn};

const DEFAULT_TRACE_FILE: &str = "debug_coordinates.txt";

#[derive(Args, Debug, Default, Clone)]
#[command(about = "Reconstruct the XY toolpath of a G-code file and render it as SVG")]
pub struct ViewArgs {
    /// G-code file to preview
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// SVG destination. Defaults to the input path with an `.svg` extension
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Draw the background grid
    #[arg(long)]
    pub grid: bool,

    /// Draw the bounding rectangle with width and height
    #[arg(long = "rect")]
    pub bounding_rect: bool,

    /// Grid spacing in millimetres (1-100)
    #[arg(long, value_name = "MM")]
    pub raster: Option<u32>,

    /// Write the first traced moves to a file (`--debug-trace=PATH` to name it)
    #[arg(
        long = "debug-trace",
        value_name = "PATH",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_TRACE_FILE
    )]
    pub trace: Option<PathBuf>,
}

impl ViewArgs {
    /// Configured viewer settings with any command line values applied on top
    pub fn render_options(&self, config: &Config) -> RenderOptions {
        let viewer = &config.viewer;
        RenderOptions {
            show_grid: self.grid || viewer.show_grid,
            show_bounding_rect: self.bounding_rect || viewer.show_bounding_rect,
            raster_spacing: self.raster.unwrap_or(viewer.raster_spacing),
        }
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("svg"))
    }
}

/// Outcome of a preview run
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSummary {
    pub segments: usize,
    pub total_length: f64,
    pub bounds: Option<BoundingBox>,
    /// Not written when nothing was drawn
    pub svg: Option<PathBuf>,
    pub trace: Option<PathBuf>,
}

/// Reconstruct `input`, render the SVG, and optionally write a trace file
pub fn view_file(
    input: &Path,
    output: &Path,
    options: &RenderOptions,
    trace: Option<(&Path, usize)>,
) -> Result<ViewSummary> {
    options.validate()?;

    let document = read_document(input)?;
    let reconstruct_options = match trace {
        Some((_, limit)) => ReconstructOptions::with_trace(limit),
        None => ReconstructOptions::new(),
    };
    let result = reconstruct(&document, &reconstruct_options);
    let toolpath = &result.toolpath;

    let trace_path = match (trace, result.trace.as_ref()) {
        (Some((path, _)), Some(motion_trace)) => {
            write_trace(path, motion_trace)?;
            debug!(
                "Traced {} of {} moves to {}",
                motion_trace.entries().len(),
                motion_trace.seen(),
                path.display()
            );
            Some(path.to_path_buf())
        }
        _ => None,
    };

    let svg_path = match render_svg(toolpath, options) {
        Some(svg) => {
            write_document(output, &svg)?;
            Some(output.to_path_buf())
        }
        None => {
            warn!("No drawable moves in {}", input.display());
            None
        }
    };

    Ok(ViewSummary {
        segments: toolpath.len(),
        total_length: toolpath.total_length(),
        bounds: toolpath.bounding_box(),
        svg: svg_path,
        trace: trace_path,
    })
}

pub fn execute(args: ViewArgs, config: &Config) -> Result<()> {
    let options = args.render_options(config);
    let output = args.output_path();
    let trace = args
        .trace
        .as_deref()
        .map(|path| (path, config.viewer.trace_limit));

    let summary = view_file(&args.input, &output, &options, trace)
        .with_context(|| format!("Failed to preview {}", args.input.display()))?;

    match (&summary.svg, summary.bounds) {
        (Some(svg), Some(bounds)) => {
            println!(
                "{} segments, {:.2} mm x {:.2} mm, path length {:.2} mm",
                summary.segments,
                bounds.width(),
                bounds.height(),
                summary.total_length
            );
            println!("Preview saved as: {}", svg.display());
        }
        _ => println!("No toolpath to display"),
    }
    if let Some(trace) = &summary.trace {
        println!("Debug trace saved as: {}", trace.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const SQUARE: &str = "\
; square
G0 X0 Y0
G1 X10 Y0 F300
G1 Y10
G1 X0
G1 Y0
";

    #[derive(Parser)]
    struct ViewCli {
        #[command(flatten)]
        args: ViewArgs,
    }

    fn parse(argv: &[&str]) -> ViewArgs {
        ViewCli::try_parse_from(std::iter::once("view").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::new();
        config.viewer.raster_spacing = 25;
        config.viewer.show_bounding_rect = true;

        let args = ViewArgs {
            grid: true,
            ..Default::default()
        };
        let options = args.render_options(&config);
        assert!(options.show_grid);
        assert!(options.show_bounding_rect);
        assert_eq!(options.raster_spacing, 25);

        let args = ViewArgs {
            raster: Some(5),
            ..Default::default()
        };
        assert_eq!(args.render_options(&config).raster_spacing, 5);
    }

    #[test]
    fn test_default_output_path() {
        let args = ViewArgs {
            input: PathBuf::from("jobs/part.nc"),
            ..Default::default()
        };
        assert_eq!(args.output_path(), PathBuf::from("jobs/part.svg"));
    }

    #[test]
    fn test_debug_trace_flag_does_not_take_input() {
        let args = parse(&["--debug-trace", "part.gcode"]);
        assert_eq!(args.input, PathBuf::from("part.gcode"));
        assert_eq!(args.trace, Some(PathBuf::from(DEFAULT_TRACE_FILE)));

        let args = parse(&["part.gcode", "--debug-trace=moves.txt"]);
        assert_eq!(args.input, PathBuf::from("part.gcode"));
        assert_eq!(args.trace, Some(PathBuf::from("moves.txt")));

        assert_eq!(parse(&["part.gcode"]).trace, None);
    }

    #[test]
    fn test_view_file_renders_svg_and_trace() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("square.gcode");
        let svg = dir.path().join("square.svg");
        let trace = dir.path().join("trace.txt");
        fs::write(&input, SQUARE).unwrap();

        let options = RenderOptions {
            show_grid: true,
            show_bounding_rect: true,
            raster_spacing: 5,
        };
        let summary = view_file(&input, &svg, &options, Some((&trace, 2))).unwrap();

        assert_eq!(summary.segments, 4);
        assert!((summary.total_length - 40.0).abs() < 1e-9);
        let bounds = summary.bounds.unwrap();
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 10.0);

        let rendered = fs::read_to_string(&svg).unwrap();
        assert!(rendered.starts_with("<svg"));
        assert!(rendered.contains("Width: 10.00 mm"));
        assert!(rendered.contains("Height: 10.00 mm"));

        assert_eq!(
            fs::read_to_string(&trace).unwrap(),
            "Original: (0.0, 0.0) Parsed: (10.0, 0.0)\nOriginal: (10.0, 0.0) Parsed: (10.0, 10.0)\n"
        );
    }

    #[test]
    fn test_view_file_without_motion_writes_no_svg() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("empty.gcode");
        let svg = dir.path().join("empty.svg");
        fs::write(&input, "; nothing here\nM3 S1000\n").unwrap();

        let summary = view_file(&input, &svg, &RenderOptions::default(), None).unwrap();
        assert_eq!(summary.segments, 0);
        assert!(summary.bounds.is_none());
        assert!(summary.svg.is_none());
        assert!(!svg.exists());
    }

    #[test]
    fn test_view_file_rejects_bad_raster() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("square.gcode");
        fs::write(&input, SQUARE).unwrap();

        let options = RenderOptions {
            raster_spacing: 0,
            ..Default::default()
        };
        assert!(view_file(&input, &dir.path().join("x.svg"), &options, None).is_err());
    }
}
