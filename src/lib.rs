//! # GCodeScope
//!
//! Command-line tools for plain-text G-code toolpaths:
//! - Per-axis scaling of X/Y/Z coordinates with line structure preserved
//! - 2D toolpath reconstruction from rapid and linear moves
//! - SVG preview with optional grid and annotated bounding rectangle
//!
//! ## Architecture
//!
//! GCodeScope is organized as a workspace with multiple crates:
//!
//! 1. **gcodescope-core** - Axis types, scale factors, constants, errors
//! 2. **gcodescope-visualizer** - Token scanning, scaling, reconstruction, rendering
//! 3. **gcodescope-settings** - Persisted configuration (JSON or TOML)
//! 4. **gcodescope** - CLI commands and logging setup

pub mod commands;

pub use gcodescope_core::{decimal_repr, Axis, GcodeError, ScaleFactors};

pub use gcodescope_visualizer::{
    default_output_path, read_document, reconstruct, render_svg, scale_document, write_document,
    write_trace, AxisScaler, BoundingBox, MotionState, MotionTrace, Point2D, ReconstructOptions,
    Reconstruction, RenderOptions, Segment, Toolpath,
};

pub use gcodescope_settings::{Config, SettingsError, ViewerSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Console output on stderr, so command output on stdout stays clean
/// - RUST_LOG environment variable support
/// - `info` by default, `debug` when `debug` is set
pub fn init_logging(debug: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(debug)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
