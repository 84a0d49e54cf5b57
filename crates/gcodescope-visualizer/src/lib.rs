//! # GCodeScope Visualizer
//!
//! G-code interpretation for GCodeScope.
//! Includes axis token scanning, axis scaling, 2D toolpath reconstruction,
//! SVG rendering, and the file helpers used by the command line tool.

pub mod gcode;
pub mod utils;
pub mod visualizer;

pub use gcode::{
    classify_line, find_axis_token, find_coordinate_tokens, format_axis_value, parse_motion,
    scale_document, AxisScaler, AxisToken, MotionCommand, MotionKind,
};

pub use visualizer::{
    reconstruct, render_svg, BoundingBox, MotionState, MotionTrace, Point2D, ReconstructOptions,
    Reconstruction, RenderOptions, Segment, Toolpath, TraceEntry, TrackingPhase,
};

pub use utils::{default_output_path, read_document, write_document, write_trace, GcodeFileReader};
