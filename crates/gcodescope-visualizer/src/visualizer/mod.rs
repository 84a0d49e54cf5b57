//! 2D toolpath visualization
//!
//! This module provides:
//! - Toolpath reconstruction from G0/G1 moves (path)
//! - Bounding box computation (viewport)
//! - Capped diagnostic traces (trace)
//! - SVG rendering with grid and bounding rectangle (canvas_renderer)

pub mod canvas_renderer;
pub mod path;
pub mod trace;
pub mod viewport;

pub use canvas_renderer::{
    dimension_labels, render_bounds_to_path, render_grid_to_path, render_svg,
    render_toolpath_to_path, RenderOptions,
};
pub use path::{
    reconstruct, MotionState, Point2D, ReconstructOptions, Reconstruction, Segment, Toolpath,
    TrackingPhase,
};
pub use trace::{MotionTrace, TraceEntry};
pub use viewport::{BoundingBox, Bounds};
