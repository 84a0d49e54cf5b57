//! 2D toolpath reconstruction
//!
//! Walks a document line by line as an explicit fold over [`MotionState`]:
//! rapid moves reposition the tool without drawing, linear moves emit a
//! [`Segment`] whenever they actually change the position. Axes a line does
//! not mention keep their last known value.

use serde::Serialize;
use tracing::{debug, trace};

use super::trace::{MotionTrace, TraceEntry};
use super::viewport::BoundingBox;
use crate::gcode::{parse_motion, MotionCommand, MotionKind};
use gcodescope_core::Axis;

/// Point in the XY plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One continuous linear move
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// Where the reconstruction currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingPhase {
    /// No motion line seen yet
    #[default]
    SeekingFirstPoint,
    /// Position established, moves are being tracked
    Tracking,
}

/// Running tool position carried from line to line
///
/// Each axis stays `None` until some motion line names it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionState {
    pub phase: TrackingPhase,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position, once both axes are known
    pub fn position(&self) -> Option<Point2D> {
        Some(Point2D::new(self.x?, self.y?))
    }

    /// Apply one motion command, returning the next state and any segment drawn
    pub fn advance(self, command: &MotionCommand<'_>) -> (Self, Option<Segment>) {
        let next = Self {
            phase: TrackingPhase::Tracking,
            x: command.resolve(Axis::X, self.x),
            y: command.resolve(Axis::Y, self.y),
        };

        match (self.phase, command.kind) {
            (TrackingPhase::SeekingFirstPoint, _) | (_, MotionKind::Rapid) => (next, None),
            (TrackingPhase::Tracking, MotionKind::Linear) => {
                if (next.x, next.y) == (self.x, self.y) {
                    return (self, None);
                }
                let segment = self
                    .position()
                    .zip(next.position())
                    .map(|(start, end)| Segment::new(start, end));
                (next, segment)
            }
        }
    }
}

/// Options for a reconstruction run
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconstructOptions {
    /// Record up to this many drawn moves for diagnostics; `None` disables
    pub trace_limit: Option<usize>,
}

impl ReconstructOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace(limit: usize) -> Self {
        Self {
            trace_limit: Some(limit),
        }
    }
}

/// Ordered segments of a document and their extent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Toolpath {
    segments: Vec<Segment>,
    bounds: Option<BoundingBox>,
}

impl Toolpath {
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let bounds = BoundingBox::from_segments(&segments);
        Self { segments, bounds }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Extent of all segments, `None` when the toolpath is empty
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of all segment lengths
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }
}

/// Result of [`reconstruct`]
#[derive(Debug, Clone, Default)]
pub struct Reconstruction {
    pub toolpath: Toolpath,
    /// Present only when tracing was requested
    pub trace: Option<MotionTrace>,
}

/// Rebuild the drawn toolpath of a document
pub fn reconstruct(document: &str, options: &ReconstructOptions) -> Reconstruction {
    let mut state = MotionState::new();
    let mut segments = Vec::new();
    let mut trace = options.trace_limit.map(MotionTrace::new);
    let mut motion_lines = 0usize;

    for (line_idx, line) in document.lines().enumerate() {
        let Some(command) = parse_motion(line) else {
            continue;
        };
        motion_lines += 1;

        let (next, segment) = state.advance(&command);
        if let Some(segment) = segment {
            trace!(
                "Line {}: ({}, {}) -> ({}, {})",
                line_idx + 1,
                segment.start.x,
                segment.start.y,
                segment.end.x,
                segment.end.y
            );
            if let Some(trace) = trace.as_mut() {
                trace.record(TraceEntry::new(line_idx + 1, segment.start, segment.end));
            }
            segments.push(segment);
        }
        state = next;
    }

    let toolpath = Toolpath::from_segments(segments);
    debug!(
        "Reconstruction complete: {} motion lines, {} segments, bounds={:?}",
        motion_lines,
        toolpath.len(),
        toolpath.bounding_box()
    );

    Reconstruction { toolpath, trace }
}
