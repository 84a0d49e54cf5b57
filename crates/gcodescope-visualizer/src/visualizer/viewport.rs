//! Bounding box helpers for reconstructed toolpaths.

use serde::Serialize;

use super::path::{Point2D, Segment};

/// Bounding box accumulator used while walking segments.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    pub fn new() -> Self {
        Self {
            min_x: f64::MAX,
            max_x: f64::MIN,
            min_y: f64::MAX,
            max_y: f64::MIN,
        }
    }

    pub fn update(&mut self, point: Point2D) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// The accumulated box, or `None` if nothing was added
    pub fn finalize(self) -> Option<BoundingBox> {
        self.is_valid().then_some(BoundingBox {
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
        })
    }
}

/// Axis-aligned extent of a toolpath
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Extent of every segment endpoint; `None` for an empty slice
    pub fn from_segments(segments: &[Segment]) -> Option<Self> {
        let mut bounds = Bounds::new();
        for segment in segments {
            bounds.update(segment.start);
            bounds.update(segment.end);
        }
        bounds.finalize()
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Grow the box by `margin` on every side
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            max_x: self.max_x + margin,
            min_y: self.min_y - margin,
            max_y: self.max_y + margin,
        }
    }
}
