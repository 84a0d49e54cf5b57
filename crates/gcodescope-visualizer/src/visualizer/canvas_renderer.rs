//! SVG rendering of reconstructed toolpaths
//! Produces path data for segments, the background grid and the bounding
//! rectangle, and composes them into a standalone SVG document.

use std::fmt::Write;

use gcodescope_core::constants::{
    DEFAULT_RASTER_SPACING, MAX_RASTER_SPACING, MIN_RASTER_SPACING,
};
use gcodescope_core::GcodeError;

use super::path::{Point2D, Toolpath};
use super::viewport::BoundingBox;

const GRID_STROKE: &str = "rgb(200,200,200)";
const GRID_STROKE_WIDTH: f64 = 0.2;
const RECT_STROKE: &str = "rgb(150,150,150)";
const RECT_STROKE_WIDTH: f64 = 0.5;
const TOOLPATH_STROKE: &str = "black";
const LABEL_FONT_SIZE: f64 = 5.0;
const LABEL_GAP: f64 = 3.0;
// Rough advance width of one glyph relative to the font size
const LABEL_CHAR_WIDTH: f64 = 0.6;
const VIEW_MARGIN_FACTOR: f64 = 0.05;
const MIN_VIEW_MARGIN: f64 = 1.0;
const MAX_GRID_LINES: usize = 10_000;

/// Display toggles for [`render_svg`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw the background grid
    pub show_grid: bool,
    /// Draw the bounding rectangle with width/height labels
    pub show_bounding_rect: bool,
    /// Grid spacing in world units
    pub raster_spacing: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_grid: false,
            show_bounding_rect: false,
            raster_spacing: DEFAULT_RASTER_SPACING,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), GcodeError> {
        if !(MIN_RASTER_SPACING..=MAX_RASTER_SPACING).contains(&self.raster_spacing) {
            return Err(GcodeError::InvalidRasterSpacing {
                spacing: self.raster_spacing,
                min: MIN_RASTER_SPACING,
                max: MAX_RASTER_SPACING,
            });
        }
        Ok(())
    }
}

// Screen Y grows downward. Subtracting from zero avoids printing "-0".
fn flip_y(y: f64) -> f64 {
    0.0 - y
}

fn finish(mut path: String) -> String {
    path.truncate(path.trim_end().len());
    path
}

/// Render segments as SVG path commands
///
/// Consecutive segments that share an endpoint continue the same subpath.
pub fn render_toolpath_to_path(toolpath: &Toolpath) -> String {
    let mut path = String::with_capacity(toolpath.len() * 25);
    let mut last: Option<Point2D> = None;

    for segment in toolpath.segments() {
        if last != Some(segment.start) {
            let _ = write!(
                path,
                "M {:.3} {:.3} ",
                segment.start.x,
                flip_y(segment.start.y)
            );
        }
        let _ = write!(
            path,
            "L {:.3} {:.3} ",
            segment.end.x,
            flip_y(segment.end.y)
        );
        last = Some(segment.end);
    }

    finish(path)
}

/// Render the background grid as SVG path commands
///
/// Lines start at the box minimum and step by `raster`, one more line than
/// whole rasters fit in each direction.
pub fn render_grid_to_path(bounds: &BoundingBox, raster: u32) -> String {
    if raster == 0 {
        return String::new();
    }
    let step = f64::from(raster);
    let num_x = ((bounds.width() / step).floor() as usize).min(MAX_GRID_LINES);
    let num_y = ((bounds.height() / step).floor() as usize).min(MAX_GRID_LINES);
    let mut path = String::with_capacity((num_x + num_y + 2) * 50);

    for i in 0..=num_x {
        let x = bounds.min_x + i as f64 * step;
        let _ = write!(
            path,
            "M {:.3} {:.3} L {:.3} {:.3} ",
            x,
            flip_y(bounds.max_y),
            x,
            flip_y(bounds.min_y)
        );
    }

    for j in 0..=num_y {
        let y = flip_y(bounds.min_y + j as f64 * step);
        let _ = write!(
            path,
            "M {:.3} {:.3} L {:.3} {:.3} ",
            bounds.min_x,
            y,
            bounds.max_x,
            y
        );
    }

    finish(path)
}

/// Render the bounding rectangle as a closed SVG path
pub fn render_bounds_to_path(bounds: &BoundingBox) -> String {
    format!(
        "M {:.3} {:.3} H {:.3} V {:.3} H {:.3} Z",
        bounds.min_x,
        flip_y(bounds.max_y),
        bounds.max_x,
        flip_y(bounds.min_y),
        bounds.min_x
    )
}

/// Width and height annotations for the bounding rectangle
pub fn dimension_labels(bounds: &BoundingBox) -> (String, String) {
    (
        format!("Width: {:.2} mm", bounds.width()),
        format!("Height: {:.2} mm", bounds.height()),
    )
}

fn estimate_text_width(text: &str) -> f64 {
    text.chars().count() as f64 * LABEL_FONT_SIZE * LABEL_CHAR_WIDTH
}

/// Compose a standalone SVG document for a toolpath
///
/// Returns `None` for an empty toolpath, which has no extent to show.
pub fn render_svg(toolpath: &Toolpath, options: &RenderOptions) -> Option<String> {
    let bounds = toolpath.bounding_box()?;

    let margin = (bounds.width().max(bounds.height()) * VIEW_MARGIN_FACTOR).max(MIN_VIEW_MARGIN);
    let view = bounds.expanded(margin);
    let label_space = if options.show_bounding_rect {
        LABEL_FONT_SIZE * 2.0
    } else {
        0.0
    };

    let mut svg = String::with_capacity(toolpath.len() * 30 + 512);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.3} {:.3} {:.3} {:.3}">"#,
        view.min_x,
        flip_y(view.max_y),
        view.width(),
        view.height() + label_space
    );

    if options.show_grid {
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            render_grid_to_path(&bounds, options.raster_spacing),
            GRID_STROKE,
            GRID_STROKE_WIDTH
        );
    }

    if options.show_bounding_rect {
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            render_bounds_to_path(&bounds),
            RECT_STROKE,
            RECT_STROKE_WIDTH
        );

        let (width_label, height_label) = dimension_labels(&bounds);
        let label_y = flip_y(bounds.min_y) + LABEL_FONT_SIZE * 1.2;
        let height_x = bounds.min_x + estimate_text_width(&width_label) + LABEL_GAP;
        let _ = writeln!(
            svg,
            r#"  <text x="{:.3}" y="{:.3}" font-family="Arial" font-size="{}">{}</text>"#,
            bounds.min_x, label_y, LABEL_FONT_SIZE, width_label
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{:.3}" y="{:.3}" font-family="Arial" font-size="{}">{}</text>"#,
            height_x, label_y, LABEL_FONT_SIZE, height_label
        );
    }

    let _ = writeln!(
        svg,
        r#"  <path d="{}" fill="none" stroke="{}" stroke-width="1" vector-effect="non-scaling-stroke"/>"#,
        render_toolpath_to_path(toolpath),
        TOOLPATH_STROKE
    );
    svg.push_str("</svg>\n");

    Some(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualizer::path::{reconstruct, ReconstructOptions};

    fn toolpath(gcode: &str) -> Toolpath {
        reconstruct(gcode, &ReconstructOptions::new()).toolpath
    }

    #[test]
    fn test_render_empty_toolpath() {
        let empty = Toolpath::default();
        assert_eq!(render_toolpath_to_path(&empty), "");
        assert!(render_svg(&empty, &RenderOptions::default()).is_none());
    }

    #[test]
    fn test_render_simple_line() {
        let path = render_toolpath_to_path(&toolpath("G0 X0 Y0\nG1 X10 Y0\nG1 X10 Y10\n"));
        assert_eq!(path, "M 0.000 0.000 L 10.000 0.000 L 10.000 -10.000");
    }

    #[test]
    fn test_rapid_move_starts_new_subpath() {
        let path = render_toolpath_to_path(&toolpath(
            "G0 X0 Y0\nG1 X1 Y0\nG0 X5 Y5\nG1 X6 Y5\n",
        ));
        assert_eq!(path.matches('M').count(), 2);
        assert_eq!(path.matches('L').count(), 2);
    }

    #[test]
    fn test_grid_line_count() {
        let bounds = BoundingBox {
            min_x: 0.0,
            max_x: 25.0,
            min_y: 0.0,
            max_y: 10.0,
        };
        let path = render_grid_to_path(&bounds, 10);
        // 3 vertical (0, 10, 20) + 2 horizontal (0, 10)
        assert_eq!(path.matches('M').count(), 5);
        assert!(render_grid_to_path(&bounds, 0).is_empty());
    }

    #[test]
    fn test_raster_validation() {
        let mut options = RenderOptions::default();
        assert!(options.validate().is_ok());
        options.raster_spacing = 0;
        assert!(options.validate().is_err());
        options.raster_spacing = 101;
        assert!(options.validate().is_err());
    }
}
