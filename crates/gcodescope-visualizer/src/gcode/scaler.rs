//! Axis scaling of G-code documents
//!
//! Multiplies the first X, Y and Z literal of every line by a per-axis factor
//! and writes the product back with fixed precision. All other text, including
//! line terminators, is left untouched.

use gcodescope_core::constants::SCALED_VALUE_PRECISION;
use gcodescope_core::{Axis, ScaleFactors};
use tracing::{debug, trace, warn};

use super::token::find_axis_token;

/// Rewrites axis values by per-axis factors
#[derive(Debug, Clone, Copy)]
pub struct AxisScaler {
    factors: ScaleFactors,
}

impl AxisScaler {
    /// Create a scaler for the given factor set
    pub fn new(factors: ScaleFactors) -> Self {
        Self { factors }
    }

    /// Scale a single line
    ///
    /// Axes are substituted one after another against the progressively
    /// rewritten line. Only the first token of each axis is touched.
    pub fn scale_line(&self, line: &str) -> String {
        let mut scaled = line.to_string();

        for axis in Axis::ALL {
            let Some(token) = find_axis_token(&scaled, axis) else {
                continue;
            };
            let Some(value) = token.value else {
                warn!(
                    "Skipping unparsable {} literal '{}'",
                    axis,
                    token.literal()
                );
                continue;
            };

            let replacement = format_axis_value(axis, value * self.factors.get(axis));
            trace!("{} -> {}", token.text, replacement);
            let span = token.span.clone();
            scaled.replace_range(span, &replacement);
        }

        scaled
    }

    /// Scale every line of a document, preserving order, count and terminators
    pub fn scale_document(&self, document: &str) -> String {
        let mut output = String::with_capacity(document.len() + document.len() / 4);
        let mut line_count = 0usize;

        for line in document.split_inclusive('\n') {
            output.push_str(&self.scale_line(line));
            line_count += 1;
        }

        debug!(
            "Scaled {} lines with factors x={} y={} z={}",
            line_count, self.factors.x, self.factors.y, self.factors.z
        );
        output
    }
}

impl Default for AxisScaler {
    fn default() -> Self {
        Self::new(ScaleFactors::default())
    }
}

/// Axis letter followed by the value in fixed-point notation
pub fn format_axis_value(axis: Axis, value: f64) -> String {
    format!("{}{:.*}", axis.letter(), SCALED_VALUE_PRECISION, value)
}

/// Scale a whole document with the given factors
pub fn scale_document(document: &str, factors: &ScaleFactors) -> String {
    AxisScaler::new(*factors).scale_document(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_axis_value() {
        assert_eq!(format_axis_value(Axis::X, 20.0), "X20.0000");
        assert_eq!(format_axis_value(Axis::Y, -2.5), "Y-2.5000");
        assert_eq!(format_axis_value(Axis::Z, 1.0 / 3.0), "Z0.3333");
    }

    #[test]
    fn test_scale_line_rewrites_each_axis_once() {
        let scaler = AxisScaler::new(ScaleFactors::new(2.0, 3.0, 4.0));
        assert_eq!(
            scaler.scale_line("G1 X1 Y1 Z1 X1\n"),
            "G1 X2.0000 Y3.0000 Z4.0000 X1\n"
        );
    }

    #[test]
    fn test_scale_line_leaves_malformed_literal_untouched() {
        let scaler = AxisScaler::new(ScaleFactors::new(2.0, 1.0, 1.0));
        assert_eq!(scaler.scale_line("G1 X1.2.3 Y4\n"), "G1 X1.2.3 Y4.0000\n");
        assert_eq!(scaler.scale_line("G1 X--4 Y4\n"), "G1 X--4 Y4.0000\n");
    }

    #[test]
    fn test_scale_line_leaves_overflowing_literal_untouched() {
        let scaler = AxisScaler::new(ScaleFactors::uniform(2.0));
        let line = format!("G1 X{} Y1", "9".repeat(400));
        let scaled = scaler.scale_line(&line);
        assert!(scaled.starts_with(&format!("G1 X{} ", "9".repeat(400))));
        assert!(scaled.ends_with("Y2.0000"));
        assert!(!scaled.contains("inf"));
    }

    #[test]
    fn test_scale_line_without_tokens_is_unchanged() {
        let scaler = AxisScaler::new(ScaleFactors::uniform(5.0));
        assert_eq!(scaler.scale_line("M3 S1000\r\n"), "M3 S1000\r\n");
    }
}
