//! Error handling for GCodeScope
//!
//! [`GcodeError`] covers invalid inputs to a run: scale factors, raster
//! settings and axis letters. The interpretation core itself is fail-soft and
//! never returns it; it belongs to configuration and the command boundary,
//! where file errors are reported through `anyhow`.

use thiserror::Error;

/// G-Code error type
///
/// Represents errors related to the inputs of a scale or reconstruct run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcodeError {
    /// Scale factor is not a finite number
    #[error("Invalid scale factor for axis {axis}: {value}")]
    InvalidScaleFactor {
        /// The axis letter.
        axis: char,
        /// The rejected factor.
        value: f64,
    },

    /// Scale factor set cannot be inverted
    #[error("Scale factor for axis {axis} is zero and cannot be inverted")]
    NonInvertibleScale {
        /// The axis letter with a zero factor.
        axis: char,
    },

    /// Raster spacing outside the accepted range
    #[error("Invalid raster spacing {spacing}: must be between {min} and {max}")]
    InvalidRasterSpacing {
        /// The rejected spacing.
        spacing: u32,
        /// Smallest accepted spacing.
        min: u32,
        /// Largest accepted spacing.
        max: u32,
    },

    /// Unknown axis letter
    #[error("Unknown axis '{letter}'")]
    UnknownAxis {
        /// The rejected letter.
        letter: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcode_error_display() {
        let err = GcodeError::InvalidScaleFactor {
            axis: 'X',
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "Invalid scale factor for axis X: NaN");

        let err = GcodeError::NonInvertibleScale { axis: 'Z' };
        assert_eq!(
            err.to_string(),
            "Scale factor for axis Z is zero and cannot be inverted"
        );

        let err = GcodeError::InvalidRasterSpacing {
            spacing: 0,
            min: 1,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "Invalid raster spacing 0: must be between 1 and 100"
        );
    }
}
