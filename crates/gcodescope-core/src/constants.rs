//! Shared constants.

/// Digits written after the decimal point for every scaled axis value.
pub const SCALED_VALUE_PRECISION: usize = 4;

/// Default grid raster spacing in millimetres.
pub const DEFAULT_RASTER_SPACING: u32 = 10;

/// Smallest accepted raster spacing.
pub const MIN_RASTER_SPACING: u32 = 1;

/// Largest accepted raster spacing.
pub const MAX_RASTER_SPACING: u32 = 100;

/// Maximum number of moves recorded in a diagnostic trace.
pub const DEFAULT_TRACE_LIMIT: usize = 20;

/// Marker that replaces `.` in scale factors embedded in file names.
pub const FILENAME_DECIMAL_MARKER: char = 'c';
