//! # GCodeScope Core
//!
//! Core types, constants, and errors shared by the GCodeScope crates.
//! Provides the axis model, per-axis scale factors, and the error type for
//! invalid run inputs.

pub mod axis;
pub mod constants;
pub mod error;
pub mod format;

pub use axis::{Axis, ScaleFactors};
pub use error::GcodeError;
pub use format::decimal_repr;
