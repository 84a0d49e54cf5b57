//! G-Code interpretation
//!
//! This module provides:
//! - Axis token scanning (first match and all matches per line)
//! - Motion command classification (G0 / G1)
//! - Axis scaling of whole documents

pub mod command;
pub mod scaler;
pub mod token;

pub use command::*;
pub use scaler::*;
pub use token::*;
