//! Command implementations for the `gcodescope` binary

pub mod scale;
pub mod view;

pub use scale::{scale_file, ScaleArgs};
pub use view::{view_file, ViewArgs, ViewSummary};
