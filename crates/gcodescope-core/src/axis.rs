//! Axis model and per-axis scale factors

use serde::{Deserialize, Serialize};

use crate::error::GcodeError;

/// A tracked machine axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All tracked axes, in the order they are processed
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Uppercase letter identifying this axis in G-code
    pub fn letter(self) -> char {
        match self {
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }

    /// Resolve an axis from its letter, ignoring case
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'X' => Some(Self::X),
            'Y' => Some(Self::Y),
            'Z' => Some(Self::Z),
            _ => None,
        }
    }
}

impl TryFrom<char> for Axis {
    type Error = GcodeError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::from_letter(letter).ok_or(GcodeError::UnknownAxis { letter })
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One multiplier per tracked axis
///
/// Every axis always has a factor; an unspecified axis defaults to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self::identity()
    }
}

impl ScaleFactors {
    /// Create a factor set from explicit per-axis values
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Factor set that leaves every axis unchanged
    pub fn identity() -> Self {
        Self::uniform(1.0)
    }

    /// Same factor on every axis
    pub fn uniform(factor: f64) -> Self {
        Self::new(factor, factor, factor)
    }

    /// Factor for a single axis
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Replace the factor for a single axis
    pub fn set(&mut self, axis: Axis, factor: f64) -> &mut Self {
        match axis {
            Axis::X => self.x = factor,
            Axis::Y => self.y = factor,
            Axis::Z => self.z = factor,
        }
        self
    }

    /// Iterate `(axis, factor)` pairs in processing order
    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }

    /// True when every factor is exactly 1.0
    pub fn is_identity(&self) -> bool {
        self.iter().all(|(_, factor)| factor == 1.0)
    }

    /// Check that every factor is a finite number
    pub fn validate(&self) -> Result<(), GcodeError> {
        for (axis, value) in self.iter() {
            if !value.is_finite() {
                return Err(GcodeError::InvalidScaleFactor {
                    axis: axis.letter(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Reciprocal factor set, undoing a previous scale
    pub fn invert(&self) -> Result<Self, GcodeError> {
        let mut inverted = *self;
        for (axis, value) in self.iter() {
            if value == 0.0 {
                return Err(GcodeError::NonInvertibleScale {
                    axis: axis.letter(),
                });
            }
            inverted.set(axis, 1.0 / value);
        }
        Ok(inverted)
    }
}
