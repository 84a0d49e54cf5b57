//! Motion command classification

use regex::Regex;
use std::sync::OnceLock;

use super::token::{find_coordinate_tokens, strip_comments, AxisToken};
use gcodescope_core::Axis;

/// Kind of motion a line requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    /// G0 rapid traverse, a non-cutting positioning move
    Rapid,
    /// G1 linear interpolation at feed rate
    Linear,
}

impl std::fmt::Display for MotionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rapid => write!(f, "G0"),
            Self::Linear => write!(f, "G1"),
        }
    }
}

/// A line recognised as a G0/G1 move with its coordinate tokens
#[derive(Debug, Clone, PartialEq)]
pub struct MotionCommand<'a> {
    /// Rapid or linear
    pub kind: MotionKind,
    /// `N` line tag, when present
    pub line_number: Option<u32>,
    /// Coordinate candidates on the line (X, Y and Z)
    pub tokens: Vec<AxisToken<'a>>,
}

impl MotionCommand<'_> {
    /// Last value given for `axis` on this line, falling back to `previous`
    ///
    /// A token whose literal does not parse leaves the previous value in place.
    pub fn resolve(&self, axis: Axis, previous: Option<f64>) -> Option<f64> {
        self.tokens
            .iter()
            .filter(|token| token.axis == axis)
            .fold(previous, |current, token| match token.value {
                Some(value) => Some(value),
                None => {
                    tracing::warn!(
                        "Malformed {} literal '{}', keeping previous value",
                        axis,
                        token.literal()
                    );
                    current
                }
            })
    }
}

fn motion_regex() -> &'static Regex {
    static MOTION_REGEX: OnceLock<Regex> = OnceLock::new();
    MOTION_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^\s*(?:N(\d+)\s*)?G0*([01])(?:[^0-9.]|$)").expect("invalid regex pattern")
    })
}

/// Classify a line as a rapid or linear move
///
/// The line must start (after an optional `N<digits>` tag) with `G0`/`G00` or
/// `G1`/`G01`, in either case, and carry at least one X or Y coordinate.
/// Anything else, including comment-only lines, is irrelevant.
pub fn parse_motion(line: &str) -> Option<MotionCommand<'_>> {
    let code = strip_comments(line);
    let captures = motion_regex().captures(&code)?;

    let kind = match captures.get(2).map(|m| m.as_str()) {
        Some("0") => MotionKind::Rapid,
        Some("1") => MotionKind::Linear,
        _ => return None,
    };

    let tokens = find_coordinate_tokens(line);
    if !tokens
        .iter()
        .any(|token| matches!(token.axis, Axis::X | Axis::Y))
    {
        return None;
    }

    Some(MotionCommand {
        kind,
        line_number: captures.get(1).and_then(|m| m.as_str().parse().ok()),
        tokens,
    })
}

/// Motion kind of a line, if any
pub fn classify_line(line: &str) -> Option<MotionKind> {
    parse_motion(line).map(|command| command.kind)
}
