//! Diagnostic trace of drawn moves

use std::fmt;

use gcodescope_core::decimal_repr;

use super::path::Point2D;

/// One linear move that produced a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceEntry {
    /// 1-based line in the source document
    pub line: usize,
    /// Position before the move
    pub original: Point2D,
    /// Position parsed from the line
    pub parsed: Point2D,
}

impl TraceEntry {
    pub fn new(line: usize, original: Point2D, parsed: Point2D) -> Self {
        Self {
            line,
            original,
            parsed,
        }
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Original: ({}, {}) Parsed: ({}, {})",
            decimal_repr(self.original.x),
            decimal_repr(self.original.y),
            decimal_repr(self.parsed.x),
            decimal_repr(self.parsed.y)
        )
    }
}

/// Capped record of drawn moves
///
/// Moves past the cap are counted but not stored.
#[derive(Debug, Clone, Default)]
pub struct MotionTrace {
    limit: usize,
    entries: Vec<TraceEntry>,
    seen: usize,
}

impl MotionTrace {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            entries: Vec::with_capacity(limit.min(64)),
            seen: 0,
        }
    }

    /// Record a move; returns false once the cap has been reached
    pub fn record(&mut self, entry: TraceEntry) -> bool {
        self.seen += 1;
        if self.entries.len() >= self.limit {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of moves offered to the trace, stored or not
    pub fn seen(&self) -> usize {
        self.seen
    }

    pub fn is_truncated(&self) -> bool {
        self.seen > self.entries.len()
    }

    /// One line per stored entry, newline-terminated
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}\n", entry))
            .collect()
    }
}
