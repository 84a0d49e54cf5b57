//! Human-readable number formatting

/// Shortest decimal form of `value` that keeps a fractional part
///
/// Whole numbers keep one trailing digit (`2.0`, `-1.0`); everything else
/// uses the shortest representation that round-trips (`0.5`, `0.125`).
pub fn decimal_repr(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
