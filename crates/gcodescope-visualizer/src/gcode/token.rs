//! Axis token scanning
//!
//! Locates `<letter><number>` tokens in a single G-code line without
//! backtracking. Two scans are offered:
//! - [`find_axis_token`]: first token for one uppercase axis letter (scaling)
//! - [`find_coordinate_tokens`]: every token on the line, in either case
//!   (reconstruction)
//!
//! Both scans reject parameter references such as `X#1` or `X=2` and share
//! one literal grammar, so a token that is malformed for one is malformed for
//! the other. Text inside `( ... )` or after `;` is never searched.

use std::ops::Range;

use gcodescope_core::Axis;

/// Markers that turn an axis word into a parameter reference
const PARAMETER_MARKERS: [char; 2] = ['#', '='];

/// An axis word found in a line
#[derive(Debug, Clone, PartialEq)]
pub struct AxisToken<'a> {
    /// Axis named by the letter
    pub axis: Axis,
    /// Byte range of letter plus literal within the line
    pub span: Range<usize>,
    /// Letter plus literal as written
    pub text: &'a str,
    /// Parsed literal, `None` when it is not a valid number
    pub value: Option<f64>,
}

impl AxisToken<'_> {
    /// The numeric literal without its axis letter
    pub fn literal(&self) -> &str {
        &self.text[1..]
    }
}

/// Byte ranges covered by comments
///
/// `( ... )` spans end at the closing parenthesis (or the end of the line when
/// unterminated); `;` runs to the end of the line.
pub fn comment_spans(line: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;

    for (idx, ch) in line.char_indices() {
        match (open, ch) {
            (None, '(') => open = Some(idx),
            (Some(start), ')') => {
                spans.push(start..idx + 1);
                open = None;
            }
            (None, ';') => {
                spans.push(idx..line.len());
                return spans;
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        spans.push(start..line.len());
    }
    spans
}

/// The line with every comment blanked out
pub fn strip_comments(line: &str) -> String {
    let spans = comment_spans(line);
    if spans.is_empty() {
        return line.to_string();
    }

    let mut code = String::with_capacity(line.len());
    let mut cursor = 0;
    for span in spans {
        code.push_str(&line[cursor..span.start]);
        code.push(' ');
        cursor = span.end;
    }
    code.push_str(&line[cursor..]);
    code
}

/// Length in bytes of a decimal literal starting at `start`
///
/// Accepts an optional sign, digits, an optional point, and digits, with at
/// least one digit overall (`-12.5`, `+3`, `7.`, `.25`).
fn scan_number(bytes: &[u8], start: usize) -> Option<usize> {
    let mut pos = start;
    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let mut digits = pos - int_start;

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let frac_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        digits += pos - frac_start;
    }

    (digits > 0).then_some(pos - start)
}

/// Length of the loose coordinate run (digits, signs, points) at `start`
fn scan_coordinate_run(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+'))
        .count()
}

/// Value of a literal when it is well formed and finite
fn parse_literal(literal: &str) -> Option<f64> {
    if scan_number(literal.as_bytes(), 0) != Some(literal.len()) {
        return None;
    }
    literal.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn in_spans(spans: &[Range<usize>], idx: usize) -> bool {
    spans.iter().any(|span| span.contains(&idx))
}

/// First token for `axis` on the line
///
/// Only the uppercase letter is matched. Occurrences of the letter with no
/// coordinate run after them are skipped. The first run found is returned
/// whole, with `value` set to `None` when it is malformed (`X1.2.3`, `X--4`)
/// or overflows.
pub fn find_axis_token(line: &str, axis: Axis) -> Option<AxisToken<'_>> {
    let letter = axis.letter() as u8;
    scan_tokens(line, move |byte| (byte == letter).then_some(axis)).next()
}

/// Every X/Y/Z token candidate on the line, in order
///
/// Letters are matched in either case. A letter directly followed by a
/// parameter marker (`#`, `=`) is a variable reference and yields nothing; a
/// letter followed by a run of digits, signs and points yields a token whose
/// `value` is `None` if that run is not a valid number.
pub fn find_coordinate_tokens(line: &str) -> Vec<AxisToken<'_>> {
    scan_tokens(line, |byte| Axis::from_letter(byte as char)).collect()
}

fn scan_tokens<'a>(
    line: &'a str,
    axis_of: impl Fn(u8) -> Option<Axis> + 'a,
) -> impl Iterator<Item = AxisToken<'a>> + 'a {
    let bytes = line.as_bytes();
    let comments = comment_spans(line);

    bytes.iter().enumerate().filter_map(move |(idx, &byte)| {
        let axis = axis_of(byte)?;
        if in_spans(&comments, idx) {
            return None;
        }
        if bytes
            .get(idx + 1)
            .is_some_and(|next| PARAMETER_MARKERS.contains(&(*next as char)))
        {
            return None;
        }

        let len = scan_coordinate_run(bytes, idx + 1);
        if len == 0 {
            return None;
        }
        let span = idx..idx + 1 + len;
        let text = &line[span.clone()];
        Some(AxisToken {
            axis,
            span,
            text,
            value: parse_literal(&text[1..]),
        })
    })
}
