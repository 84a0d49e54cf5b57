//! Axis token scanning in both modes

use gcodescope_core::Axis;
use gcodescope_visualizer::{find_axis_token, find_coordinate_tokens};

#[test]
fn test_first_match_returns_position_text_and_value() {
    let token = find_axis_token("G1 X-12.5 Y3", Axis::X).unwrap();
    assert_eq!(token.span, 3..9);
    assert_eq!(token.text, "X-12.5");
    assert_eq!(token.literal(), "-12.5");
    assert_eq!(token.value, Some(-12.5));
}

#[test]
fn test_first_match_accepts_loose_decimal_shapes() {
    assert_eq!(find_axis_token("G1 X+3", Axis::X).unwrap().value, Some(3.0));
    assert_eq!(find_axis_token("G1 X7.", Axis::X).unwrap().text, "X7.");
    assert_eq!(find_axis_token("G1 X.25", Axis::X).unwrap().value, Some(0.25));
}

#[test]
fn test_first_match_only() {
    let token = find_axis_token("G1 X1 X2", Axis::X).unwrap();
    assert_eq!(token.value, Some(1.0));
}

#[test]
fn test_first_match_skips_non_numeric_occurrences() {
    let token = find_axis_token("G1 X#5 X4", Axis::X).unwrap();
    assert_eq!(token.text, "X4");
    assert!(find_axis_token("G1 X#5", Axis::X).is_none());
    assert!(find_axis_token("M3 S1000", Axis::Y).is_none());
}

#[test]
fn test_first_match_ignores_comments() {
    assert!(find_axis_token("G1 (X10) F100", Axis::X).is_none());
    assert!(find_axis_token("G1 F100 ; go to X10", Axis::X).is_none());
    let token = find_axis_token("G1 (note) X10", Axis::X).unwrap();
    assert_eq!(token.value, Some(10.0));
}

#[test]
fn test_all_matches_in_order() {
    let tokens = find_coordinate_tokens("G1 X10 Y-5 Z2");
    let axes: Vec<Axis> = tokens.iter().map(|t| t.axis).collect();
    assert_eq!(axes, vec![Axis::X, Axis::Y, Axis::Z]);
    assert_eq!(tokens[1].value, Some(-5.0));
}

#[test]
fn test_all_matches_reject_parameter_references() {
    let tokens = find_coordinate_tokens("G1 X#3 Y=2 X5");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].axis, Axis::X);
    assert_eq!(tokens[0].value, Some(5.0));
}

#[test]
fn test_all_matches_keep_malformed_literals_unparsed() {
    let tokens = find_coordinate_tokens("G1 X1.2.3 Y--4");
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.value.is_none()));
}

#[test]
fn test_all_matches_accept_lowercase_letters() {
    let tokens = find_coordinate_tokens("g1 x4 y5");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].axis, Axis::X);
}
