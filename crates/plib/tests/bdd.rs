//! BDD-style scenario tests for the `Point` value type.
//!
//! Each test follows the pattern:
//! `given_<precondition>_when_<action>_then_<expected_result>`

use plib::{Point, PointError};

// ===========================================================================
// Helpers
// ===========================================================================

fn origin_and_two_two() -> (Point, Point) {
    (Point::new(0, 0), Point::new(2, 2))
}

// ===========================================================================
// Construction
// ===========================================================================

#[test]
fn given_integers_when_constructed_then_coordinates_are_kept() {
    let p = Point::new(1, 2);
    assert!(p.x() == 1 && p.y() == 2);
}

#[test]
fn given_fractional_values_when_constructed_then_type_error_is_returned() {
    let err = Point::from_f64(1.5, 1.5).unwrap_err();
    assert!(matches!(err, PointError::Type { .. }));
}

#[test]
fn given_fractional_tuple_when_converted_then_type_error_is_returned() {
    let err = Point::try_from((0.0, 0.5)).unwrap_err();
    assert_eq!(err.kind(), "type");
}

// ===========================================================================
// Arithmetic
// ===========================================================================

#[test]
fn given_two_points_when_added_then_result_is_componentwise_sum() {
    let (p1, p2) = origin_and_two_two();
    assert_eq!(p2 + p1, Point::new(2, 2));
}

#[test]
fn given_origin_when_accumulating_then_receiver_is_updated_in_place() {
    let (mut p1, p2) = origin_and_two_two();
    p1 += p2;
    assert_eq!(p1, Point::new(2, 2));
    assert_eq!(p2, Point::new(2, 2));
}

#[test]
fn given_two_points_when_subtracted_both_ways_then_results_are_negations() {
    let (p1, p2) = origin_and_two_two();
    assert_eq!(p2 - p1, Point::new(2, 2));
    assert_eq!(p1 - p2, -Point::new(2, 2));
}

// ===========================================================================
// Equality
// ===========================================================================

#[test]
fn given_a_string_when_compared_then_not_supported_is_returned() {
    let p = Point::new(1, 2);
    let result = p.try_eq(&"not a point");
    assert!(matches!(result, Err(PointError::NotSupported { .. })));
}

#[test]
fn given_a_number_when_compared_then_not_supported_is_returned_not_false() {
    let p = Point::new(0, 0);
    assert!(p.try_eq(&0i64).is_err());
}

// ===========================================================================
// Distance
// ===========================================================================

#[test]
fn given_points_on_x_axis_when_distance_measured_then_result_is_exact() {
    assert_eq!(Point::new(0, 0).distance_to(&Point::new(2, 0)), 2.0);
}

#[test]
fn given_points_along_each_axis_when_distance_measured_then_result_is_close() {
    let cases = [
        (Point::new(0, 0), Point::new(0, 10), 10.0),
        (Point::new(0, 0), Point::new(10, 0), 10.0),
        (Point::new(0, 0), Point::new(1, 1), 1.414),
    ];
    for (p1, p2, expected) in cases {
        let got = p1.distance_to(&p2);
        assert!(
            (got - expected).abs() <= expected * 0.001,
            "{p1} -> {p2}: got {got}, expected ~{expected}"
        );
    }
}

// ===========================================================================
// Text representations
// ===========================================================================

#[test]
fn given_a_point_when_displayed_then_canonical_text_is_produced() {
    assert_eq!(Point::new(3, 4).to_string(), "Point(3, 4)");
}

#[test]
fn given_a_point_when_debug_formatted_then_text_equals_display() {
    assert_eq!(format!("{:?}", Point::new(3, 4)), "Point(3, 4)");
}

#[test]
fn given_origin_and_off_origin_when_checked_then_only_origin_matches() {
    assert!(Point::new(0, 0).is_origin());
    assert!(!Point::new(1, 1).is_origin());
}

// ===========================================================================
// JSON
// ===========================================================================

#[test]
fn given_a_point_when_serialized_then_bytes_match_contract() {
    assert_eq!(Point::new(3, 4).to_json(), r#"{"x": 3, "y": 4}"#);
}

#[test]
fn given_contract_json_when_parsed_then_point_is_recovered() {
    let p = Point::from_json(r#"{"x": 3, "y": 4}"#).unwrap();
    assert!(p.x() == 3 && p.y() == 4);
    assert_eq!(p, Point::new(3, 4));
}

#[test]
fn given_missing_key_when_parsed_then_parse_error_is_returned() {
    let err = Point::from_json(r#"{"x": 3}"#).unwrap_err();
    assert!(matches!(err, PointError::Parse(_)));
}

#[test]
fn given_non_json_when_parsed_then_parse_error_is_returned() {
    for text in ["", "Point(3, 4)", "[3, 4]", "{\"x\": 3, \"y\": 4"] {
        let err = Point::from_json(text).unwrap_err();
        assert_eq!(err.kind(), "parse", "input {text:?}");
    }
}

#[test]
fn given_non_integer_values_when_parsed_then_parse_error_is_returned() {
    for text in [
        r#"{"x": 1.5, "y": 4}"#,
        r#"{"x": "3", "y": 4}"#,
        r#"{"x": true, "y": 4}"#,
        r#"{"x": 3, "y": null}"#,
    ] {
        let err = Point::from_json(text).unwrap_err();
        assert_eq!(err.kind(), "parse", "input {text}");
    }
}

#[test]
fn given_a_writer_when_json_streamed_then_output_matches_to_json() {
    let p = Point::new(-12, 7);
    let mut buf = Vec::new();
    p.write_json(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), p.to_json());
}
