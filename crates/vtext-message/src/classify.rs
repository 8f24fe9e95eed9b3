//! Shape classification for loosely typed place values.
//!
//! Pipelines that decode diagnostics from JSON (or hand positions around as
//! dynamic values) describe a place in one of several shapes: a node object
//! (`{type, position?}`), a range (`{start, end}`), a bare point
//! (`{line, column}`), or a string — which is not a place at all but an
//! origin tag that landed in the place slot. This module turns those shapes
//! into a unified [`Place`] with an ordered predicate chain; the order is
//! the contract, so each step is pinned by tests below.
//!
//! Classification never fails. Malformed or partial shapes degrade to empty
//! coordinates rather than erroring: a diagnostic must not crash while
//! being reported.

use crate::place::Place;
use serde_json::Value;
use vtext_location::{Point, Position};

/// Outcome of classifying the value in the place slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceValue {
    /// The value was a string: an origin tag, not a location.
    Origin(String),
    /// The value resolved to a location descriptor.
    Place(Place),
}

/// Classify a loosely shaped place value.
///
/// First match wins:
///
/// 1. a string is an origin tag (checked before any shape probing);
/// 2. an object with a `position` or `type` key is a node;
/// 3. an object with a `start` or `end` key is a range;
/// 4. an object with a `line` or `column` key is a point;
/// 5. any other non-null value is present but shapeless and resolves to
///    the fully empty range;
/// 6. `null` means no place was given.
pub fn classify_place(value: &Value) -> Option<PlaceValue> {
    match value {
        Value::String(origin) => Some(PlaceValue::Origin(origin.clone())),
        Value::Null => None,
        Value::Object(map) => {
            let place = if map.contains_key("position") || map.contains_key("type") {
                Place::Node(map.get("position").and_then(position_from_value))
            } else if map.contains_key("start") || map.contains_key("end") {
                Place::Span(Position {
                    start: map.get("start").map(point_from_value).unwrap_or_default(),
                    end: map.get("end").map(point_from_value).unwrap_or_default(),
                })
            } else if map.contains_key("line") || map.contains_key("column") {
                Place::Point(point_from_value(value))
            } else {
                Place::Span(Position::default())
            };
            Some(PlaceValue::Place(place))
        }
        _ => Some(PlaceValue::Place(Place::Span(Position::default()))),
    }
}

/// Parse a point shape (`{line?, column?}`).
///
/// Non-numeric or out-of-range coordinates come out as unknown.
pub fn point_from_value(value: &Value) -> Point {
    Point {
        line: coordinate_from_value(value.get("line")),
        column: coordinate_from_value(value.get("column")),
    }
}

/// Parse a range shape (`{start?, end?}`), if the value is an object.
pub fn position_from_value(value: &Value) -> Option<Position> {
    let map = value.as_object()?;
    Some(Position {
        start: map.get("start").map(point_from_value).unwrap_or_default(),
        end: map.get("end").map(point_from_value).unwrap_or_default(),
    })
}

fn coordinate_from_value(value: Option<&Value>) -> Option<u32> {
    value
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_classifies_as_origin() {
        assert_eq!(
            classify_place(&json!("delta:echo")),
            Some(PlaceValue::Origin("delta:echo".to_string()))
        );
    }

    #[test]
    fn test_string_wins_over_everything() {
        // Even a string that looks like nothing useful is still an origin.
        assert_eq!(
            classify_place(&json!("")),
            Some(PlaceValue::Origin(String::new()))
        );
    }

    #[test]
    fn test_node_with_position() {
        let value = json!({
            "type": "emphasis",
            "position": {
                "start": { "line": 2, "column": 3 },
                "end": { "line": 2, "column": 5 }
            }
        });
        let expected = Position::new(Point::new(2, 3), Point::new(2, 5));
        assert_eq!(
            classify_place(&value),
            Some(PlaceValue::Place(Place::Node(Some(expected))))
        );
    }

    #[test]
    fn test_node_without_position() {
        assert_eq!(
            classify_place(&json!({ "type": "text" })),
            Some(PlaceValue::Place(Place::Node(None)))
        );
    }

    #[test]
    fn test_node_wins_over_range_keys() {
        // `type`/`position` are probed before `start`/`end`; a node that
        // also carries stray range keys still classifies as a node.
        let value = json!({
            "type": "text",
            "start": { "line": 9, "column": 9 }
        });
        assert_eq!(
            classify_place(&value),
            Some(PlaceValue::Place(Place::Node(None)))
        );
    }

    #[test]
    fn test_range_shape() {
        let value = json!({
            "start": { "line": 2, "column": 3 },
            "end": { "line": 2, "column": 5 }
        });
        let expected = Position::new(Point::new(2, 3), Point::new(2, 5));
        assert_eq!(
            classify_place(&value),
            Some(PlaceValue::Place(Place::Span(expected)))
        );
    }

    #[test]
    fn test_range_with_missing_end() {
        let value = json!({ "start": { "line": 2, "column": 3 } });
        match classify_place(&value) {
            Some(PlaceValue::Place(Place::Span(position))) => {
                assert_eq!(position.start, Point::new(2, 3));
                assert!(position.end.is_empty());
            }
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn test_point_shape() {
        assert_eq!(
            classify_place(&json!({ "line": 2, "column": 3 })),
            Some(PlaceValue::Place(Place::Point(Point::new(2, 3))))
        );
    }

    #[test]
    fn test_point_with_partial_coordinates() {
        match classify_place(&json!({ "line": 4 })) {
            Some(PlaceValue::Place(Place::Point(point))) => {
                assert_eq!(point.line, Some(4));
                assert_eq!(point.column, None);
            }
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn test_shapeless_object_is_present_but_empty() {
        assert_eq!(
            classify_place(&json!({})),
            Some(PlaceValue::Place(Place::Span(Position::default())))
        );
    }

    #[test]
    fn test_non_object_values_are_present_but_empty() {
        for value in [json!(7), json!(true), json!([1, 2])] {
            assert_eq!(
                classify_place(&value),
                Some(PlaceValue::Place(Place::Span(Position::default()))),
                "value: {}",
                value
            );
        }
    }

    #[test]
    fn test_null_is_absent() {
        assert_eq!(classify_place(&Value::Null), None);
    }

    #[test]
    fn test_malformed_coordinates_degrade() {
        let point = point_from_value(&json!({ "line": "two", "column": -1 }));
        assert!(point.is_empty());

        let huge = point_from_value(&json!({ "line": 4294967296u64, "column": 3 }));
        assert_eq!(huge.line, None);
        assert_eq!(huge.column, Some(3));
    }
}
