#![warn(missing_docs)]
//! Source locations for vtext diagnostics.
//!
//! This crate is the location vocabulary shared by the vtext diagnostic
//! pipeline: 1-based [`Point`]s, unvalidated [`Position`] ranges, and the
//! canonical range-string renderer used for display names.
//!
//! Coordinates are deliberately permissive. A coordinate can be unknown
//! (`None`), either endpoint of a range can be empty, and no ordering is
//! enforced between `start` and `end` — producers of partial or reversed
//! ranges are common in practice and must not be rejected while reporting
//! a diagnostic.
//!
//! # Quick Start
//!
//! ```rust
//! use vtext_location::{Point, Position, stringify_position};
//!
//! let range = Position::new(Point::new(2, 3), Point::new(2, 5));
//! assert_eq!(stringify_position(&range), "2:3-2:5");
//!
//! // A range with only a start renders in point form.
//! let open = Position::new(Point::new(2, 3), Point::default());
//! assert_eq!(stringify_position(&open), "2:3");
//!
//! // A fully empty range has no usable string form.
//! assert_eq!(stringify_position(&Position::default()), "");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in source text (1-based line and column).
///
/// `None` means the coordinate is unknown. A point with both coordinates
/// unknown is *empty* and has no string form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Line number (1-based), if known.
    pub line: Option<u32>,
    /// Column number (1-based), if known.
    pub column: Option<u32>,
}

impl Point {
    /// Create a point with both coordinates known.
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            line: Some(line),
            column: Some(column),
        }
    }

    /// Whether both coordinates are unknown.
    pub fn is_empty(&self) -> bool {
        self.line.is_none() && self.column.is_none()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match stringify_point(self) {
            Some(s) => f.write_str(&s),
            None => Ok(()),
        }
    }
}

/// A range in source text (start and end point).
///
/// Either endpoint may be empty, and `start` is not required to precede
/// `end`. Construction performs no validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Range start.
    pub start: Point,
    /// Range end.
    pub end: Point,
}

impl Position {
    /// Create a range from two points.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Whether both endpoints are empty.
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify_position(self))
    }
}

/// Render a point as `"line:column"`.
///
/// A missing coordinate on an otherwise known point renders as `1`.
/// Returns `None` for an empty point.
pub fn stringify_point(point: &Point) -> Option<String> {
    if point.is_empty() {
        return None;
    }
    Some(format!(
        "{}:{}",
        point.line.unwrap_or(1),
        point.column.unwrap_or(1)
    ))
}

/// Render a range in its canonical string form.
///
/// - both endpoints usable: `"{start.line}:{start.column}-{end.line}:{end.column}"`
/// - only the start usable: `"{start.line}:{start.column}"`
/// - otherwise (empty range, or an end without a start): `""`
pub fn stringify_position(position: &Position) -> String {
    match (
        stringify_point(&position.start),
        stringify_point(&position.end),
    ) {
        (Some(start), Some(end)) => format!("{start}-{end}"),
        (Some(start), None) => start,
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(2, 3);
        assert_eq!(point.line, Some(2));
        assert_eq!(point.column, Some(3));
        assert!(!point.is_empty());
    }

    #[test]
    fn test_point_default_is_empty() {
        let point = Point::default();
        assert!(point.is_empty());
        assert_eq!(stringify_point(&point), None);
        assert_eq!(point.to_string(), "");
    }

    #[test]
    fn test_stringify_point() {
        assert_eq!(stringify_point(&Point::new(2, 3)).as_deref(), Some("2:3"));
    }

    #[test]
    fn test_stringify_partial_point_substitutes_one() {
        // One known coordinate keeps the point usable.
        let line_only = Point {
            line: Some(4),
            column: None,
        };
        assert_eq!(stringify_point(&line_only).as_deref(), Some("4:1"));

        let column_only = Point {
            line: None,
            column: Some(7),
        };
        assert_eq!(stringify_point(&column_only).as_deref(), Some("1:7"));
    }

    #[test]
    fn test_stringify_full_range() {
        let range = Position::new(Point::new(2, 3), Point::new(2, 5));
        assert_eq!(stringify_position(&range), "2:3-2:5");
        assert_eq!(range.to_string(), "2:3-2:5");
    }

    #[test]
    fn test_stringify_start_only_range() {
        let range = Position::new(Point::new(2, 3), Point::default());
        assert_eq!(stringify_position(&range), "2:3");
    }

    #[test]
    fn test_stringify_end_only_range_is_unusable() {
        let range = Position::new(Point::default(), Point::new(2, 5));
        assert_eq!(stringify_position(&range), "");
    }

    #[test]
    fn test_stringify_empty_range() {
        assert_eq!(stringify_position(&Position::default()), "");
        assert!(Position::default().is_empty());
    }

    #[test]
    fn test_reversed_range_is_not_validated() {
        let range = Position::new(Point::new(9, 9), Point::new(1, 1));
        assert_eq!(stringify_position(&range), "9:9-1:1");
    }
}
