//! Location descriptors.
//!
//! A diagnostic can be located by a syntax-tree node, an explicit range, or
//! a single point. [`Place`] is the tagged union over those three shapes;
//! every variant resolves to a working [`Position`] through
//! [`Place::to_position`].

use vtext_location::{Point, Position};

/// Minimal view of a syntax-tree node: whether it carries a source range.
///
/// Implement this for your own AST node types so they can be handed to
/// [`MessageBuilder::place`](crate::MessageBuilder::place) via
/// [`Place::from_node`]. A node without positional info is still a valid
/// place; it resolves to the fully empty range.
pub trait NodeLike {
    /// The source range the node covers, if it carries one.
    fn position(&self) -> Option<Position>;
}

/// A location descriptor: a node, a range, or a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    /// A syntax-tree node, adopting its range when it carries one.
    Node(Option<Position>),
    /// An explicit start/end range.
    Span(Position),
    /// A single point, which becomes the start of an open-ended range.
    Point(Point),
}

impl Place {
    /// Build a place from any [`NodeLike`] value.
    pub fn from_node(node: &impl NodeLike) -> Self {
        Place::Node(node.position())
    }

    /// Resolve the descriptor to its working range.
    ///
    /// Unknown coordinates come out as empty points; a node without a
    /// range resolves to the fully empty range.
    pub fn to_position(&self) -> Position {
        match *self {
            Place::Node(Some(position)) => position,
            Place::Node(None) => Position::default(),
            Place::Span(position) => position,
            Place::Point(point) => Position::new(point, Point::default()),
        }
    }
}

impl From<Position> for Place {
    fn from(position: Position) -> Self {
        Place::Span(position)
    }
}

impl From<Point> for Place {
    fn from(point: Point) -> Self {
        Place::Point(point)
    }
}
