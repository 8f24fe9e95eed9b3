#![warn(missing_docs)]
//! Normalized diagnostic messages for text-processing pipelines.
//!
//! # Overview
//!
//! `vtext-message` is the diagnostic record used by parsers, compilers and
//! linters for structured text (markdown/markup ASTs) to report warnings
//! and errors with precise source-location context. Given a reason (text
//! or a native error), an optional place (a tree node, a range, or a
//! point) and an optional origin tag (`"source:ruleId"`), it produces one
//! record with normalized fields and a stable, greppable display form
//! `"{name}: {message}"`.
//!
//! # Core Pieces
//!
//! - [`MessageBuilder`] — the pure constructor; never fails, malformed
//!   input degrades to empty fields
//! - [`Place`] — tagged union over {node, range, point} descriptors
//! - [`classify_place`] — the ordered classifier for loosely shaped
//!   (JSON) place values
//! - [`Message`] — the output record; implements [`std::error::Error`]
//!   and stays caller-mutable after construction
//!
//! Location vocabulary ([`Point`], [`Position`], the range stringifier)
//! comes from the `vtext-location` crate and is re-exported here.
//!
//! # Quick Start
//!
//! ```rust
//! use vtext_message::{MessageBuilder, Point, Position};
//!
//! let message = MessageBuilder::new("`code` must be lowercase")
//!     .place(Position::new(Point::new(2, 3), Point::new(2, 5)))
//!     .origin("example:lowercase")
//!     .build();
//!
//! assert_eq!(message.to_string(), "2:3-2:5: `code` must be lowercase");
//! assert_eq!(message.source.as_deref(), Some("example"));
//! assert_eq!(message.rule_id.as_deref(), Some("lowercase"));
//!
//! // Severity is decided by the consumer, after construction.
//! let mut message = message;
//! message.fatal = Some(true);
//! assert_eq!(message.fatal, Some(true));
//! ```
//!
//! Loosely shaped places (for example straight out of decoded JSON) go
//! through the classifier:
//!
//! ```rust
//! use serde_json::json;
//! use vtext_message::MessageBuilder;
//!
//! let node = json!({
//!     "type": "emphasis",
//!     "position": {
//!         "start": { "line": 2, "column": 3 },
//!         "end": { "line": 2, "column": 5 }
//!     }
//! });
//! let message = MessageBuilder::new("unexpected emphasis")
//!     .place_value(&node)
//!     .build();
//! assert_eq!(message.name, "2:3-2:5");
//! ```

pub mod classify;
pub mod message;
pub mod place;

pub use classify::{PlaceValue, classify_place, point_from_value, position_from_value};
pub use message::{Message, MessageBuilder, Reason};
pub use place::{NodeLike, Place};
pub use vtext_location::{Point, Position, stringify_point, stringify_position};
