//! The normalized diagnostic message record and its builder.

use crate::classify::{PlaceValue, classify_place};
use crate::place::Place;
use serde::Serialize;
use serde_json::Value;
use vtext_location::{Position, stringify_position};

/// Why a message exists: plain text, or an error carrying a stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// A human-supplied message text.
    Text(String),
    /// An error-like value: message text plus a verbatim stack.
    Error {
        /// The error's message text.
        message: String,
        /// The error's stack, copied byte-for-byte (may be empty).
        stack: String,
    },
}

impl Reason {
    /// An error-like reason with an explicit stack, kept byte-for-byte.
    pub fn error(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Reason::Error {
            message: message.into(),
            stack: stack.into(),
        }
    }

    /// Build a reason from a native error.
    ///
    /// The message is the error's `Display` form. The stack is the rendered
    /// `source()` chain, one cause per line; an error with no sources
    /// yields an empty stack.
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        let mut stack = String::new();
        let mut cause = error.source();
        while let Some(err) = cause {
            if !stack.is_empty() {
                stack.push('\n');
            }
            stack.push_str(&err.to_string());
            cause = err.source();
        }
        Reason::Error {
            message: error.to_string(),
            stack,
        }
    }

    fn into_parts(self) -> (String, String) {
        match self {
            Reason::Text(message) => (message, String::new()),
            Reason::Error { message, stack } => (message, stack),
        }
    }
}

impl From<&str> for Reason {
    fn from(text: &str) -> Self {
        Reason::Text(text.to_string())
    }
}

impl From<String> for Reason {
    fn from(text: String) -> Self {
        Reason::Text(text)
    }
}

/// A normalized diagnostic message.
///
/// Produced once by [`MessageBuilder`] and thereafter a plain mutable
/// record: consumers routinely assign [`fatal`](Message::fatal),
/// [`file`](Message::file) and the other well-known fields after
/// construction, and nothing here prevents that.
///
/// `Message` is an error-like value: it implements [`std::error::Error`]
/// and displays as `"{name}: {message}"`, the canonical greppable line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Message text.
    pub message: String,
    /// Equal to `message`; kept as a compatibility alias for consumers of
    /// the historical field name.
    pub reason: String,
    /// Stack of the originating error, byte-for-byte; empty when the
    /// reason was plain text or carried no stack.
    pub stack: String,
    /// Display name: the rendered range string, or the literal `"1:1"`
    /// when no usable coordinates exist.
    pub name: String,
    /// The normalized range. Fully empty when the location is unknown.
    pub position: Position,
    /// Mirror of `position.start.line`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Mirror of `position.start.column`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    /// Namespace of the emitting tool (left half of the origin tag).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Category of the message (right half of the origin tag).
    #[serde(rename = "ruleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    /// Severity, assigned by the caller after construction: `Some(true)`
    /// is blocking, `Some(false)` advisory, `None` undecided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fatal: Option<bool>,
    /// Path of the originating file, assigned by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// The offending source value, assigned by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    /// Acceptable values in place of `actual`, assigned by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Vec<String>>,
    /// Link to documentation for the message, assigned by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Long-form description of the message, assigned by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// Manual impls instead of `#[derive(Error)] #[error("{name}: {message}")]`:
// thiserror would misread the `source` field (a namespace string, not a
// cause) as the error source and fail to compile.
impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

impl std::error::Error for Message {}

impl Message {
    /// Build a message with no place and no origin.
    pub fn new(reason: impl Into<Reason>) -> Self {
        MessageBuilder::new(reason).build()
    }
}

/// Builder for [`Message`].
///
/// Construction never fails: malformed or partial input degrades to empty
/// fields. A diagnostic must not itself crash while being reported.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    reason: Reason,
    place: Option<Place>,
    origin: Option<String>,
}

impl MessageBuilder {
    /// Start a message for `reason`.
    pub fn new(reason: impl Into<Reason>) -> Self {
        Self {
            reason: reason.into(),
            place: None,
            origin: None,
        }
    }

    /// Set the place: a [`Position`], a [`Point`], or any [`Place`].
    pub fn place(mut self, place: impl Into<Place>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Set the place from a loosely shaped value, running the
    /// [classifier](classify_place).
    ///
    /// A string value is an origin tag that landed in the place slot: it
    /// *overwrites* any origin already set and leaves the place absent.
    /// `null` leaves the builder untouched.
    pub fn place_value(mut self, value: &Value) -> Self {
        match classify_place(value) {
            Some(PlaceValue::Origin(origin)) => self.origin = Some(origin),
            Some(PlaceValue::Place(place)) => self.place = Some(place),
            None => {}
        }
        self
    }

    /// Set the origin tag (`"source"`, `"ruleId"`, or `"source:ruleId"`).
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Normalize everything into a [`Message`].
    pub fn build(self) -> Message {
        let (source, rule_id) = match &self.origin {
            Some(origin) => split_origin(origin),
            None => (None, None),
        };

        let position = self
            .place
            .map(|place| place.to_position())
            .unwrap_or_default();

        let rendered = stringify_position(&position);
        let name = if rendered.is_empty() {
            "1:1".to_string()
        } else {
            rendered
        };

        let (message, stack) = self.reason.into_parts();

        Message {
            reason: message.clone(),
            message,
            stack,
            name,
            line: position.start.line,
            column: position.start.column,
            position,
            source,
            rule_id,
            fatal: None,
            file: None,
            actual: None,
            expected: None,
            url: None,
            note: None,
        }
    }
}

/// Split an origin tag on the *first* colon.
///
/// `"delta:echo"` → `(Some("delta"), Some("echo"))`; a tag with no colon
/// is entirely a rule id with no source.
fn split_origin(origin: &str) -> (Option<String>, Option<String>) {
    match origin.split_once(':') {
        Some((source, rule_id)) => (Some(source.to_string()), Some(rule_id.to_string())),
        None => (None, Some(origin.to_string())),
    }
}
