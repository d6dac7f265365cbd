// SPDX-License-Identifier: Apache-2.0

/// Shared types for the parser and its handlers

// Type alias for the configured integer type
#[cfg(feature = "int8")]
pub type Int = i8;
#[cfg(feature = "int32")]
pub type Int = i32;
#[cfg(feature = "int64")]
pub type Int = i64;

/// Events produced by the JSON parser, in document order.
///
/// String payloads borrow the parser's scratch buffer and are only valid for
/// the duration of the handler call that receives them.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Event<'a> {
    /// Emitted once before any input is read.
    Start,
    /// Emitted once after the input is exhausted and every container is closed.
    End,
    /// The start of an object (e.g., `{`).
    ObjectStart,
    /// The end of an object (e.g., `}`).
    ObjectEnd,
    /// The start of an array (e.g., `[`).
    ArrayStart,
    /// The end of an array (e.g., `]`).
    ArrayEnd,
    /// An object member name (e.g., `"key"` before `:`).
    Name(&'a str),
    /// A string value, taken verbatim between the quotes.
    String(&'a str),
    /// A number without a decimal point (e.g., `42`).
    Integer(Int),
    /// A number with a decimal point (e.g., `3.14` or `.5`).
    Double(f64),
    /// A boolean value (e.g., `true` or `false`).
    Bool(bool),
    /// A null value (e.g., `null`).
    Null,
}

impl Event<'_> {
    /// Returns true for the value variants (string, numbers, booleans and null).
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Event::String(_) | Event::Integer(_) | Event::Double(_) | Event::Bool(_) | Event::Null
        )
    }
}

impl core::fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Event::Start => f.write_str("START"),
            Event::End => f.write_str("END"),
            Event::ObjectStart => f.write_str("OBJECT_START"),
            Event::ObjectEnd => f.write_str("OBJECT_END"),
            Event::ArrayStart => f.write_str("ARRAY_START"),
            Event::ArrayEnd => f.write_str("ARRAY_END"),
            Event::Name(name) => write!(f, "NAME({name})"),
            Event::String(s) => write!(f, "VALUE({s})"),
            Event::Integer(val) => write!(f, "VALUE({val})"),
            Event::Double(val) => write!(f, "VALUE({val})"),
            Event::Bool(b) => write!(f, "VALUE({b})"),
            Event::Null => f.write_str("VALUE"),
        }
    }
}

/// Receives parse events, SAX style.
///
/// The parser calls [`handle_event`](SaxHandler::handle_event) exactly once
/// per lexical unit, synchronously and in document order. Returning an error
/// aborts parsing; the error reaches the caller as
/// [`SaxParseError::Handler`](crate::SaxParseError::Handler).
pub trait SaxHandler {
    /// The error type returned by the handler
    type Error;

    /// Handles a single, complete JSON event.
    fn handle_event(&mut self, event: Event<'_>) -> Result<(), Self::Error>;
}
