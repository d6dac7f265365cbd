// SPDX-License-Identifier: Apache-2.0

//! A SAX-style JSON parser.
//!
//! [`SaxParser`] reads its input one character at a time and reports each
//! structural element and value to a [`SaxHandler`] as soon as it is
//! recognised. No tree is built.

use alloc::string::String;

use crate::context::{Context, ContextStack};
use crate::cursor::PushbackCursor;
use crate::number_parser::{lex_number, Number};
use crate::scanner::{lex_literal, lex_string};
use crate::{ChunkReader, Event, ParseError, Reader, SaxHandler};

/// A SAX-style JSON parser.
///
/// The parser borrows its handler for its whole lifetime, so events already
/// delivered before a failure remain visible to the caller afterwards.
///
/// # Generic Parameters
///
/// * `'h` - Lifetime of the borrowed handler
/// * `R` - The byte source, implementing [`Reader`]
/// * `H` - The event handler type that implements [`SaxHandler`]
pub struct SaxParser<'h, R, H> {
    cursor: PushbackCursor<R>,
    handler: &'h mut H,
}

impl<'h, 'a, H: SaxHandler> SaxParser<'h, ChunkReader<'a>, H> {
    /// Creates a parser over in-memory JSON text.
    pub fn from_str(input: &'a str, handler: &'h mut H) -> Self {
        Self::from_slice(input.as_bytes(), handler)
    }

    /// Creates a parser over UTF-8 encoded bytes.
    pub fn from_slice(input: &'a [u8], handler: &'h mut H) -> Self {
        Self::new(ChunkReader::full_slice(input), handler)
    }
}

impl<'h, R: Reader, H: SaxHandler> SaxParser<'h, R, H> {
    /// Creates a parser reading from `reader`.
    pub fn new(reader: R, handler: &'h mut H) -> Self {
        Self {
            cursor: PushbackCursor::new(reader),
            handler,
        }
    }

    /// Parses the whole input, reporting events to the handler.
    ///
    /// `Start` is reported before the first character is read and `End` only
    /// after the input is exhausted with every object and array closed. The
    /// first error stops parsing; nothing is reported after it.
    pub fn parse(&mut self) -> Result<(), SaxParseError<H::Error>> {
        let mut context = ContextStack::new();
        let mut scratch = String::new();
        // A member name was the last token; another name may not follow
        let mut name_pending = false;

        self.emit(Event::Start)?;

        while let Some(c) = self.cursor.next_char()? {
            let after_name = core::mem::take(&mut name_pending);
            match c {
                '{' => {
                    if context.top() == Context::ObjectExpectKey {
                        return Err(self.unexpected(c).into());
                    }
                    context.push(Context::ObjectExpectKey);
                    self.emit(Event::ObjectStart)?;
                }
                '}' => {
                    match context.top() {
                        Context::ObjectExpectKey => {
                            context.pop();
                        }
                        Context::ObjectAfterColon => {
                            context.pop();
                            // A colon inside an array or at top level has no object to close
                            if context.top() != Context::ObjectExpectKey {
                                return Err(self.unexpected(c).into());
                            }
                            context.pop();
                        }
                        Context::Array | Context::TopLevel => {
                            return Err(self.unexpected(c).into());
                        }
                    }
                    self.emit(Event::ObjectEnd)?;
                }
                '[' => {
                    context.push(Context::Array);
                    self.emit(Event::ArrayStart)?;
                }
                ']' => {
                    if context.top() != Context::Array {
                        return Err(self.unexpected(c).into());
                    }
                    self.emit(Event::ArrayEnd)?;
                    context.pop();
                }
                't' | 'f' | 'n' => {
                    if context.top() == Context::ObjectExpectKey {
                        return Err(self.unexpected(c).into());
                    }
                    let (rest, event) = match c {
                        't' => ("rue", Event::Bool(true)),
                        'f' => ("alse", Event::Bool(false)),
                        _ => ("ull", Event::Null),
                    };
                    lex_literal(&mut self.cursor, rest)?;
                    self.emit(event)?;
                }
                '0'..='9' | '.' => {
                    if context.top() == Context::ObjectExpectKey {
                        return Err(self.unexpected(c).into());
                    }
                    self.cursor.unread(c)?;
                    let event = match lex_number(&mut self.cursor, &mut scratch)? {
                        Number::Integer(val) => Event::Integer(val),
                        Number::Double(val) => Event::Double(val),
                    };
                    self.emit(event)?;
                }
                '"' => {
                    if after_name {
                        return Err(self.unexpected(c).into());
                    }
                    lex_string(&mut self.cursor, &mut scratch)?;
                    if context.top() == Context::ObjectExpectKey {
                        self.emit(Event::Name(&scratch))?;
                        name_pending = true;
                    } else {
                        self.emit(Event::String(&scratch))?;
                    }
                }
                ':' => {
                    if context.top() == Context::ObjectAfterColon {
                        return Err(self.unexpected(c).into());
                    }
                    context.push(Context::ObjectAfterColon);
                }
                ',' => match context.top() {
                    Context::Array => {}
                    Context::ObjectAfterColon => {
                        context.pop();
                    }
                    Context::ObjectExpectKey | Context::TopLevel => {
                        return Err(self.unexpected(c).into());
                    }
                },
                c if c.is_whitespace() => name_pending = after_name,
                _ => return Err(self.unexpected(c).into()),
            }
        }

        if !context.is_complete() {
            log::debug!(
                "input ended with {} unclosed context(s), innermost {:?}",
                context.depth(),
                context.top()
            );
            return Err(ParseError::EndOfData.into());
        }

        self.emit(Event::End)
    }

    fn emit(&mut self, event: Event<'_>) -> Result<(), SaxParseError<H::Error>> {
        log::trace!("emit {event}");
        self.handler
            .handle_event(event)
            .map_err(SaxParseError::Handler)
    }

    /// Builds the error for the character just consumed.
    fn unexpected(&self, ch: char) -> ParseError {
        let offset = self.cursor.offset().saturating_sub(1);
        log::debug!("unexpected {ch:?} at offset {offset}");
        ParseError::UnexpectedCharacter { ch, offset }
    }
}

/// Parses `input`, reporting events to `handler`.
///
/// ```rust
/// use saxjson::{parse_str, Event, SaxHandler};
///
/// struct Names(Vec<String>);
/// impl SaxHandler for Names {
///     type Error = core::convert::Infallible;
///     fn handle_event(&mut self, event: Event<'_>) -> Result<(), Self::Error> {
///         if let Event::Name(name) = event {
///             self.0.push(name.to_owned());
///         }
///         Ok(())
///     }
/// }
///
/// let mut names = Names(Vec::new());
/// parse_str(r#"{ "id": 7, "tags": ["a"] }"#, &mut names).unwrap();
/// assert_eq!(names.0, ["id", "tags"]);
/// ```
pub fn parse_str<H: SaxHandler>(
    input: &str,
    handler: &mut H,
) -> Result<(), SaxParseError<H::Error>> {
    SaxParser::from_str(input, handler).parse()
}

/// An error that can occur during SAX parsing.
#[derive(Debug, PartialEq, Clone)]
pub enum SaxParseError<E> {
    /// An error occurred within the parser itself.
    Parse(ParseError),
    /// An error was returned by the user's handler.
    Handler(E),
}

impl<E> From<ParseError> for SaxParseError<E> {
    fn from(e: ParseError) -> Self {
        SaxParseError::Parse(e)
    }
}

impl<E: core::fmt::Display> core::fmt::Display for SaxParseError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SaxParseError::Parse(e) => write!(f, "{e}"),
            SaxParseError::Handler(e) => write!(f, "Handler error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: std::error::Error + 'static> std::error::Error for SaxParseError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaxParseError::Parse(e) => Some(e),
            SaxParseError::Handler(e) => Some(e),
        }
    }
}
