// SPDX-License-Identifier: Apache-2.0

/// Internal invariants that the parser checks instead of panicking.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnexpectedState {
    /// A character was pushed back while another one was still pending.
    PushbackOccupied,
    /// The reader reported more bytes than the buffer it was given.
    ReaderOverrun,
    /// A validated UTF-8 sequence yielded no character.
    EmptyCharacter,
}

/// Errors that can occur during JSON parsing
///
/// Every variant is terminal for the `parse` call that produced it.
#[derive(Debug, PartialEq, Clone)]
pub enum ParseError {
    /// A character that is not legal in the current context.
    ///
    /// Covers misplaced brackets, colons and commas, keywords or numbers
    /// used as object keys, and characters outside the grammar.
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Zero-based character offset of `ch` in the input.
        offset: usize,
    },
    /// Input ended while an object, array or literal was still open.
    EndOfData,
    /// Input ended before the closing quote of a string.
    UnterminatedString,
    /// A `true`, `false` or `null` keyword was misspelled.
    InvalidLiteral,
    /// A number string could not be parsed.
    InvalidNumber,
    /// Numeric overflow
    NumericOverflow,
    /// The input was not valid UTF-8.
    InvalidUtf8(core::str::Utf8Error),
    /// Error from the underlying reader (I/O error, not end-of-stream)
    ReaderError,
    /// The parser entered an unexpected internal state.
    Unexpected(UnexpectedState),
}

impl From<core::str::Utf8Error> for ParseError {
    fn from(err: core::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8(err)
    }
}

impl From<UnexpectedState> for ParseError {
    fn from(info: UnexpectedState) -> Self {
        ParseError::Unexpected(info)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::UnexpectedCharacter { ch, offset } => {
                write!(f, "Unexpected [{}] at offset {offset}", ch.escape_debug())
            }
            ParseError::EndOfData => f.write_str("Unexpected end of input"),
            ParseError::UnterminatedString => f.write_str("Unterminated string"),
            ParseError::InvalidLiteral => f.write_str("Invalid literal"),
            ParseError::InvalidNumber => f.write_str("Invalid number"),
            ParseError::NumericOverflow => f.write_str("Number out of range"),
            ParseError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {e}"),
            _ => write!(f, "{self:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
