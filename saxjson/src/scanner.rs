// SPDX-License-Identifier: Apache-2.0

//! String and keyword sub-lexers.

use alloc::string::String;

use crate::cursor::PushbackCursor;
use crate::parse_error::ParseError;
use crate::Reader;

/// Copies characters into `scratch` up to the next `"`, which is consumed.
///
/// The cursor must sit just after the opening quote. Escapes are not
/// interpreted: a backslash is copied like any other character, so `\"`
/// closes the string.
pub fn lex_string<R: Reader>(
    cursor: &mut PushbackCursor<R>,
    scratch: &mut String,
) -> Result<(), ParseError> {
    scratch.clear();
    while let Some(c) = cursor.next_char()? {
        if c == '"' {
            return Ok(());
        }
        scratch.push(c);
    }
    Err(ParseError::UnterminatedString)
}

/// Matches the remaining letters of a keyword whose first letter was
/// already consumed, e.g. `"rue"` after `t`.
pub fn lex_literal<R: Reader>(
    cursor: &mut PushbackCursor<R>,
    rest: &str,
) -> Result<(), ParseError> {
    for expected in rest.chars() {
        match cursor.next_char()? {
            Some(c) if c == expected => {}
            Some(_) => return Err(ParseError::InvalidLiteral),
            None => return Err(ParseError::EndOfData),
        }
    }
    Ok(())
}
