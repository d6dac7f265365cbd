// SPDX-License-Identifier: Apache-2.0

//! Number sub-lexer.

use alloc::string::String;
use core::str::FromStr;

use crate::cursor::PushbackCursor;
use crate::parse_error::ParseError;
use crate::shared::Int;
use crate::Reader;

#[cfg(feature = "int32")]
use crate::int_parser::from_ascii_i32 as from_ascii;
#[cfg(feature = "int64")]
use crate::int_parser::from_ascii_i64 as from_ascii;
#[cfg(feature = "int8")]
use crate::int_parser::from_ascii_i8 as from_ascii;

/// A converted number. The presence of a `.` alone decides the variant.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Number {
    Integer(Int),
    Double(f64),
}

/// Consumes a run of ASCII digits with at most one `.` and converts it.
///
/// The character that ends the run, if any, is pushed back onto the cursor.
/// `scratch` is cleared first and holds the raw text afterwards.
pub fn lex_number<R: Reader>(
    cursor: &mut PushbackCursor<R>,
    scratch: &mut String,
) -> Result<Number, ParseError> {
    scratch.clear();
    let mut seen_dot = false;

    while let Some(c) = cursor.next_char()? {
        match c {
            '0'..='9' => scratch.push(c),
            '.' if !seen_dot => {
                seen_dot = true;
                scratch.push(c);
            }
            '.' => return Err(ParseError::InvalidNumber),
            _ => {
                cursor.unread(c)?;
                break;
            }
        }
    }

    if seen_dot {
        parse_double(scratch)
    } else {
        parse_integer(scratch)
    }
}

fn parse_integer(text: &str) -> Result<Number, ParseError> {
    use crate::int_parser::ConstParseIntegerError;

    match from_ascii(text.as_bytes()) {
        Ok(val) => Ok(Number::Integer(val)),
        Err(ConstParseIntegerError::Overflow) => Err(ParseError::NumericOverflow),
        Err(_) => Err(ParseError::InvalidNumber),
    }
}

/// Accepts `.5`, `5.` and `5.5`; a lone `.` is rejected by `f64::from_str`.
fn parse_double(text: &str) -> Result<Number, ParseError> {
    match f64::from_str(text) {
        Ok(val) if val.is_finite() => Ok(Number::Double(val)),
        Ok(_) => Err(ParseError::NumericOverflow),
        Err(_) => Err(ParseError::InvalidNumber),
    }
}
