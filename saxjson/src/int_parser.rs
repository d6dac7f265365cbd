// SPDX-License-Identifier: Apache-2.0

// Unsigned-syntax decimal parser; the grammar has no sign characters, so
// only digit runs reach this point.

/// A custom error type for const integer parsing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ConstParseIntegerError {
    /// The input byte slice was empty.
    Empty,
    /// An invalid character was found that was not a base-10 digit.
    InvalidDigit,
    /// The number overflowed the target integer type.
    Overflow,
}

/// Creates a panic-free, const-stable, base-10 parser for a specific signed integer type.
macro_rules! define_const_parser {
    ($fn_name:ident, $int_ty:ty) => {
        /// Parses a run of ASCII digits into a(n) `
        #[doc = stringify!($int_ty)]
        /// ` in a `const` context.
        ///
        /// This function is guaranteed not to panic.
        pub const fn $fn_name(src: &[u8]) -> Result<$int_ty, ConstParseIntegerError> {
            if src.is_empty() {
                return Err(ConstParseIntegerError::Empty);
            }

            let mut digits = src;
            let mut result: $int_ty = 0;

            while let Some((&byte, rest)) = digits.split_first() {
                let digit = match byte {
                    b'0'..=b'9' => (byte - b'0') as $int_ty,
                    _ => return Err(ConstParseIntegerError::InvalidDigit),
                };

                result = match result.checked_mul(10) {
                    Some(val) => val,
                    None => return Err(ConstParseIntegerError::Overflow),
                };
                result = match result.checked_add(digit) {
                    Some(val) => val,
                    None => return Err(ConstParseIntegerError::Overflow),
                };

                digits = rest;
            }

            Ok(result)
        }
    };
}

#[cfg(feature = "int8")]
define_const_parser!(from_ascii_i8, i8);
#[cfg(feature = "int32")]
define_const_parser!(from_ascii_i32, i32);
#[cfg(feature = "int64")]
define_const_parser!(from_ascii_i64, i64);
