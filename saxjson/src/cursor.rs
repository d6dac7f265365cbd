// SPDX-License-Identifier: Apache-2.0

//! Character cursor with one character of pushback.

use crate::parse_error::{ParseError, UnexpectedState};
use crate::Reader;

/// Size of the internal read buffer.
const READ_BUFFER_SIZE: usize = 64;

/// Decodes UTF-8 characters from a [`Reader`] one at a time.
///
/// A single consumed character can be handed back with
/// [`unread`](PushbackCursor::unread); it is returned again by the next
/// [`next_char`](PushbackCursor::next_char).
pub struct PushbackCursor<R> {
    reader: R,
    buffer: [u8; READ_BUFFER_SIZE],
    /// Next unread byte in `buffer`
    pos: usize,
    /// Number of valid bytes in `buffer`
    len: usize,
    /// Set once the reader has reported end of stream
    exhausted: bool,
    pushed_back: Option<char>,
    /// Characters handed out so far, minus any pushed back
    offset: usize,
}

impl<R: Reader> PushbackCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: [0; READ_BUFFER_SIZE],
            pos: 0,
            len: 0,
            exhausted: false,
            pushed_back: None,
            offset: 0,
        }
    }

    /// Zero-based offset of the next character to be returned.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the next character, or `None` at end of stream.
    pub fn next_char(&mut self) -> Result<Option<char>, ParseError> {
        if let Some(c) = self.pushed_back.take() {
            self.offset += 1;
            return Ok(Some(c));
        }

        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };

        let c = if lead.is_ascii() {
            char::from(lead)
        } else {
            self.decode_multibyte(lead)?
        };
        self.offset += 1;
        Ok(Some(c))
    }

    /// Returns `c` to the stream. Only one character may be pending.
    pub fn unread(&mut self, c: char) -> Result<(), ParseError> {
        if self.pushed_back.is_some() {
            return Err(UnexpectedState::PushbackOccupied.into());
        }
        self.pushed_back = Some(c);
        self.offset = self.offset.saturating_sub(1);
        Ok(())
    }

    fn decode_multibyte(&mut self, lead: u8) -> Result<char, ParseError> {
        let width = utf8_width(lead);
        let mut bytes = [lead, 0, 0, 0];
        let mut filled = 1;
        while filled < width {
            match self.next_byte()? {
                Some(b) => {
                    bytes[filled] = b;
                    filled += 1;
                }
                None => break,
            }
        }
        // A truncated or malformed sequence fails here
        let s = core::str::from_utf8(&bytes[..filled])?;
        s.chars()
            .next()
            .ok_or(ParseError::Unexpected(UnexpectedState::EmptyCharacter))
    }

    fn next_byte(&mut self) -> Result<Option<u8>, ParseError> {
        if self.pos >= self.len && !self.refill()? {
            return Ok(None);
        }
        let byte = self.buffer.get(self.pos).copied();
        self.pos += 1;
        Ok(byte)
    }

    /// Returns false once the reader is exhausted.
    fn refill(&mut self) -> Result<bool, ParseError> {
        if self.exhausted {
            return Ok(false);
        }
        let n = self
            .reader
            .read(&mut self.buffer)
            .map_err(|_| ParseError::ReaderError)?;
        if n > self.buffer.len() {
            return Err(UnexpectedState::ReaderOverrun.into());
        }
        if n == 0 {
            self.exhausted = true;
            return Ok(false);
        }
        log::trace!("refilled {n} bytes");
        self.pos = 0;
        self.len = n;
        Ok(true)
    }
}

/// Sequence length announced by a UTF-8 lead byte. Invalid lead bytes report
/// 1 so that decoding fails on that byte alone.
const fn utf8_width(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
