// SPDX-License-Identifier: Apache-2.0

//! A convenience Reader implementation for in-memory input.
//!
//! This module provides [`ChunkReader`], a [`Reader`] over a byte slice. It
//! can hand out the whole document at once or simulate streaming by reading
//! the data in fixed-size chunks.
//!
//! For real I/O, wrap a `std::io::Read` in [`IoReader`](crate::IoReader) or
//! implement the [`Reader`] trait for your own source.
//!
//! # Examples
//!
//! ```rust
//! use saxjson::{ChunkReader, Event, SaxHandler, SaxParser};
//!
//! struct Printer;
//! impl SaxHandler for Printer {
//!     type Error = ();
//!     fn handle_event(&mut self, event: Event<'_>) -> Result<(), ()> {
//!         println!("Event: {}", event);
//!         Ok(())
//!     }
//! }
//!
//! // Simulate reading only 4 bytes at a time
//! let reader = ChunkReader::new(br#"{"name": "Alice", "age": 30}"#, 4);
//! let mut printer = Printer;
//! SaxParser::new(reader, &mut printer).parse().unwrap();
//! ```

use crate::Reader;

/// A [`Reader`] that reads from a byte slice, optionally in fixed-size chunks.
///
/// 1.  **Full Slice Reading**: [`ChunkReader::full_slice()`] returns as much
///     as the caller's buffer can hold on every call.
///
/// 2.  **Chunked Reading**: [`ChunkReader::new()`] limits each `read()` call
///     to a maximum chunk size, which exercises the parser's buffer refills
///     and multi-byte characters split across reads.
#[derive(Debug)]
pub struct ChunkReader<'a> {
    data: &'a [u8],
    pos: usize,
    chunk_size: usize,
}

impl<'a> ChunkReader<'a> {
    /// Create a new chunked reader from a byte slice.
    ///
    /// Each call to `read()` will return at most `chunk_size` bytes
    /// (minimum 1), even if more data is available.
    pub fn new(data: &'a [u8], chunk_size: usize) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Create a new reader that consumes the entire byte slice at once.
    pub fn full_slice(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: usize::MAX,
        }
    }
}

impl Reader for ChunkReader<'_> {
    type Error = ();

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = self.data.get(self.pos..).unwrap_or_default();
        let to_copy = remaining.len().min(buf.len()).min(self.chunk_size);

        if let (Some(dest), Some(src)) = (buf.get_mut(..to_copy), remaining.get(..to_copy)) {
            dest.copy_from_slice(src);
            self.pos = self.pos.saturating_add(to_copy);
            Ok(to_copy)
        } else {
            Ok(0)
        }
    }
}
