// SPDX-License-Identifier: Apache-2.0

//! A single-pass, SAX-style JSON parser.
//!
//! [`SaxParser`] reads JSON text one character at a time and reports
//! structure and values to a [`SaxHandler`] as it goes, without building a
//! tree. Input comes from any [`Reader`]: [`ChunkReader`] for in-memory data,
//! or [`IoReader`] for `std::io::Read` sources.
//!
//! ```rust
//! use saxjson::{Event, SaxHandler, SaxParser};
//!
//! #[derive(Default)]
//! struct Depth {
//!     current: usize,
//!     max: usize,
//! }
//!
//! impl SaxHandler for Depth {
//!     type Error = ();
//!
//!     fn handle_event(&mut self, event: Event<'_>) -> Result<(), ()> {
//!         match event {
//!             Event::ObjectStart | Event::ArrayStart => {
//!                 self.current += 1;
//!                 self.max = self.max.max(self.current);
//!             }
//!             Event::ObjectEnd | Event::ArrayEnd => self.current -= 1,
//!             _ => {}
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut depth = Depth::default();
//! SaxParser::from_str(r#"{ "a": [1, {"b": null}] }"#, &mut depth)
//!     .parse()
//!     .unwrap();
//! assert_eq!(depth.max, 3);
//! ```
//!
//! Strings are reported verbatim: escape sequences are not decoded. Numbers
//! are digits with at most one `.`; the integer width is chosen with the
//! `int8`, `int32` or `int64` feature.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

// Compile-time configuration validation
mod config_check;

mod chunk_reader;
pub use chunk_reader::ChunkReader;

mod context;

mod cursor;

mod int_parser;

mod number_parser;

mod parse_error;
pub use parse_error::{ParseError, UnexpectedState};

mod reader;
#[cfg(feature = "std")]
pub use reader::IoReader;
pub use reader::Reader;

mod sax_parser;
pub use sax_parser::{parse_str, SaxParseError, SaxParser};

mod scanner;

mod shared;
pub use shared::{Event, Int, SaxHandler};
