// SPDX-License-Identifier: Apache-2.0

// Shared test support: a handler that records owned copies of every event.
#![allow(dead_code)]

use saxjson::{ChunkReader, Event, Int, ParseError, SaxHandler, SaxParseError, SaxParser};

/// Owned counterpart of [`Event`], comparable after parsing has finished.
#[derive(Debug, PartialEq, Clone)]
pub enum Recorded {
    Start,
    End,
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    Name(String),
    String(String),
    Integer(Int),
    Double(f64),
    Bool(bool),
    Null,
}

impl From<Event<'_>> for Recorded {
    fn from(event: Event<'_>) -> Self {
        match event {
            Event::Start => Recorded::Start,
            Event::End => Recorded::End,
            Event::ObjectStart => Recorded::ObjectStart,
            Event::ObjectEnd => Recorded::ObjectEnd,
            Event::ArrayStart => Recorded::ArrayStart,
            Event::ArrayEnd => Recorded::ArrayEnd,
            Event::Name(name) => Recorded::Name(name.to_owned()),
            Event::String(s) => Recorded::String(s.to_owned()),
            Event::Integer(val) => Recorded::Integer(val),
            Event::Double(val) => Recorded::Double(val),
            Event::Bool(b) => Recorded::Bool(b),
            Event::Null => Recorded::Null,
        }
    }
}

pub fn name(s: &str) -> Recorded {
    Recorded::Name(s.to_owned())
}

pub fn string(s: &str) -> Recorded {
    Recorded::String(s.to_owned())
}

/// Records every event it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Recorded>,
}

impl SaxHandler for Recorder {
    type Error = ();

    fn handle_event(&mut self, event: Event<'_>) -> Result<(), ()> {
        self.events.push(event.into());
        Ok(())
    }
}

/// Parses `json` and returns the events recorded up to success or failure.
pub fn record(json: &str) -> (Result<(), SaxParseError<()>>, Vec<Recorded>) {
    let mut recorder = Recorder::default();
    let result = SaxParser::from_str(json, &mut recorder).parse();
    (result, recorder.events)
}

/// Same as [`record`], reading `chunk_size` bytes at a time.
pub fn record_chunked(
    json: &str,
    chunk_size: usize,
) -> (Result<(), SaxParseError<()>>, Vec<Recorded>) {
    let mut recorder = Recorder::default();
    let reader = ChunkReader::new(json.as_bytes(), chunk_size);
    let result = SaxParser::new(reader, &mut recorder).parse();
    (result, recorder.events)
}

pub fn parse_ok(json: &str) -> Vec<Recorded> {
    match record(json) {
        (Ok(()), events) => events,
        (Err(e), events) => panic!("{json:?} failed with {e:?} after {events:?}"),
    }
}

pub fn parse_err(json: &str) -> ParseError {
    match record(json) {
        (Err(SaxParseError::Parse(e)), events) => {
            assert_ne!(events.last(), Some(&Recorded::End), "{json:?} reported End");
            e
        }
        (Err(SaxParseError::Handler(())), _) => panic!("{json:?}: recorder never fails"),
        (Ok(()), events) => panic!("{json:?} parsed as {events:?}"),
    }
}
