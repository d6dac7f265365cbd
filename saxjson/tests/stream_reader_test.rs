// SPDX-License-Identifier: Apache-2.0

// Reader-driven parsing: chunk boundaries, std::io sources and event-stream
// structure over a mixed corpus

mod common;

use common::Recorded::{
    ArrayEnd, ArrayStart, Bool, End, Integer, Name, ObjectEnd, ObjectStart, Start,
};
use common::{record, record_chunked, Recorded, Recorder};
use saxjson::{Event, ParseError, Reader, SaxHandler, SaxParseError, SaxParser};

const CORPUS: &[&str] = &[
    "",
    "null",
    r#""plain""#,
    "[ 1, 2, 3 ]",
    r#"{ "foo": 55 }"#,
    r#"{ "a": { "b": [ true, false, null ] }, "c": "ü€😀" }"#,
    r#"[ {}, [], { "x": [ { "y": .25 } ] } ]"#,
    "[ .1, 0.2, 1.3, 007, 5. ]",
    "{",
    r#"{{ "a": 7 }}"#,
    r#"{ a: "b" }"#,
    r#"{ "a" "b" }"#,
    "[1}",
    r#"[ "unterminated ]"#,
    "0..7",
];

/// Checks the ordering guarantees every event stream must satisfy,
/// whether or not parsing succeeded.
fn assert_well_formed(json: &str, result: &Result<(), SaxParseError<()>>, events: &[Recorded]) {
    assert_eq!(events.first(), Some(&Start), "{json:?}");
    assert_eq!(
        result.is_ok(),
        events.last() == Some(&End),
        "{json:?}: End must be reported exactly on success"
    );

    let mut open: Vec<&Recorded> = Vec::new();
    let mut previous: Option<&Recorded> = None;
    for event in events {
        match event {
            ObjectStart | ArrayStart => open.push(event),
            ObjectEnd => assert_eq!(open.pop(), Some(&ObjectStart), "{json:?}"),
            ArrayEnd => assert_eq!(open.pop(), Some(&ArrayStart), "{json:?}"),
            Name(_) => assert!(
                !matches!(previous, Some(Name(_))),
                "{json:?}: two names in a row"
            ),
            _ => {}
        }
        previous = Some(event);
    }
    if result.is_ok() {
        assert!(open.is_empty(), "{json:?}: unbalanced on success");
    }
}

#[test]
fn corpus_event_streams_are_well_formed() {
    for json in CORPUS {
        let (result, events) = record(json);
        assert_well_formed(json, &result, &events);
    }
}

#[test]
fn chunk_size_does_not_change_events() {
    for json in CORPUS {
        let whole = record(json);
        for chunk_size in [1, 2, 3, 7, 64, 1000] {
            assert_eq!(
                record_chunked(json, chunk_size),
                whole,
                "{json:?} with chunk size {chunk_size}"
            );
        }
    }
}

#[test]
fn document_longer_than_read_buffer() {
    let values: Vec<String> = (0..200).map(|i| format!("\"value-{i}\"")).collect();
    let json = format!("[{}]", values.join(", "));
    let (result, events) = record_chunked(&json, 5);
    assert_eq!(result, Ok(()));
    assert_eq!(events.len(), 200 + 4);
    assert_eq!(events[201], Recorded::String("value-199".to_owned()));
}

#[cfg(feature = "std")]
#[test]
fn io_reader_source() {
    let json = br#"{ "foo": [ 1, "two" ] }"#;
    let mut reader = saxjson::IoReader::new(std::io::Cursor::new(json.to_vec()));
    let mut recorder = Recorder::default();
    SaxParser::new(&mut reader, &mut recorder).parse().unwrap();
    // The source is consumed to the end and handed back intact
    assert_eq!(reader.into_inner().position(), json.len() as u64);
    assert_eq!(
        recorder.events,
        vec![
            Start,
            ObjectStart,
            common::name("foo"),
            ArrayStart,
            Integer(1),
            common::string("two"),
            ArrayEnd,
            ObjectEnd,
            End
        ]
    );
}

#[test]
fn reader_failure_mid_document() {
    /// Serves its data once, then fails.
    struct FailAfter<'a> {
        data: Option<&'a [u8]>,
    }

    impl Reader for FailAfter<'_> {
        type Error = &'static str;

        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let data = self.data.take().ok_or("link down")?;
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    let mut recorder = Recorder::default();
    let reader = FailAfter {
        data: Some(b"[1, "),
    };
    let result = SaxParser::new(reader, &mut recorder).parse();
    assert_eq!(result, Err(SaxParseError::Parse(ParseError::ReaderError)));
    assert_eq!(recorder.events, vec![Start, ArrayStart, Integer(1)]);
}

#[test]
fn second_parse_sees_exhausted_input() {
    let mut recorder = Recorder::default();
    let mut parser = SaxParser::from_str("[true]", &mut recorder);
    parser.parse().unwrap();
    parser.parse().unwrap();
    drop(parser);
    assert_eq!(
        recorder.events,
        vec![Start, ArrayStart, Bool(true), ArrayEnd, End, Start, End]
    );
}

#[test]
fn independent_handlers_see_identical_events() {
    let json = r#"{ "k": [1, 2.5, "s", true, null, {}] }"#;
    let mut first = Recorder::default();
    let mut second = Recorder::default();
    SaxParser::from_str(json, &mut first).parse().unwrap();
    SaxParser::new(saxjson::ChunkReader::new(json.as_bytes(), 3), &mut second)
        .parse()
        .unwrap();
    assert_eq!(first.events, second.events);
}

#[test]
fn value_events_alternate_with_names_in_objects() {
    /// Counts values, and checks each name is answered by a value or container.
    #[derive(Default)]
    struct ValueCount {
        values: usize,
        awaiting_value: bool,
    }

    impl SaxHandler for ValueCount {
        type Error = &'static str;

        fn handle_event(&mut self, event: Event<'_>) -> Result<(), Self::Error> {
            if event.is_value() {
                self.values += 1;
            }
            if self.awaiting_value
                && !(event.is_value() || matches!(event, Event::ObjectStart | Event::ArrayStart))
            {
                return Err("name without value");
            }
            self.awaiting_value = matches!(event, Event::Name(_));
            Ok(())
        }
    }

    let mut count = ValueCount::default();
    let json = r#"{ "k": [1, 2.5, "s", true, null, {}], "m": { "n": "v" } }"#;
    SaxParser::from_str(json, &mut count).parse().unwrap();
    assert_eq!(count.values, 6);
}

#[test_log::test]
fn handler_error_aborts() {
    #[derive(Debug, PartialEq)]
    struct TooDeep;

    struct DepthLimit {
        depth: usize,
        limit: usize,
    }

    impl SaxHandler for DepthLimit {
        type Error = TooDeep;

        fn handle_event(&mut self, event: Event<'_>) -> Result<(), TooDeep> {
            match event {
                Event::ObjectStart | Event::ArrayStart => {
                    self.depth += 1;
                    if self.depth > self.limit {
                        return Err(TooDeep);
                    }
                }
                Event::ObjectEnd | Event::ArrayEnd => self.depth -= 1,
                _ => {}
            }
            Ok(())
        }
    }

    let mut handler = DepthLimit { depth: 0, limit: 2 };
    assert_eq!(
        SaxParser::from_str("[[1]]", &mut handler).parse(),
        Ok(())
    );

    let mut handler = DepthLimit { depth: 0, limit: 2 };
    assert_eq!(
        SaxParser::from_str("[[[1]]]", &mut handler).parse(),
        Err(SaxParseError::Handler(TooDeep))
    );
}
