// Example demonstrating SaxParser with an indenting event printer

use std::convert::Infallible;

use saxjson::{ChunkReader, Event, SaxHandler, SaxParseError, SaxParser};

/// Prints every event, indented by container depth
struct JsonEventPrinter {
    indent: usize,
    event_count: usize,
}

impl JsonEventPrinter {
    fn new() -> Self {
        Self {
            indent: 0,
            event_count: 0,
        }
    }

    fn indent_str(&self) -> String {
        "  ".repeat(self.indent)
    }
}

impl SaxHandler for JsonEventPrinter {
    type Error = Infallible;

    fn handle_event(&mut self, event: Event<'_>) -> Result<(), Infallible> {
        self.event_count += 1;

        match event {
            Event::ObjectEnd | Event::ArrayEnd => {
                self.indent = self.indent.saturating_sub(1);
                println!("{}{}", self.indent_str(), event);
            }
            Event::ObjectStart | Event::ArrayStart => {
                println!("{}{}", self.indent_str(), event);
                self.indent += 1;
            }
            _ => println!("{}{}", self.indent_str(), event),
        }
        Ok(())
    }
}

fn main() -> Result<(), SaxParseError<Infallible>> {
    println!("SaxParser Demo - event-driven JSON processing");
    println!("=============================================");
    println!();

    let json = r#"{ "name": "saxjson", "version": 0.1, "tags": ["fast", "no_std"],
        "nested": { "data": [1, 2.5, true, null] } }"#;

    println!("Input JSON: {}", json);
    println!("Total size: {} bytes", json.len());
    println!();

    // Small chunks show that reads may split tokens anywhere
    let chunk_size = 7;
    println!("Reading {} bytes at a time:", chunk_size);
    println!();

    let mut printer = JsonEventPrinter::new();
    let reader = ChunkReader::new(json.as_bytes(), chunk_size);
    SaxParser::new(reader, &mut printer).parse()?;

    println!();
    println!("Processed {} events", printer.event_count);

    Ok(())
}
