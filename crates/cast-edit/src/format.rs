//! Reading and writing the asciicast v2 line format.
//!
//! A cast file is line-delimited JSON: one header object, then one
//! `[time, tag, payload]` array per event. Parsing is strict — wrong arity,
//! unknown tags, and backwards timestamps are errors, never repaired.

use std::io::{BufRead, Write};

use serde_json::Value;
use tracing::debug;

use crate::document::Cast;
use crate::error::{CastError, FormatError, Result};
use crate::event::{Event, EventData};
use crate::header::Header;

/// Read a cast from line-delimited input.
///
/// The first line must decode as the header object; each following non-blank
/// line must decode as a three-element event array with a non-negative,
/// non-decreasing timestamp.
pub fn read_cast<R: BufRead>(reader: R) -> Result<Cast> {
    let mut lines = reader.lines();

    let header_line = lines
        .next()
        .ok_or(FormatError::MissingHeader)?
        .map_err(|e| CastError::io_context("reading cast header line", e))?;
    let header: Header = serde_json::from_str(&header_line)
        .map_err(|source| FormatError::InvalidHeader { source })?;

    let mut cast = Cast::new(header);
    let mut last_time = 0.0_f64;
    for (i, line) in lines.enumerate() {
        let lineno = i + 2;
        let line = line.map_err(|e| CastError::io_context("reading cast event line", e))?;
        if line.trim().is_empty() {
            continue;
        }
        let event = parse_event(&line, lineno)?;
        if event.time < last_time {
            return Err(FormatError::TimestampRegression {
                line: lineno,
                time: event.time,
            }
            .into());
        }
        last_time = event.time;
        cast.push(event);
    }

    debug!(events = cast.events.len(), "parsed cast");
    Ok(cast)
}

/// Write a cast in the line-delimited format.
///
/// Emits the header line, then one line per event. Timestamps are rendered
/// with shortest round-trippable float formatting. Fails with
/// [`FormatError::Unsorted`] if the document breaks its ordering invariant.
pub fn write_cast<W: Write>(writer: &mut W, cast: &Cast) -> Result<()> {
    if let Some(index) = cast
        .events
        .windows(2)
        .position(|pair| pair[0].time > pair[1].time)
    {
        return Err(FormatError::Unsorted { index: index + 1 }.into());
    }

    let header = serde_json::to_string(&cast.header)
        .map_err(|e| CastError::io_context("encoding cast header", e.into()))?;
    writeln!(writer, "{header}")
        .map_err(|e| CastError::io_context("writing cast header", e))?;

    for event in &cast.events {
        let line = serde_json::to_string(&(event.time, event.data.tag(), event.data.payload()))
            .map_err(|e| CastError::io_context("encoding cast event", e.into()))?;
        writeln!(writer, "{line}")
            .map_err(|e| CastError::io_context("writing cast event", e))?;
    }

    debug!(events = cast.events.len(), "wrote cast");
    Ok(())
}

fn parse_event(line: &str, lineno: usize) -> Result<Event, FormatError> {
    let value: Value = serde_json::from_str(line).map_err(|source| FormatError::InvalidJson {
        line: lineno,
        source,
    })?;

    let Value::Array(items) = value else {
        return Err(FormatError::NotAnArray {
            line: lineno,
            found: json_kind(&value),
        });
    };
    if items.len() != 3 {
        return Err(FormatError::WrongArity {
            line: lineno,
            found: items.len(),
        });
    }

    let time = items[0]
        .as_f64()
        .filter(|t| t.is_finite() && *t >= 0.0)
        .ok_or(FormatError::InvalidTimestamp { line: lineno })?;
    let Some(tag) = items[1].as_str() else {
        return Err(FormatError::UnknownStream {
            line: lineno,
            tag: items[1].to_string(),
        });
    };
    let Some(payload) = items[2].as_str() else {
        return Err(FormatError::InvalidPayload { line: lineno });
    };

    let data = match tag {
        "o" => EventData::Output(payload.to_owned()),
        "i" => EventData::Input(payload.to_owned()),
        "m" => EventData::Marker(payload.to_owned()),
        "r" => parse_resize(payload).ok_or_else(|| FormatError::InvalidResize {
            line: lineno,
            payload: payload.to_owned(),
        })?,
        _ => {
            return Err(FormatError::UnknownStream {
                line: lineno,
                tag: tag.to_owned(),
            });
        }
    };

    Ok(Event { time, data })
}

fn parse_resize(payload: &str) -> Option<EventData> {
    let (cols, rows) = payload.split_once('x')?;
    Some(EventData::Resize {
        cols: cols.parse().ok()?,
        rows: rows.parse().ok()?,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
