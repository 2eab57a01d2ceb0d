//! The in-memory cast document.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{CastError, Result};
use crate::event::{Event, EventData};
use crate::format::{read_cast, write_cast};
use crate::header::Header;

/// A parsed cast recording: one header plus time-ordered events.
///
/// Events are sorted by non-decreasing timestamp, and the first event (if
/// any) sits at or after time zero. The parser and every edit operation
/// uphold this; [`Cast::push`] trusts the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Cast {
    /// Recording metadata.
    pub header: Header,
    /// Events ordered by non-decreasing timestamp.
    pub events: Vec<Event>,
}

impl Cast {
    /// Create an empty cast with the given header.
    #[must_use]
    pub const fn new(header: Header) -> Self {
        Self {
            header,
            events: Vec::new(),
        }
    }

    /// Append an event.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// End time of the last event, or zero for an empty recording.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.events.last().map_or(0.0, |e| e.time)
    }

    /// Timestamp of the first event, or zero for an empty recording.
    #[must_use]
    pub fn first_time(&self) -> f64 {
        self.events.first().map_or(0.0, |e| e.time)
    }

    /// Whether events are ordered by non-decreasing timestamp.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.events.windows(2).all(|pair| pair[0].time <= pair[1].time)
    }

    /// All output text, concatenated.
    #[must_use]
    pub fn output_text(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match &e.data {
                EventData::Output(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All input text, concatenated.
    #[must_use]
    pub fn input_text(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match &e.data {
                EventData::Input(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Marker labels with their timestamps, in timeline order.
    #[must_use]
    pub fn markers(&self) -> Vec<(f64, &str)> {
        self.events
            .iter()
            .filter_map(|e| match &e.data {
                EventData::Marker(label) => Some((e.time, label.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Concatenate another recording onto the end of this one.
    ///
    /// The other recording's events are shifted by this recording's duration,
    /// keeping their internal spacing (a leading idle gap is preserved).
    pub fn append(&mut self, other: &Self) {
        let base = self.duration();
        self.events
            .extend(other.events.iter().map(|e| e.at(e.time + base)));
    }

    /// Split into two casts before the given event index.
    ///
    /// Both halves keep a copy of the header and their events' original
    /// timestamps. An index past the end puts everything in the first half.
    #[must_use]
    pub fn split_before(&self, index: usize) -> (Self, Self) {
        let index = index.min(self.events.len());
        let (head, tail) = self.events.split_at(index);
        (
            Self {
                header: self.header.clone(),
                events: head.to_vec(),
            },
            Self {
                header: self.header.clone(),
                events: tail.to_vec(),
            },
        )
    }

    /// Read a cast from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| CastError::io_context(format!("opening {}", path.display()), e))?;
        read_cast(BufReader::new(file))
    }

    /// Write this cast to a file, replacing any existing content.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| CastError::io_context(format!("creating {}", path.display()), e))?;
        let mut writer = BufWriter::new(file);
        write_cast(&mut writer, self)?;
        writer
            .flush()
            .map_err(|e| CastError::io_context(format!("flushing {}", path.display()), e))
    }
}
