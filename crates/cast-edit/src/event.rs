//! Cast event model.

use std::borrow::Cow;

/// A single timed event in a cast recording.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Seconds since the start of the recording.
    pub time: f64,
    /// Stream-specific payload.
    pub data: EventData,
}

/// Stream-specific payload of an event.
///
/// Each variant carries only the fields valid for its stream tag; payloads
/// are decomposed at parse time so malformed data (e.g. a resize that is not
/// `<cols>x<rows>`) cannot circulate through the edit operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EventData {
    /// Terminal output (tag `"o"`).
    Output(String),
    /// User input (tag `"i"`).
    Input(String),
    /// Terminal resize (tag `"r"`, wire payload `"<cols>x<rows>"`).
    Resize {
        /// New column count.
        cols: u16,
        /// New row count.
        rows: u16,
    },
    /// Annotation marker (tag `"m"`).
    Marker(String),
}

impl Event {
    /// Create an output event.
    #[must_use]
    pub fn output(time: f64, text: impl Into<String>) -> Self {
        Self {
            time,
            data: EventData::Output(text.into()),
        }
    }

    /// Create an input event.
    #[must_use]
    pub fn input(time: f64, text: impl Into<String>) -> Self {
        Self {
            time,
            data: EventData::Input(text.into()),
        }
    }

    /// Create a resize event.
    #[must_use]
    pub const fn resize(time: f64, cols: u16, rows: u16) -> Self {
        Self {
            time,
            data: EventData::Resize { cols, rows },
        }
    }

    /// Create a marker event.
    #[must_use]
    pub fn marker(time: f64, label: impl Into<String>) -> Self {
        Self {
            time,
            data: EventData::Marker(label.into()),
        }
    }

    /// Copy of this event moved to a different timestamp.
    #[must_use]
    pub fn at(&self, time: f64) -> Self {
        Self {
            time,
            data: self.data.clone(),
        }
    }
}

impl EventData {
    /// The single-character stream tag used on the wire.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Output(_) => "o",
            Self::Input(_) => "i",
            Self::Resize { .. } => "r",
            Self::Marker(_) => "m",
        }
    }

    /// Render the wire payload.
    #[must_use]
    pub fn payload(&self) -> Cow<'_, str> {
        match self {
            Self::Output(text) | Self::Input(text) | Self::Marker(text) => Cow::Borrowed(text),
            Self::Resize { cols, rows } => Cow::Owned(format!("{cols}x{rows}")),
        }
    }
}
