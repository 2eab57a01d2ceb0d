//! Error types for cast-edit.
//!
//! Two failure families exist: [`FormatError`] for malformed cast input (or a
//! document that violates its own invariants at write time), and
//! [`RangeError`] for edit operations whose parameters are inconsistent with
//! the document's timeline. Nothing is silently repaired; every failure
//! carries the line number, index, or offending values needed to correct it.

use thiserror::Error;

/// A specialized `Result` type for cast-edit operations.
pub type Result<T, E = CastError> = std::result::Result<T, E>;

/// The main error type for cast-edit operations.
#[derive(Debug, Error)]
pub enum CastError {
    /// Malformed cast input or an unserializable document.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// An edit operation's parameters are inconsistent with the timeline.
    #[error("range error: {0}")]
    Range(#[from] RangeError),

    /// A pipeline stage failed.
    #[error("operation {index} ({op}) failed: {source}")]
    Pipeline {
        /// Zero-based position of the failing operation in the pipeline.
        index: usize,
        /// Short description of the failing operation.
        op: String,
        /// The underlying range error.
        #[source]
        source: RangeError,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An I/O error occurred with additional context.
    #[error("{context}: {source}")]
    IoWithContext {
        /// What operation was being performed.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl CastError {
    /// Create an I/O error with context about what was being attempted.
    pub fn io_context(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoWithContext {
            context: context.into(),
            source,
        }
    }
}

/// Malformed cast input, or a document that cannot be written faithfully.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The input had no lines at all.
    #[error("empty input: a cast file must start with a header line")]
    MissingHeader,

    /// The first line did not decode as a header object.
    #[error("line 1: invalid header: {source}")]
    InvalidHeader {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An event line was not valid JSON.
    #[error("line {line}: invalid JSON: {source}")]
    InvalidJson {
        /// One-based line number in the input.
        line: usize,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An event line decoded to something other than an array.
    #[error("line {line}: expected a JSON array, found {found}")]
    NotAnArray {
        /// One-based line number in the input.
        line: usize,
        /// What the line decoded to instead.
        found: &'static str,
    },

    /// An event array did not have exactly three elements.
    #[error("line {line}: expected [time, tag, payload], found {found} elements")]
    WrongArity {
        /// One-based line number in the input.
        line: usize,
        /// Number of elements actually present.
        found: usize,
    },

    /// An event timestamp was missing, non-numeric, or negative.
    #[error("line {line}: timestamp must be a non-negative number")]
    InvalidTimestamp {
        /// One-based line number in the input.
        line: usize,
    },

    /// An event carried a stream tag this crate does not know.
    #[error("line {line}: unknown stream tag {tag:?}")]
    UnknownStream {
        /// One-based line number in the input.
        line: usize,
        /// The unrecognized tag.
        tag: String,
    },

    /// An event payload was not a string.
    #[error("line {line}: payload must be a string")]
    InvalidPayload {
        /// One-based line number in the input.
        line: usize,
    },

    /// A resize payload did not match the `<cols>x<rows>` shape.
    #[error("line {line}: resize payload must look like \"80x24\", got {payload:?}")]
    InvalidResize {
        /// One-based line number in the input.
        line: usize,
        /// The malformed payload.
        payload: String,
    },

    /// An event's timestamp was earlier than its predecessor's.
    #[error("line {line}: timestamp {time} is earlier than the previous event")]
    TimestampRegression {
        /// One-based line number in the input.
        line: usize,
        /// The regressing timestamp.
        time: f64,
    },

    /// A document presented for writing breaks the timestamp ordering.
    #[error("event {index} breaks the timestamp ordering invariant")]
    Unsorted {
        /// Zero-based index of the first out-of-order event.
        index: usize,
    },
}

/// An edit operation's parameters are inconsistent with the timeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RangeError {
    /// A window start was negative.
    #[error("start {start} must not be negative")]
    NegativeStart {
        /// The offending start time.
        start: f64,
    },

    /// A window's start came after its end.
    #[error("start {start} is after end {end}")]
    InvertedRange {
        /// The window start.
        start: f64,
        /// The window end.
        end: f64,
    },

    /// An insertion point was negative.
    #[error("insertion point {at} must not be negative")]
    NegativePoint {
        /// The offending insertion point.
        at: f64,
    },

    /// A shift would move an event before the start of the recording.
    #[error("offset {offset} would move the event at {time}s before time zero")]
    NegativeTimestamp {
        /// The requested offset.
        offset: f64,
        /// Timestamp of the first event that would go negative.
        time: f64,
    },

    /// A splice point lay beyond the end of the host recording.
    #[error("splice point {at} is past the end of the recording ({duration}s)")]
    PastEnd {
        /// The requested splice point.
        at: f64,
        /// The host recording's duration.
        duration: f64,
    },

    /// A speed factor was zero, negative, or non-finite.
    #[error("speed factor {factor} must be a positive, finite number")]
    InvalidSpeed {
        /// The offending factor.
        factor: f64,
    },
}
