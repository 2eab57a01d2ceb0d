//! cast-edit: Editing toolkit for asciinema cast recordings
//!
//! This crate parses the asciicast v2 line format into an in-memory
//! document, applies an ordered sequence of edit operations (trim, cut,
//! splice, retime, annotate), and writes the result back out. It is the
//! middle of a pipeline: a recorder produces the input file, a renderer
//! consumes the output file, and this crate only transforms what sits
//! between them.
//!
//! # Example
//!
//! ```
//! use cast_edit::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "{\"version\": 2, \"width\": 80, \"height\": 24}\n\
//!                 [1.0, \"o\", \"hello\"]\n\
//!                 [3.0, \"o\", \"world\"]\n";
//!     let cast = read_cast(text.as_bytes())?;
//!
//!     let edited = Pipeline::new()
//!         .then(EditOp::Shift { offset: -1.0 })
//!         .then(EditOp::InsertMarker {
//!             at: 0.0,
//!             label: "intro".to_string(),
//!         })
//!         .apply(&cast)?;
//!
//!     let mut out = Vec::new();
//!     write_cast(&mut out, &edited)?;
//!     assert_eq!(edited.duration(), 2.0);
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod edit;
pub mod error;
pub mod event;
pub mod format;
pub mod header;
pub mod pipeline;
pub mod prelude;
pub mod synth;

pub use document::Cast;
pub use edit::EditOp;
pub use error::{CastError, FormatError, RangeError, Result};
pub use event::{Event, EventData};
pub use format::{read_cast, write_cast};
pub use header::Header;
pub use pipeline::Pipeline;
