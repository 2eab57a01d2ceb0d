//! Convenient re-exports for common cast-edit usage.
//!
//! # Example
//!
//! ```
//! use cast_edit::prelude::*;
//!
//! let mut cast = Cast::new(Header::new(80, 24));
//! cast.push(Event::output(0.5, "hello\r\n"));
//! let faster = EditOp::SetSpeed { factor: 2.0 }.apply(&cast).unwrap();
//! assert_eq!(faster.duration(), 0.25);
//! ```

// Error handling
pub use crate::error::{CastError, FormatError, RangeError, Result};

// Document model
pub use crate::document::Cast;
pub use crate::event::{Event, EventData};
pub use crate::header::Header;

// Format I/O
pub use crate::format::{read_cast, write_cast};

// Editing
pub use crate::edit::EditOp;
pub use crate::pipeline::Pipeline;

// Synthetic segments
pub use crate::synth::{Prompt, end_frame, type_text, wait};
