//! Sequential application of edit operations.

use tracing::debug;

use crate::document::Cast;
use crate::edit::EditOp;
use crate::error::{CastError, Result};

/// An ordered sequence of edit operations.
///
/// Operations are validated up front and then applied strictly in order,
/// each output feeding the next input. On failure the error names the
/// offending operation and its index, and the input document is left
/// untouched — there is no partial-success mode.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    ops: Vec<EditOp>,
}

impl Pipeline {
    /// Create an empty pipeline.
    #[must_use]
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Append an operation, builder style.
    #[must_use]
    pub fn then(mut self, op: EditOp) -> Self {
        self.ops.push(op);
        self
    }

    /// Append an operation in place.
    pub fn push(&mut self, op: EditOp) {
        self.ops.push(op);
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the pipeline holds no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The operations in application order.
    #[must_use]
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Check every operation's document-independent parameters.
    ///
    /// Fails fast with the first invalid operation's index, before any
    /// document is touched.
    pub fn validate(&self) -> Result<()> {
        for (index, op) in self.ops.iter().enumerate() {
            op.validate().map_err(|source| CastError::Pipeline {
                index,
                op: op.describe(),
                source,
            })?;
        }
        Ok(())
    }

    /// Apply the whole pipeline to a cast, producing a new cast.
    pub fn apply(&self, cast: &Cast) -> Result<Cast> {
        self.validate()?;

        let mut current = cast.clone();
        for (index, op) in self.ops.iter().enumerate() {
            debug!(index, op = %op.describe(), "applying edit");
            current = op.apply(&current).map_err(|source| CastError::Pipeline {
                index,
                op: op.describe(),
                source,
            })?;
        }
        Ok(current)
    }
}

impl FromIterator<EditOp> for Pipeline {
    fn from_iter<I: IntoIterator<Item = EditOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}
