//! Output side of the rewrite: an ordered instruction buffer serialized
//! to content-stream bytes.

use crate::error::Result;
use lopdf::content::{Content, Operation};

/// Accumulates one page's rewritten operation sequence.
///
/// Nothing is written to the document until the whole page has been
/// buffered, so a failing page never leaves partial output behind.
#[derive(Debug, Default)]
pub struct InstructionSink {
    operations: Vec<Operation>,
}

impl InstructionSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one operation to the output sequence.
    pub fn push(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// The buffered operations, in emission order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Serialize the buffered page: operand tokens space-separated, the
    /// operator token terminating each line.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let content = Content {
            operations: self.operations,
        };
        Ok(content.encode()?)
    }
}
