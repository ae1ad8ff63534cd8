//! The operator interceptor: walks a page's operation sequence, keeps the
//! graphics state current, and hands every operation to the active rewrite
//! policy.

use crate::error::Result;
use crate::interp::sink::InstructionSink;
use crate::model::state::GraphicsState;
use crate::rewrite::RewritePolicy;
use lopdf::content::Content;

/// Drives one page's content bytes through a [`RewritePolicy`].
///
/// For each operation in document order the processor first applies the
/// operation's graphics-state effect, then forwards the operation to the
/// policy's `write` hook, which owns all emission to the sink. The one
/// exception is `Do`: form XObjects are never traversed, so its state
/// handling is suppressed while its token still reaches the policy and is
/// preserved verbatim in the output.
///
/// There is a single policy slot per run, dispatched through one `write`
/// entry point, so reconfiguring a processor replaces the hook instead of
/// nesting wrappers around it.
#[derive(Debug, Default)]
pub struct ContentProcessor {
    state: GraphicsState,
}

impl ContentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graphics state as of the most recently processed operation.
    pub fn state(&self) -> &GraphicsState {
        &self.state
    }

    /// Rewrite one page's raw content bytes, returning the new bytes.
    ///
    /// The caller is responsible for resetting the policy's per-page state
    /// beforehand; the graphics state itself starts fresh for every stream.
    pub fn process(&mut self, content: &[u8], policy: &mut RewritePolicy) -> Result<Vec<u8>> {
        self.state = GraphicsState::new();
        let stream = Content::decode(content)?;
        let mut sink = InstructionSink::new();
        for operation in &stream.operations {
            if operation.operator != "Do" {
                self.state.apply(operation);
            }
            policy.write(operation, &self.state, &mut sink);
        }
        sink.into_bytes()
    }
}
