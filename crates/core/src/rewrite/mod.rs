//! Rewrite policies: the pluggable decision core.
//!
//! A policy receives every operation together with the current graphics
//! state and owns all emission to the sink. Both concrete policies always
//! forward the original operation unchanged; they only differ in when an
//! extra color-setting operation is injected ahead of it.

pub mod fixed;
pub mod table;

pub use fixed::FixedTarget;
pub use table::TableRewrite;

use crate::interp::sink::InstructionSink;
use crate::model::state::GraphicsState;
use lopdf::content::Operation;

/// The closed set of rewrite policies, selected once at startup.
#[derive(Debug, Clone)]
pub enum RewritePolicy {
    /// Replace one exact fill color, restoring black after each run.
    FixedTarget(FixedTarget),
    /// Replace any of several colors by closeness, with no reversion.
    Table(TableRewrite),
}

impl RewritePolicy {
    /// Reset per-page state. Must be called before each page.
    pub fn begin_page(&mut self) {
        match self {
            RewritePolicy::FixedTarget(policy) => policy.begin_page(),
            RewritePolicy::Table(_) => {}
        }
    }

    /// Decide what to emit for `operation`, including the operation itself.
    pub fn write(
        &mut self,
        operation: &Operation,
        state: &GraphicsState,
        sink: &mut InstructionSink,
    ) {
        match self {
            RewritePolicy::FixedTarget(policy) => policy.write(operation, state, sink),
            RewritePolicy::Table(policy) => policy.write(operation, state, sink),
        }
    }
}

impl From<FixedTarget> for RewritePolicy {
    fn from(policy: FixedTarget) -> Self {
        RewritePolicy::FixedTarget(policy)
    }
}

impl From<TableRewrite> for RewritePolicy {
    fn from(policy: TableRewrite) -> Self {
        RewritePolicy::Table(policy)
    }
}
