//! Fixed-target policy: one exact color in, one replacement out, black
//! restored after the run.

use crate::error::{Result, RewriteError};
use crate::interp::sink::InstructionSink;
use crate::model::color::{Color, ColorSpaceKind};
use crate::model::operator::is_text_showing;
use crate::model::state::GraphicsState;
use lopdf::content::Operation;

/// Replaces every text run painted in exactly `target` with `replacement`,
/// forcing the fill back to black once the run ends.
///
/// The run machine has two states per page: idle, and matched with the
/// color space the target was observed in. A run opens on the first
/// text-showing operation whose fill equals the target exactly, and closes
/// on the first non-text operation after it, where black is injected in
/// the matched space (`g 0`, `rg 0 0 0`, `k 0 0 0 1`). A run still open at
/// end of stream gets no revert; end of page ends the rendering scope.
///
/// The revert is always pure black, not whatever color the stream would
/// have set next.
#[derive(Debug, Clone)]
pub struct FixedTarget {
    target: Color,
    replacement: Color,
    matched: Option<ColorSpaceKind>,
}

impl FixedTarget {
    /// Create the policy. The replacement is always injected through the
    /// RGB device model's `rg`, so a non-RGB replacement is rejected
    /// rather than silently converted.
    pub fn new(target: Color, replacement: Color) -> Result<Self> {
        if replacement.space() != ColorSpaceKind::Rgb {
            return Err(RewriteError::UnsupportedColor(format!(
                "fixed-target replacement must be RGB, got {replacement:?}"
            )));
        }
        Ok(Self {
            target,
            replacement,
            matched: None,
        })
    }

    /// Reset the run machine for a new page.
    pub fn begin_page(&mut self) {
        self.matched = None;
    }

    pub fn write(
        &mut self,
        operation: &Operation,
        state: &GraphicsState,
        sink: &mut InstructionSink,
    ) {
        if is_text_showing(&operation.operator) {
            if self.matched.is_none() && state.fill_color() == Some(&self.target) {
                sink.push(self.replacement.to_operation());
                self.matched = Some(self.target.space());
            }
        } else if let Some(space) = self.matched.take() {
            sink.push(space.black().to_operation());
        }
        sink.push(operation.clone());
    }
}
