//! Color-table policy: several independent target/replacement pairs,
//! matched by closeness, with no run tracking or reversion.

use crate::interp::sink::InstructionSink;
use crate::model::color::ColorTable;
use crate::model::operator::is_text_showing;
use crate::model::state::GraphicsState;
use lopdf::content::Operation;

/// Injects a replacement color before every text-showing operation whose
/// fill color is close to a table entry.
///
/// Each operation is evaluated independently, so a run of N text-showing
/// operations under one matching fill gets N injections, one before each.
/// Repeated injections ahead of a stable paint color do not change the
/// rendered output, only the instruction count. The replacement is encoded
/// in its own color space (`g`/`rg`/`k` by variant), and nothing is ever
/// reverted; later color-setting operations in the stream take over as
/// they always did.
#[derive(Debug, Clone)]
pub struct TableRewrite {
    table: ColorTable,
}

impl TableRewrite {
    pub fn new(table: ColorTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    pub fn write(
        &mut self,
        operation: &Operation,
        state: &GraphicsState,
        sink: &mut InstructionSink,
    ) {
        if is_text_showing(&operation.operator)
            && let Some(fill) = state.fill_color()
            && let Some(replacement) = self.table.lookup(fill)
        {
            sink.push(replacement.to_operation());
        }
        sink.push(operation.clone());
    }
}
