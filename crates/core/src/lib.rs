//! inkswap - rewrite the fill color of text runs in PDF content streams.
//!
//! The crate intercepts a page's drawing-operator sequence, tracks the
//! active fill color, and injects new color-setting operators ahead of
//! matching text runs. Everything else in the stream is passed through
//! untouched, and the page is written back through `lopdf`.

pub mod document;
pub mod error;
pub mod interp;
pub mod model;
pub mod rewrite;

pub use document::editor::PageEditor;
pub use error::{Result, RewriteError};
pub use interp::processor::ContentProcessor;
pub use interp::sink::InstructionSink;
pub use model::color::{COLOR_TOLERANCE, Color, ColorSpaceKind, ColorTable};
pub use model::operator::is_text_showing;
pub use model::state::GraphicsState;
pub use rewrite::{FixedTarget, RewritePolicy, TableRewrite};
