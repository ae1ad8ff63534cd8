//! Pure data types: colors, operator classification, graphics state.

pub mod color;
pub mod operator;
pub mod state;
