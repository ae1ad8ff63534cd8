//! Document-level orchestration of per-page rewrites.

pub mod editor;
