//! Content-stream interception: per-operator dispatch and output sink.

pub mod processor;
pub mod sink;
