//! Usecase layer: partition, coloring, pipeline events, scene validation.

pub mod analyze;
pub mod colorize;
pub mod event;
pub mod scc;
pub mod stats;
pub mod validate;
