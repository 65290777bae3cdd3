//! Domain layer: graph model, color generation and detector ports. No IO.

pub mod color;
pub mod error;
pub mod graph;
pub mod traits;
