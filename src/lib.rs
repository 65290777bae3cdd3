//! Strongly connected component analysis and coloring for edge-list digraphs.
//!
//! Layers:
//! - domain: graph model, color sequence, typed errors, detector port
//! - usecase: partition, coloring, pipeline events, scene validation
//! - infrastructure: SCC detectors, edge-list loader, JSON/NDJSON/text adapters
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
