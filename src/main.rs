//! Binary entrypoint.
//!
//! Layers:
//! - domain: graph model, color sequence, detector port
//! - usecase: partition, coloring, progress events
//! - infrastructure: detectors, file adapters, serde, NDJSON
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    scc_palette::interface::cli::run().await
}
