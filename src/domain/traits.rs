use crate::domain::graph::{IndexedGraph, SccResult};

/// Strongly connected component decomposition over a dense graph.
///
/// Implementations must return a strict partition of `0..graph.node_count()`;
/// component order is normalised by the caller.
pub trait SccDetector {
    fn name(&self) -> &'static str;

    fn compute_scc(&self, graph: &IndexedGraph) -> SccResult;
}
