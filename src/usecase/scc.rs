use crate::domain::graph::{Component, Graph, IndexedGraph, SccResult, Vertex};
use crate::domain::traits::SccDetector;
use std::collections::{BTreeSet, HashMap};

/// Components of a graph in canonical order (ascending lowest vertex id).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub components: Vec<Component>,
    component_of: HashMap<Vertex, usize>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn component_of(&self, v: Vertex) -> Option<usize> {
        self.component_of.get(&v).copied()
    }

    pub fn cyclic_count(&self) -> usize {
        self.components.iter().filter(|c| c.cyclic).count()
    }

    pub fn largest_component(&self) -> usize {
        self.components.iter().map(Component::len).max().unwrap_or(0)
    }

    fn from_scc(graph: &IndexedGraph, scc: SccResult) -> Self {
        let components = scc
            .components
            .iter()
            .zip(scc.cyclic_component.iter())
            .map(|(members, &cyclic)| Component {
                vertices: members.iter().map(|&u| graph.vertices[u]).collect::<BTreeSet<_>>(),
                cyclic,
            })
            .collect();

        let component_of = scc
            .component_of
            .iter()
            .enumerate()
            .map(|(u, &cid)| (graph.vertices[u], cid))
            .collect();

        Self {
            components,
            component_of,
        }
    }
}

/// Decomposes `graph` with `detector`. Output order does not depend on the detector.
pub fn strongly_connected_components(graph: &Graph, detector: &dyn SccDetector) -> Partition {
    let indexed = graph.indexed();
    partition_indexed(&indexed, detector)
}

pub fn partition_indexed(indexed: &IndexedGraph, detector: &dyn SccDetector) -> Partition {
    let scc = detector.compute_scc(indexed).into_canonical_order();
    Partition::from_scc(indexed, scc)
}
