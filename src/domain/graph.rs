use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Vertex identifier as it appears in the edge list.
pub type Vertex = i64;

/// Directed edge `(source, target)`.
pub type Edge = (Vertex, Vertex);

/// Directed graph keyed by vertex id. Parallel edges collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<Vertex, BTreeSet<Vertex>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut g = Self::new();
        for (x, y) in edges {
            g.add_edge(x, y);
        }
        g
    }

    pub fn add_vertex(&mut self, v: Vertex) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, BTreeSet::new());
        true
    }

    /// Inserts `x -> y`, registering both endpoints. Returns false for a duplicate edge.
    pub fn add_edge(&mut self, x: Vertex, y: Vertex) -> bool {
        self.add_vertex(y);
        self.adjacency.entry(x).or_default().insert(y)
    }

    pub fn has_edge(&self, x: Vertex, y: Vertex) -> bool {
        self.adjacency.get(&x).is_some_and(|outs| outs.contains(&y))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|outs| outs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn successors(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.get(&v).into_iter().flatten().copied()
    }

    /// Edges ordered by source, then target.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&x, outs)| outs.iter().map(move |&y| (x, y)))
    }

    /// Dense `0..n` relabelling used by the SCC detectors. Index order follows vertex id order.
    pub fn indexed(&self) -> IndexedGraph {
        let vertices: Vec<Vertex> = self.vertices().collect();
        let index_of: HashMap<Vertex, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();

        let mut g = IndexedGraph::new(vertices);
        for (u, outs) in self.adjacency.values().enumerate() {
            g.edges[u].extend(outs.iter().filter_map(|v| index_of.get(v).copied()));
        }
        g
    }
}

/// Adjacency lists over dense indices; `vertices[i]` is the original id of node `i`.
/// Successor lists are sorted and free of duplicates.
#[derive(Debug, Clone, Default)]
pub struct IndexedGraph {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Vec<usize>>,
}

impl IndexedGraph {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        let n = vertices.len();
        Self {
            vertices,
            edges: vec![Vec::new(); n],
        }
    }

    /// Anonymous nodes `0..node_count`, mostly for tests.
    pub fn with_nodes(node_count: usize) -> Self {
        Self::new((0..node_count as Vertex).collect())
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn transpose(&self) -> Vec<Vec<usize>> {
        let mut rev: Vec<Vec<usize>> = vec![Vec::new(); self.node_count()];
        for (u, outs) in self.edges.iter().enumerate() {
            for &v in outs {
                rev[v].push(u);
            }
        }
        for outs in rev.iter_mut() {
            outs.sort_unstable();
            outs.dedup();
        }
        rev
    }

    pub fn has_self_loop(&self, u: usize) -> bool {
        self.edges[u].contains(&u)
    }
}

/// Raw detector output over dense indices.
#[derive(Debug, Clone)]
pub struct SccResult {
    pub component_of: Vec<usize>,
    pub components: Vec<Vec<usize>>,
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    /// Builds the result from member lists, sorting members and deriving the cyclic flags.
    pub fn from_components(graph: &IndexedGraph, mut components: Vec<Vec<usize>>) -> Self {
        let mut component_of = vec![usize::MAX; graph.node_count()];
        let mut cyclic_component = Vec::with_capacity(components.len());

        for (cid, comp) in components.iter_mut().enumerate() {
            comp.sort_unstable();
            for &u in comp.iter() {
                component_of[u] = cid;
            }
            let cyclic = match comp.as_slice() {
                [only] => graph.has_self_loop(*only),
                _ => true,
            };
            cyclic_component.push(cyclic);
        }

        Self {
            component_of,
            components,
            cyclic_component,
        }
    }

    /// Relabels components so they appear in order of their lowest node index.
    pub fn into_canonical_order(self) -> Self {
        let mut relabel = vec![usize::MAX; self.components.len()];
        let mut next = 0;
        for &cid in self.component_of.iter() {
            if relabel[cid] == usize::MAX {
                relabel[cid] = next;
                next += 1;
            }
        }

        let mut components: Vec<Vec<usize>> = vec![Vec::new(); self.components.len()];
        let mut cyclic_component = vec![false; self.components.len()];
        for (cid, comp) in self.components.into_iter().enumerate() {
            components[relabel[cid]] = comp;
            cyclic_component[relabel[cid]] = self.cyclic_component[cid];
        }
        let component_of = self.component_of.iter().map(|&cid| relabel[cid]).collect();

        Self {
            component_of,
            components,
            cyclic_component,
        }
    }

    pub fn cyclic_count(&self) -> usize {
        self.cyclic_component.iter().filter(|&&b| b).count()
    }
}

/// A strongly connected component expressed in original vertex ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub vertices: BTreeSet<Vertex>,
    pub cyclic: bool,
}

impl Component {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A single vertex without a self-loop.
    pub fn is_trivial(&self) -> bool {
        !self.cyclic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_edges_collapse_and_endpoints_are_registered() {
        let g = Graph::from_edges([(1, 2), (1, 2), (2, 2)]);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 2);
        assert!(g.has_edge(2, 2));
        assert!(!g.has_edge(2, 1));
    }

    #[test]
    fn indexed_follows_vertex_id_order() {
        let g = Graph::from_edges([(10, -3), (-3, 7)]);
        let idx = g.indexed();
        assert_eq!(idx.vertices, vec![-3, 7, 10]);
        assert_eq!(idx.edges, vec![vec![1], vec![], vec![0]]);
        assert_eq!(idx.transpose(), vec![vec![2], vec![0], vec![]]);
    }

    #[test]
    fn canonical_order_sorts_by_lowest_member() {
        // 0 -> 1 -> 2, components reported sink-first.
        let mut g = IndexedGraph::with_nodes(3);
        g.edges[0].push(1);
        g.edges[1].push(2);

        let res = SccResult::from_components(&g, vec![vec![2], vec![1], vec![0]]);
        let res = res.into_canonical_order();
        assert_eq!(res.components, vec![vec![0], vec![1], vec![2]]);
        assert_eq!(res.component_of, vec![0, 1, 2]);
        assert_eq!(res.cyclic_count(), 0);
    }

    #[test]
    fn cyclic_flag_covers_self_loops_and_multi_vertex_components() {
        let mut g = IndexedGraph::with_nodes(3);
        g.edges[0].push(0);
        g.edges[1].push(2);
        g.edges[2].push(1);

        let res = SccResult::from_components(&g, vec![vec![2, 1], vec![0]]);
        assert_eq!(res.components[0], vec![1, 2]);
        assert_eq!(res.cyclic_component, vec![true, true]);
    }
}
