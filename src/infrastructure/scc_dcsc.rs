use crate::domain::graph::{IndexedGraph, SccResult};
use crate::domain::traits::SccDetector;

/// Divide-and-conquer decomposition (Coppersmith, Fleischer, Hendrickson, Pinar).
///
/// Picks a pivot, intersects its descendant and predecessor sets to get the pivot's
/// component, then recurses on the three remaining slices: predecessors only, descendants
/// only, and everything else. No component spans two slices, so each slice is solved on
/// its own. Recursion is replaced by a work stack.
///
/// Worst case is quadratic; it exists for comparison against the linear detectors.
pub struct DcscSccDetector;

impl SccDetector for DcscSccDetector {
    fn name(&self) -> &'static str {
        "dcsc"
    }

    fn compute_scc(&self, graph: &IndexedGraph) -> SccResult {
        Dcsc::new(graph).run()
    }
}

const DONE: usize = usize::MAX;
const UNMARKED: usize = usize::MAX;

struct Dcsc<'a> {
    graph: &'a IndexedGraph,
    transpose: Vec<Vec<usize>>,
    // Slice id each pending node belongs to; DONE once its component is known.
    slice_of: Vec<usize>,
    pred_mark: Vec<usize>,
    desc_mark: Vec<usize>,
    next_slice: usize,
}

impl<'a> Dcsc<'a> {
    fn new(graph: &'a IndexedGraph) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            transpose: graph.transpose(),
            slice_of: vec![0; n],
            pred_mark: vec![UNMARKED; n],
            desc_mark: vec![UNMARKED; n],
            next_slice: 1,
        }
    }

    fn run(mut self) -> SccResult {
        let mut components: Vec<Vec<usize>> = Vec::new();
        let mut work: Vec<Vec<usize>> = vec![(0..self.graph.node_count()).collect()];

        while let Some(slice) = work.pop() {
            let Some(&pivot) = slice.first() else {
                continue;
            };
            let slice_id = self.slice_of[pivot];

            reach(pivot, slice_id, &self.graph.edges, &self.slice_of, &mut self.desc_mark);
            reach(pivot, slice_id, &self.transpose, &self.slice_of, &mut self.pred_mark);

            let mut comp = Vec::new();
            let mut pred_only = Vec::new();
            let mut desc_only = Vec::new();
            let mut rest = Vec::new();

            for &v in slice.iter() {
                let is_pred = self.pred_mark[v] == slice_id;
                let is_desc = self.desc_mark[v] == slice_id;
                match (is_pred, is_desc) {
                    (true, true) => comp.push(v),
                    (true, false) => pred_only.push(v),
                    (false, true) => desc_only.push(v),
                    (false, false) => rest.push(v),
                }
            }

            for &v in comp.iter() {
                self.slice_of[v] = DONE;
            }
            components.push(comp);

            // Pushed in reverse so slices are solved predecessors, descendants, rest.
            for part in [rest, desc_only, pred_only] {
                if part.is_empty() {
                    continue;
                }
                let id = self.next_slice;
                self.next_slice += 1;
                for &v in part.iter() {
                    self.slice_of[v] = id;
                }
                work.push(part);
            }
        }

        SccResult::from_components(self.graph, components)
    }
}

/// Marks every node reachable from `start` inside slice `slice_id` with that id.
fn reach(
    start: usize,
    slice_id: usize,
    adj: &[Vec<usize>],
    slice_of: &[usize],
    mark: &mut [usize],
) {
    let mut stack = vec![start];
    mark[start] = slice_id;

    while let Some(v) = stack.pop() {
        for &w in adj[v].iter() {
            if slice_of[w] == slice_id && mark[w] != slice_id {
                mark[w] = slice_id;
                stack.push(w);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_pivot() {
        // 2 -> 0 <-> 1 -> 3, 4 isolated
        let mut g = IndexedGraph::with_nodes(5);
        g.edges[0] = vec![1];
        g.edges[1] = vec![0, 3];
        g.edges[2] = vec![0];

        let scc = DcscSccDetector.compute_scc(&g);
        assert_eq!(scc.components, vec![vec![0, 1], vec![2], vec![3], vec![4]]);
        assert_eq!(scc.cyclic_component, vec![true, false, false, false]);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let g = IndexedGraph::with_nodes(0);
        let scc = DcscSccDetector.compute_scc(&g);
        assert!(scc.components.is_empty());
        assert!(scc.component_of.is_empty());
    }
}
