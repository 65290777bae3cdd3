use crate::domain::graph::{IndexedGraph, SccResult};
use crate::domain::traits::SccDetector;

/// Two-pass Kosaraju: finish order on the graph, then sweeps over the transpose.
pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn name(&self) -> &'static str {
        "kosaraju"
    }

    fn compute_scc(&self, graph: &IndexedGraph) -> SccResult {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &IndexedGraph) -> SccResult {
    let n = graph.node_count();
    let rev = graph.transpose();

    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut seen = vec![false; n];

    for start in 0..n {
        if seen[start] {
            continue;
        }
        iterative_finish_order(start, &graph.edges, &mut seen, &mut order);
    }

    let mut assigned = vec![false; n];
    let mut components: Vec<Vec<usize>> = Vec::new();

    for &v in order.iter().rev() {
        if assigned[v] {
            continue;
        }

        let mut stack = vec![v];
        assigned[v] = true;
        let mut comp = Vec::new();

        while let Some(x) = stack.pop() {
            comp.push(x);
            for &p in rev[x].iter() {
                if !assigned[p] {
                    assigned[p] = true;
                    stack.push(p);
                }
            }
        }

        components.push(comp);
    }

    SccResult::from_components(graph, components)
}

fn iterative_finish_order(
    start: usize,
    edges: &[Vec<usize>],
    seen: &mut [bool],
    order: &mut Vec<usize>,
) {
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    seen[start] = true;

    while let Some((v, next_i)) = stack.pop() {
        if let Some(&to) = edges[v].get(next_i) {
            stack.push((v, next_i + 1));
            if !seen[to] {
                seen[to] = true;
                stack.push((to, 0));
            }
            continue;
        }

        order.push(v);
    }
}
