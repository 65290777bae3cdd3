use crate::domain::graph::{IndexedGraph, SccResult};
use crate::domain::traits::SccDetector;

/// Single-pass Tarjan with an explicit call stack.
pub struct TarjanSccDetector;

impl SccDetector for TarjanSccDetector {
    fn name(&self) -> &'static str {
        "tarjan"
    }

    fn compute_scc(&self, graph: &IndexedGraph) -> SccResult {
        tarjan_scc(graph)
    }
}

const UNVISITED: usize = usize::MAX;

fn tarjan_scc(graph: &IndexedGraph) -> SccResult {
    let n = graph.node_count();
    let mut index_of = vec![UNVISITED; n];
    let mut low_link = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut next_index = 0usize;

    // (node, next successor position); position 0 marks first entry.
    let mut frames: Vec<(usize, usize)> = Vec::new();

    for start in 0..n {
        if index_of[start] != UNVISITED {
            continue;
        }
        frames.push((start, 0));

        while let Some((v, next_i)) = frames.pop() {
            if next_i == 0 {
                index_of[v] = next_index;
                low_link[v] = next_index;
                next_index += 1;
                stack.push(v);
                on_stack[v] = true;
            }

            if let Some(&w) = graph.edges[v].get(next_i) {
                frames.push((v, next_i + 1));
                if index_of[w] == UNVISITED {
                    frames.push((w, 0));
                } else if on_stack[w] {
                    low_link[v] = low_link[v].min(index_of[w]);
                }
                continue;
            }

            if low_link[v] == index_of[v] {
                let mut comp = Vec::new();
                while let Some(w) = stack.pop() {
                    on_stack[w] = false;
                    comp.push(w);
                    if w == v {
                        break;
                    }
                }
                components.push(comp);
            }

            if let Some(&(parent, _)) = frames.last() {
                low_link[parent] = low_link[parent].min(low_link[v]);
            }
        }
    }

    SccResult::from_components(graph, components)
}
