use proptest::prelude::*;
use scc_palette::domain::graph::{Graph, IndexedGraph};
use scc_palette::domain::traits::SccDetector;
use scc_palette::infrastructure::scc_dcsc::DcscSccDetector;
use scc_palette::infrastructure::scc_kosaraju::KosarajuSccDetector;
use scc_palette::infrastructure::scc_tarjan::TarjanSccDetector;
use scc_palette::usecase::scc::strongly_connected_components;
use std::collections::BTreeSet;

fn detectors() -> Vec<Box<dyn SccDetector>> {
    vec![
        Box::new(TarjanSccDetector),
        Box::new(KosarajuSccDetector),
        Box::new(DcscSccDetector),
    ]
}

#[test]
fn detectors_flag_self_loop_as_cyclic() {
    // 0 -> 0
    let mut g = IndexedGraph::with_nodes(1);
    g.edges[0].push(0);

    for det in detectors() {
        let scc = det.compute_scc(&g);
        assert_eq!(scc.components, vec![vec![0]], "{}", det.name());
        assert_eq!(scc.cyclic_component, vec![true], "{}", det.name());
    }
}

#[test]
fn detectors_find_two_node_cycle() {
    // 0 <-> 1
    let mut g = IndexedGraph::with_nodes(2);
    g.edges[0].push(1);
    g.edges[1].push(0);

    for det in detectors() {
        let scc = det.compute_scc(&g);
        assert_eq!(scc.components, vec![vec![0, 1]], "{}", det.name());
        assert_eq!(scc.cyclic_component, vec![true], "{}", det.name());
    }
}

#[test]
fn detectors_split_dag_into_singletons() {
    // 0 -> 1 -> 2
    let mut g = IndexedGraph::with_nodes(3);
    g.edges[0].push(1);
    g.edges[1].push(2);

    for det in detectors() {
        let scc = det.compute_scc(&g);
        assert_eq!(scc.components.len(), 3, "{}", det.name());
        for comp in scc.components.iter() {
            assert_eq!(comp.len(), 1);
        }
        assert!(scc.cyclic_component.iter().all(|&b| !b));
    }
}

#[test]
fn detectors_agree_on_textbook_graph() {
    // Classic eight-vertex example: {a,b,e}, {c,d,h}, {f,g}.
    let (a, b, c, d, e, f, g, h) = (0, 1, 2, 3, 4, 5, 6, 7);
    let graph = Graph::from_edges([
        (a, b),
        (b, c),
        (b, e),
        (b, f),
        (c, d),
        (c, g),
        (d, c),
        (d, h),
        (e, a),
        (e, f),
        (f, g),
        (g, f),
        (g, h),
        (h, h),
    ]);

    let expected: Vec<BTreeSet<i64>> = vec![
        BTreeSet::from([a, b, e]),
        BTreeSet::from([c, d]),
        BTreeSet::from([f, g]),
        BTreeSet::from([h]),
    ];

    for det in detectors() {
        let p = strongly_connected_components(&graph, det.as_ref());
        let got: Vec<BTreeSet<i64>> = p.components.iter().map(|c| c.vertices.clone()).collect();
        assert_eq!(got, expected, "{}", det.name());
        assert!(p.components.iter().all(|c| c.cyclic), "{}", det.name());
    }
}

fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..40).prop_flat_map(|n| {
        let n = n as i64;
        prop::collection::vec((0..n, 0..n), 0..120).prop_map(move |edges| {
            let mut g = Graph::from_edges(edges);
            for v in 0..n {
                g.add_vertex(v);
            }
            g
        })
    })
}

/// Reachability by plain BFS; quadratic but obviously correct.
fn reachable(graph: &Graph, from: i64) -> BTreeSet<i64> {
    let mut seen = BTreeSet::from([from]);
    let mut queue = vec![from];
    while let Some(v) = queue.pop() {
        for w in graph.successors(v) {
            if seen.insert(w) {
                queue.push(w);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn components_partition_the_vertex_set(graph in arb_graph()) {
        let p = strongly_connected_components(&graph, &TarjanSccDetector);

        let mut union = BTreeSet::new();
        let mut total = 0;
        for c in p.components.iter() {
            prop_assert!(!c.is_empty());
            total += c.len();
            union.extend(c.vertices.iter().copied());
        }
        prop_assert_eq!(total, graph.vertex_count());
        prop_assert_eq!(union, graph.vertices().collect::<BTreeSet<_>>());
    }

    #[test]
    fn components_are_mutually_reachable_and_maximal(graph in arb_graph()) {
        let p = strongly_connected_components(&graph, &TarjanSccDetector);
        for c in p.components.iter() {
            let Some(&rep) = c.vertices.iter().next() else { continue };
            let forward = reachable(&graph, rep);
            let expected: BTreeSet<i64> = forward
                .iter()
                .copied()
                .filter(|&v| reachable(&graph, v).contains(&rep))
                .collect();
            prop_assert_eq!(&c.vertices, &expected);
        }
    }

    #[test]
    fn all_detectors_produce_the_same_ordered_partition(graph in arb_graph()) {
        let reference = strongly_connected_components(&graph, &TarjanSccDetector);
        prop_assert_eq!(
            &strongly_connected_components(&graph, &KosarajuSccDetector),
            &reference
        );
        prop_assert_eq!(
            &strongly_connected_components(&graph, &DcscSccDetector),
            &reference
        );
    }

    #[test]
    fn components_are_ordered_by_lowest_vertex(graph in arb_graph()) {
        let p = strongly_connected_components(&graph, &TarjanSccDetector);
        let firsts: Vec<i64> = p
            .components
            .iter()
            .filter_map(|c| c.vertices.iter().next().copied())
            .collect();
        let mut sorted = firsts.clone();
        sorted.sort_unstable();
        prop_assert_eq!(firsts, sorted);
    }
}
