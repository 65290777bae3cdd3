use crate::domain::graph::{Edge, Graph};
use crate::domain::traits::SccDetector;
use crate::infrastructure::edge_list::{DeclaredCounts, LoadedGraph};
use crate::usecase::colorize::{ColoredComponent, ColoredGraph, ComponentColorer};
use crate::usecase::event::AppEvent;
use crate::usecase::scc::partition_indexed;
use crate::usecase::stats::{AnalysisStats, GraphStats};
use anyhow::Result;
use std::collections::BTreeSet;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Result of one run; the surface an external renderer reads from.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub graph: Graph,
    pub declared: DeclaredCounts,
    pub colored: ColoredGraph,
    pub stats: AnalysisStats,
}

impl Analysis {
    pub fn components(&self) -> &[ColoredComponent] {
        &self.colored.components
    }

    pub fn residual_edges(&self) -> &BTreeSet<Edge> {
        &self.colored.residual_edges
    }

    pub fn graph_stats(&self) -> GraphStats {
        GraphStats {
            declared_vertices: self.declared.vertices,
            declared_edges: self.declared.edges,
            components: self.colored.components.len(),
        }
    }
}

pub async fn analyze_graph(
    input: LoadedGraph,
    detector: &dyn SccDetector,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<Analysis> {
    let LoadedGraph { graph, declared } = input;

    emit(
        &sink,
        AppEvent::GraphLoaded {
            declared_vertices: declared.vertices,
            declared_edges: declared.edges,
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let indexed = graph.indexed();
    let started = Instant::now();
    let partition = partition_indexed(&indexed, detector);
    let scc_seconds = started.elapsed().as_secs_f64();
    info!(
        algorithm = detector.name(),
        components = partition.len(),
        seconds = scc_seconds,
        "scc computed"
    );
    emit(
        &sink,
        AppEvent::SccComputed {
            algorithm: detector.name().to_string(),
            components: partition.len(),
            cyclic_components: partition.cyclic_count(),
            largest_component: partition.largest_component(),
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "color".into(),
        },
    )
    .await;
    let colored = ComponentColorer::new().color_partition(&graph, &partition);
    for c in colored.components.iter() {
        emit(
            &sink,
            AppEvent::ComponentColored {
                index: c.index,
                size: c.component.len(),
                color: c.color.clone(),
            },
        )
        .await;
    }
    debug!(residual_edges = colored.residual_edges.len(), "colors assigned");
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "color".into(),
        },
    )
    .await;

    let stats = AnalysisStats {
        declared_vertices: declared.vertices,
        declared_edges: declared.edges,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        components: partition.len(),
        cyclic_components: partition.cyclic_count(),
        largest_component: partition.largest_component(),
        residual_edges: colored.residual_edges.len(),
        scc_seconds,
    };

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;

    Ok(Analysis {
        graph,
        declared,
        colored,
        stats,
    })
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::edge_list::parse_edge_list;
    use crate::infrastructure::scc_tarjan::TarjanSccDetector;

    #[tokio::test]
    async fn emits_events_in_pipeline_order() {
        let loaded = parse_edge_list("3 2\n0 1\n1 0\n").expect("parse");
        let (tx, mut rx) = mpsc::channel::<AppEvent>(64);

        let analysis = analyze_graph(loaded, &TarjanSccDetector, Some(tx))
            .await
            .expect("analyze");

        let mut kinds = Vec::new();
        while let Some(ev) = rx.recv().await {
            let v = serde_json::to_value(&ev).expect("serialize");
            kinds.push(v["type"].as_str().unwrap_or_default().to_string());
        }

        assert_eq!(
            kinds,
            vec![
                "GraphLoaded",
                "PhaseStarted",
                "SccComputed",
                "PhaseFinished",
                "PhaseStarted",
                "ComponentColored",
                "ComponentColored",
                "PhaseFinished",
                "Finished",
            ]
        );
        assert_eq!(analysis.stats.components, 2);
        assert_eq!(analysis.stats.cyclic_components, 1);
    }

    #[tokio::test]
    async fn graph_stats_reports_declared_counts() {
        let loaded = parse_edge_list("10 7\n1 2\n").expect("parse");
        let analysis = analyze_graph(loaded, &TarjanSccDetector, None)
            .await
            .expect("analyze");

        let stats = analysis.graph_stats();
        assert_eq!(stats.declared_vertices, 10);
        assert_eq!(stats.declared_edges, 7);
        assert_eq!(stats.components, 10);
        assert_eq!(stats.title(), "Vertices - 10, Edges - 7, Components - 10");
        assert_eq!(analysis.residual_edges().len(), 1);
    }
}
