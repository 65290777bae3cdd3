use crate::usecase::stats::AnalysisStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        declared_vertices: usize,
        declared_edges: usize,
        vertices: usize,
        edges: usize,
    },

    SccComputed {
        algorithm: String,
        components: usize,
        cyclic_components: usize,
        largest_component: usize,
    },

    ComponentColored {
        index: usize,
        size: usize,
        color: String,
    },

    Finished {
        stats: AnalysisStats,
    },
}
