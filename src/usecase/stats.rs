use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisStats {
    pub declared_vertices: usize,
    pub declared_edges: usize,
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
    pub cyclic_components: usize,
    pub largest_component: usize,
    pub residual_edges: usize,
    pub scc_seconds: f64,
}

/// What a renderer needs for its title line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub declared_vertices: usize,
    pub declared_edges: usize,
    pub components: usize,
}

impl GraphStats {
    pub fn title(&self) -> String {
        format!(
            "Vertices - {}, Edges - {}, Components - {}",
            self.declared_vertices, self.declared_edges, self.components
        )
    }
}
