use crate::domain::graph::{Edge, Vertex};
use crate::usecase::analyze::Analysis;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Document handed to the external renderer: colored components plus the edges between them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SceneDto {
    pub title: String,
    pub stats: SceneStatsDto,
    #[serde(default)]
    pub components: Vec<SceneComponentDto>,
    #[serde(default)]
    pub residual_edges: Vec<Edge>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SceneStatsDto {
    pub declared_vertices: usize,
    pub declared_edges: usize,
    pub components: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SceneComponentDto {
    pub index: usize,
    pub color: String,
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub internal_edges: Vec<Edge>,
}

impl SceneDto {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let stats = analysis.graph_stats();
        Self {
            title: stats.title(),
            stats: SceneStatsDto {
                declared_vertices: stats.declared_vertices,
                declared_edges: stats.declared_edges,
                components: stats.components,
            },
            components: analysis
                .components()
                .iter()
                .map(|c| SceneComponentDto {
                    index: c.index,
                    color: c.color.clone(),
                    vertices: c.component.vertices.iter().copied().collect(),
                    internal_edges: c.internal_edges.iter().copied().collect(),
                })
                .collect(),
            residual_edges: analysis.residual_edges().iter().copied().collect(),
        }
    }
}

pub async fn read_scene_file(path: &str) -> Result<SceneDto> {
    let raw = fs::read_to_string(path).await?;
    let dto: SceneDto = serde_json::from_str(&raw)?;
    Ok(dto)
}

pub async fn write_scene_file(path: &str, dto: &SceneDto) -> Result<()> {
    let pretty = serde_json::to_string_pretty(dto)?;
    fs::write(path, pretty).await?;
    Ok(())
}
