use crate::domain::color::ColorSequence;
use crate::domain::graph::{Component, Edge, Graph};
use crate::domain::traits::SccDetector;
use crate::usecase::scc::{strongly_connected_components, Partition};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredComponent {
    pub index: usize,
    pub component: Component,
    pub color: String,
    /// Edges with both endpoints inside this component.
    pub internal_edges: BTreeSet<Edge>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColoredGraph {
    pub components: Vec<ColoredComponent>,
    /// Edges joining two different components.
    pub residual_edges: BTreeSet<Edge>,
}

impl ColoredGraph {
    pub fn color_of(&self, index: usize) -> Option<&str> {
        self.components.get(index).map(|c| c.color.as_str())
    }
}

/// Pairs each component with the next color of a sequence it owns exclusively.
#[derive(Debug, Default)]
pub struct ComponentColorer {
    colors: ColorSequence,
}

impl ComponentColorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(colors: ColorSequence) -> Self {
        Self { colors }
    }

    /// Decomposes and colors in one step.
    pub fn assign_colors(self, graph: &Graph, detector: &dyn SccDetector) -> ColoredGraph {
        let partition = strongly_connected_components(graph, detector);
        self.color_partition(graph, &partition)
    }

    /// Draws exactly one color per component, in partition order.
    pub fn color_partition(mut self, graph: &Graph, partition: &Partition) -> ColoredGraph {
        let mut internal: Vec<BTreeSet<Edge>> = vec![BTreeSet::new(); partition.len()];
        for (x, y) in graph.edges() {
            match (partition.component_of(x), partition.component_of(y)) {
                (Some(cx), Some(cy)) if cx == cy => {
                    internal[cx].insert((x, y));
                }
                _ => {}
            }
        }

        let components: Vec<ColoredComponent> = partition
            .components
            .iter()
            .zip(internal)
            .enumerate()
            .map(|(index, (component, internal_edges))| ColoredComponent {
                index,
                component: component.clone(),
                color: self.colors.next_color(),
                internal_edges,
            })
            .collect();

        let mut residual_edges: BTreeSet<Edge> = graph.edges().collect();
        for c in components.iter() {
            for e in c.internal_edges.iter() {
                residual_edges.remove(e);
            }
        }

        ColoredGraph {
            components,
            residual_edges,
        }
    }
}
