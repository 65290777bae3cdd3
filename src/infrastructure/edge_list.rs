use crate::domain::error::GraphError;
use crate::domain::graph::{Graph, Vertex};
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// Upper bound on isolated vertices added to honour the declared vertex count.
pub const MAX_PADDED_VERTICES: usize = 1 << 20;

/// Header counts. Advisory only; never checked against the parsed content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclaredCounts {
    pub vertices: usize,
    pub edges: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub declared: DeclaredCounts,
}

pub async fn load_graph(path: impl AsRef<Path>) -> Result<LoadedGraph, GraphError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| GraphError::file_access(path, e))?;
    debug!(path = %path.display(), bytes = raw.len(), "read edge list");
    parse_edge_list(&raw)
}

/// Parses `<vertices> <edges>` followed by one `<x> <y>` edge per line. Blank lines are
/// skipped anywhere.
///
/// Declared vertices that no edge mentions are added as isolated vertices, taking the
/// lowest unused non-negative ids until the declared count is reached, adding at most
/// [`MAX_PADDED_VERTICES`] of them.
pub fn parse_edge_list(input: &str) -> Result<LoadedGraph, GraphError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((header_no, header)) = lines.next() else {
        return Err(GraphError::malformed(1, "", "missing header line"));
    };
    let (vertices, edges) = parse_pair::<usize>(header_no, header, "header")?;
    let declared = DeclaredCounts { vertices, edges };

    let mut graph = Graph::new();
    for (line_no, line) in lines {
        let (x, y) = parse_pair::<Vertex>(line_no, line, "edge")?;
        graph.add_edge(x, y);
    }

    pad_declared_vertices(&mut graph, declared.vertices, MAX_PADDED_VERTICES);

    if graph.vertex_count() != declared.vertices || graph.edge_count() != declared.edges {
        warn!(
            declared_vertices = declared.vertices,
            declared_edges = declared.edges,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "edge list content differs from header counts"
        );
    }

    Ok(LoadedGraph { graph, declared })
}

fn pad_declared_vertices(graph: &mut Graph, declared: usize, max_padding: usize) {
    let target = declared.min(graph.vertex_count().saturating_add(max_padding));
    if target < declared {
        warn!(
            declared_vertices = declared,
            padded_to = target,
            "declared vertex count exceeds padding limit"
        );
    }

    let mut candidate: Vertex = 0;
    while graph.vertex_count() < target {
        graph.add_vertex(candidate);
        candidate += 1;
    }
}

fn parse_pair<T: std::str::FromStr>(
    line_no: usize,
    line: &str,
    what: &str,
) -> Result<(T, T), GraphError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [a, b] = tokens.as_slice() else {
        return Err(GraphError::malformed(
            line_no,
            line,
            format!("{what} needs 2 integer tokens, found {}", tokens.len()),
        ));
    };

    let parse = |tok: &str| {
        tok.parse::<T>().map_err(|_| {
            let reason = format!("{what} token {tok:?} is not a valid integer");
            GraphError::malformed(line_no, line, reason)
        })
    };
    Ok((parse(*a)?, parse(*b)?))
}
