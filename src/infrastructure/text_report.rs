use crate::usecase::analyze::Analysis;
use std::io::{self, Write};

/// Human-readable summary followed by one block per component.
pub fn write_text_report<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    let stats = &analysis.stats;

    writeln!(out, "Graph Info:")?;
    writeln!(
        out,
        "\tVertices - {}, Edges - {}",
        stats.declared_vertices, stats.declared_edges
    )?;
    writeln!(
        out,
        "\tNo. of strongly connected components - {}",
        stats.components
    )?;
    writeln!(
        out,
        "\tNo. of vertices in largest strongly connected component - {}",
        stats.largest_component
    )?;
    writeln!(out, "\tProcessing time - {:.6} seconds", stats.scc_seconds)?;
    writeln!(out)?;

    for c in analysis.components() {
        let members: Vec<String> = c.component.vertices.iter().map(|v| v.to_string()).collect();
        writeln!(out, "Component No. - {}", c.index + 1)?;
        writeln!(out, "Component Size - {}", c.component.len())?;
        writeln!(out, "Color - {}", c.color)?;
        writeln!(out, "\t{}", members.join(" "))?;
    }

    Ok(())
}
