use crate::usecase::stats::AnalysisStats;
use anyhow::Result;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// `<graph> <declared V> <declared E> <components> <largest> <seconds>`
pub fn results_line(graph_name: &str, stats: &AnalysisStats) -> String {
    format!(
        "{} {} {} {} {} {:.6}",
        graph_name,
        stats.declared_vertices,
        stats.declared_edges,
        stats.components,
        stats.largest_component,
        stats.scc_seconds
    )
}

/// Appends one line per run, creating the file on first use.
pub async fn append_results(path: &str, graph_name: &str, stats: &AnalysisStats) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    let line = results_line(graph_name, stats);
    file.write_all(line.as_bytes()).await?;
    file.write_all(b"\n").await?;
    file.flush().await?;
    Ok(())
}
