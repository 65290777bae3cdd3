use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphLoaded {
            declared_vertices,
            declared_edges,
            vertices,
            edges,
        } => {
            json!({"type":"graph_loaded","declared_vertices":declared_vertices,"declared_edges":declared_edges,"vertices":vertices,"edges":edges})
        }
        AppEvent::SccComputed {
            algorithm,
            components,
            cyclic_components,
            largest_component,
        } => {
            json!({"type":"scc_computed","algorithm":algorithm,"components":components,"cyclic_components":cyclic_components,"largest_component":largest_component})
        }
        AppEvent::ComponentColored { index, size, color } => {
            json!({"type":"component_colored","index":index,"size":size,"color":color})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
