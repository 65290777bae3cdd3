// Infrastructure layer: detectors, file adapters, serde, eventing
pub mod edge_list;
pub mod event_ndjson;
pub mod results_log;
pub mod scc_dcsc;
pub mod scc_kosaraju;
pub mod scc_tarjan;
pub mod scene_json;
pub mod schema_validator;
pub mod text_report;
