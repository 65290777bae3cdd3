use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static SCENE_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/scene_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid scene schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile scene schema")
});

/// Validate a render scene document against the scene schema
pub fn validate_scene_document(scene: &Value) -> Result<()> {
    match SCENE_SCHEMA.validate(scene) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Scene validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_minimal_scene() {
        let scene = json!({
            "title": "Vertices - 0, Edges - 0, Components - 0",
            "stats": {"declared_vertices": 0, "declared_edges": 0, "components": 0},
            "components": [],
            "residual_edges": []
        });
        validate_scene_document(&scene).expect("valid");
    }

    #[test]
    fn rejects_uppercase_or_short_color() {
        let scene = json!({
            "title": "t",
            "stats": {"declared_vertices": 1, "declared_edges": 0, "components": 1},
            "components": [{"index": 0, "color": "#ABC", "vertices": [0]}],
            "residual_edges": []
        });
        let err = validate_scene_document(&scene).unwrap_err().to_string();
        assert!(err.contains("Scene validation failed"));
    }

    #[test]
    fn rejects_three_element_edge() {
        let scene = json!({
            "title": "t",
            "stats": {"declared_vertices": 2, "declared_edges": 1, "components": 2},
            "components": [],
            "residual_edges": [[0, 1, 2]]
        });
        assert!(validate_scene_document(&scene).is_err());
    }
}
