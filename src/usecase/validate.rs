use crate::domain::color::ColorSequence;
use crate::domain::graph::Vertex;
use crate::infrastructure::scene_json::SceneDto;
use crate::infrastructure::schema_validator::validate_scene_document;
use anyhow::{anyhow, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Checks a render scene: schema first, then the partition, edge and color invariants.
///
/// Component `i` must carry the `i`-th draw of a fresh [`ColorSequence`]. Hex values are
/// distinct over the first 613 draws; past that the palette wraps at 8-bit resolution.
pub fn validate_scene(scene: &SceneDto) -> Result<()> {
    let value = serde_json::to_value(scene)?;
    validate_scene_document(&value)?;

    if scene.stats.components != scene.components.len() {
        return Err(anyhow!(
            "stats report {} components but scene lists {}",
            scene.stats.components,
            scene.components.len()
        ));
    }

    let mut owner: BTreeMap<Vertex, usize> = BTreeMap::new();
    let mut palette = ColorSequence::new();

    for (position, comp) in scene.components.iter().enumerate() {
        if comp.index != position {
            return Err(anyhow!(
                "component at position {position} has index {}",
                comp.index
            ));
        }

        let expected = palette.next_color();
        if comp.color != expected {
            return Err(anyhow!(
                "component {} has color {}, expected {expected}",
                comp.index,
                comp.color
            ));
        }

        for &v in comp.vertices.iter() {
            if let Some(prev) = owner.insert(v, comp.index) {
                return Err(anyhow!(
                    "vertex {v} appears in components {prev} and {}",
                    comp.index
                ));
            }
        }
    }

    let mut internal: BTreeSet<(Vertex, Vertex)> = BTreeSet::new();
    for comp in scene.components.iter() {
        for &(x, y) in comp.internal_edges.iter() {
            let (cx, cy) = (owner.get(&x), owner.get(&y));
            if cx != Some(&comp.index) || cy != Some(&comp.index) {
                return Err(anyhow!(
                    "internal edge ({x}, {y}) of component {} leaves the component",
                    comp.index
                ));
            }
            internal.insert((x, y));
        }
    }

    for &(x, y) in scene.residual_edges.iter() {
        let (Some(cx), Some(cy)) = (owner.get(&x), owner.get(&y)) else {
            return Err(anyhow!("residual edge ({x}, {y}) references an unknown vertex"));
        };
        if cx == cy {
            return Err(anyhow!("residual edge ({x}, {y}) lies inside component {cx}"));
        }
        if internal.contains(&(x, y)) {
            return Err(anyhow!("edge ({x}, {y}) is both internal and residual"));
        }
    }

    Ok(())
}
