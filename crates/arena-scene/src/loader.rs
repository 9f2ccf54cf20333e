//! CSV scene loader.
//!
//! # CSV format
//!
//! One row per POI.  `group` may be empty for an ungrouped POI.
//!
//! ```csv
//! poi,group,x,y,z,description
//! osc-1-knob,oscillators,-1.5,0.8,0.8,Oscillator 1 frequency control
//! osc-2-knob,oscillators,-0.8,0.8,0.8,Oscillator 2 frequency control
//! usb-port,,1.0,-0.3,-1.2,USB connectivity port
//! ```
//!
//! POIs are registered in file order, so `PoiId(n)` is the n-th data row.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use arena_core::Vec3;

use crate::{Scene, SceneBuilder, SceneError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PoiRecord {
    poi:         String,
    #[serde(default)]
    group:       String,
    x:           f32,
    y:           f32,
    z:           f32,
    #[serde(default)]
    description: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scene from a CSV file.
pub fn load_scene_csv(path: &Path) -> Result<Scene, SceneError> {
    let file = std::fs::File::open(path).map_err(SceneError::Io)?;
    load_scene_reader(file)
}

/// Like [`load_scene_csv`] but accepts any `Read` source.
pub fn load_scene_reader<R: Read>(reader: R) -> Result<Scene, SceneError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = SceneBuilder::new();

    for result in csv_reader.deserialize::<PoiRecord>() {
        let row = result.map_err(|e| SceneError::Parse(e.to_string()))?;
        let key = row.poi.trim();
        if key.is_empty() {
            return Err(SceneError::Parse("empty POI key".into()));
        }
        builder.add_poi(key, Vec3::new(row.x, row.y, row.z), row.description.trim())?;

        let group = row.group.trim();
        if !group.is_empty() {
            builder.add_group(group, &[key])?;
        }
    }

    Ok(builder.build())
}
