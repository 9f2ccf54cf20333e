//! `arena-scene`: the static scene the review agents walk around.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`registry`]    | `Poi`, `PoiRegistry`: id → position + description         |
//! | [`groups`]      | `PoiGroup`, `PoiGroups`: the fixed partition into clusters |
//! | [`builder`]     | `SceneBuilder`, `Scene` (registry + groups, validated)     |
//! | [`synthesizer`] | The built-in synthesizer assembly scene                    |
//! | [`loader`]      | `load_scene_csv`, `load_scene_reader`                      |
//! | [`error`]       | `SceneError`, `SceneResult<T>`                             |
//!
//! Everything here is immutable once built.  The simulation only reads it.

pub mod builder;
pub mod error;
pub mod groups;
pub mod loader;
pub mod registry;
pub mod synthesizer;


pub use builder::{Scene, SceneBuilder};
pub use error::{SceneError, SceneResult};
pub use groups::{PoiGroup, PoiGroups};
pub use loader::{load_scene_csv, load_scene_reader};
pub use registry::{Poi, PoiRegistry};
pub use synthesizer::synthesizer_scene;
