//! Fluent builder for a validated [`Scene`].
//!
//! # Usage
//!
//! ```rust
//! use arena_core::Vec3;
//! use arena_scene::SceneBuilder;
//!
//! let mut b = SceneBuilder::new();
//! b.add_poi("knob-a", Vec3::new(0.0, 1.0, 0.0), "First knob").unwrap();
//! b.add_poi("knob-b", Vec3::new(1.0, 1.0, 0.0), "Second knob").unwrap();
//! b.add_group("knobs", &["knob-a", "knob-b"]).unwrap();
//! let scene = b.build();
//!
//! assert_eq!(scene.registry.len(), 2);
//! assert_eq!(scene.groups.len(), 1);
//! ```

use arena_core::{PoiId, Vec3};

use crate::{Poi, PoiGroup, PoiGroups, PoiRegistry, SceneError, SceneResult};

/// The registry and the group table, built together so group members are
/// guaranteed to resolve.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub registry: PoiRegistry,
    pub groups: PoiGroups,
}

/// Incrementally registers POIs and groups, rejecting duplicates.
#[derive(Default)]
pub struct SceneBuilder {
    registry: PoiRegistry,
    groups:   Vec<PoiGroup>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a POI and return its id.
    pub fn add_poi(
        &mut self,
        key:         &str,
        position:    Vec3,
        description: &str,
    ) -> SceneResult<PoiId> {
        if self.registry.contains_key(key) {
            return Err(SceneError::DuplicatePoi(key.to_owned()));
        }
        let id = PoiId::try_from(self.registry.len()).map_err(|_| SceneError::TooManyPois)?;
        self.registry.push(Poi {
            id,
            key: key.to_owned(),
            position,
            description: description.to_owned(),
        });
        Ok(id)
    }

    /// Add `members` (by key) to the group `name`, creating it if needed.
    ///
    /// Every member must already be registered and must not belong to a
    /// different group.  Re-adding a member to its own group is a no-op.
    pub fn add_group(&mut self, name: &str, members: &[&str]) -> SceneResult<()> {
        let mut ids = Vec::with_capacity(members.len());
        for &key in members {
            let id = self.registry.lookup(key).ok_or_else(|| SceneError::UnknownPoi {
                group: name.to_owned(),
                poi:   key.to_owned(),
            })?;
            if let Some(other) = self
                .groups
                .iter()
                .find(|g| g.name != name && g.members.contains(&id))
            {
                return Err(SceneError::AlreadyGrouped {
                    poi:   key.to_owned(),
                    group: other.name.clone(),
                });
            }
            ids.push(id);
        }

        let slot = match self.groups.iter().position(|g| g.name == name) {
            Some(i) => i,
            None => {
                self.groups.push(PoiGroup { name: name.to_owned(), members: Vec::new() });
                self.groups.len() - 1
            }
        };
        let group = &mut self.groups[slot];
        for id in ids {
            if !group.members.contains(&id) {
                group.members.push(id);
            }
        }
        Ok(())
    }

    /// Finish the scene.
    pub fn build(self) -> Scene {
        let poi_count = self.registry.len();
        Scene {
            registry: self.registry,
            groups:   PoiGroups::new(self.groups, poi_count),
        }
    }
}
