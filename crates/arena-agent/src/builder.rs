//! Fluent builder for the initial agent population.
//!
//! # Usage
//!
//! ```rust
//! use arena_agent::{AgentSpec, AgentStoreBuilder};
//! use arena_core::{PoiId, Vec3};
//!
//! let store = AgentStoreBuilder::new()
//!     .agent(AgentSpec::new("agent-alpha", "Alpha", "#4F46E5")
//!         .at(Vec3::new(-1.5, 1.5, 2.0))
//!         .looking_at(Vec3::new(-1.5, 0.8, 0.8))
//!         .targeting(PoiId(3)))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.len(), 1);
//! ```

use std::collections::BTreeMap;

use arena_core::{AgentId, PoiId, Vec3};

use crate::{Agent, AgentError, AgentResult, AgentStore, Behavior};

/// Static description of one agent at session start.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSpec {
    pub key: String,
    pub name: String,
    pub color: String,
    pub position: Vec3,
    pub look_at: Vec3,
    pub target_poi: Option<PoiId>,
}

impl AgentSpec {
    pub fn new(key: &str, name: &str, color: &str) -> Self {
        Self {
            key:        key.to_owned(),
            name:       name.to_owned(),
            color:      color.to_owned(),
            position:   Vec3::ZERO,
            look_at:    Vec3::ZERO,
            target_poi: None,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn looking_at(mut self, look_at: Vec3) -> Self {
        self.look_at = look_at;
        self
    }

    pub fn targeting(mut self, poi: PoiId) -> Self {
        self.target_poi = Some(poi);
        self
    }
}

/// Collects [`AgentSpec`]s and produces an [`AgentStore`] with every agent
/// `Idle`, not following anyone, with empty dwell maps.
#[derive(Default)]
pub struct AgentStoreBuilder {
    specs: Vec<AgentSpec>,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agent(mut self, spec: AgentSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn agents(mut self, specs: impl IntoIterator<Item = AgentSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Assign ids in insertion order and build the store.
    pub fn build(self) -> AgentResult<AgentStore> {
        let mut agents: Vec<Agent> = Vec::with_capacity(self.specs.len());
        for (i, spec) in self.specs.into_iter().enumerate() {
            if agents.iter().any(|a| a.key == spec.key) {
                return Err(AgentError::DuplicateAgent(spec.key));
            }
            let id = AgentId::try_from(i).map_err(|_| AgentError::TooManyAgents)?;
            agents.push(Agent {
                id,
                key:         spec.key,
                name:        spec.name,
                color:       spec.color,
                position:    spec.position,
                look_at:     spec.look_at,
                behavior:    Behavior::Idle,
                target_poi:  spec.target_poi,
                dwell:       BTreeMap::new(),
                following:   None,
                merged_with: Vec::new(),
            });
        }
        Ok(AgentStore::new(agents))
    }
}
