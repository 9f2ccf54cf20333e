//! `AgentStore`: canonical mutable state for every agent.

use tracing::debug;

use arena_core::{AgentId, PoiId, Vec3};

use crate::{Agent, Behavior};

/// Owns every [`Agent`] record.  `AgentId(n)` is the n-th agent.
///
/// All writes are named operations.  Each returns `true` when it changed the
/// store and `false` when it was a no-op (unknown id, rejected relation, …);
/// callers that don't care may ignore the result.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    pub(crate) fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Read-only snapshot of every agent, indexed by `AgentId`.
    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(|a| a.id)
    }

    /// Resolve an external key such as `"agent-beta"`.
    pub fn find(&self, key: &str) -> Option<AgentId> {
        self.agents.iter().find(|a| a.key == key).map(|a| a.id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    // ── Pose and state updates ────────────────────────────────────────────

    pub fn update_position(&mut self, id: AgentId, position: Vec3) -> bool {
        match self.agents.get_mut(id.index()) {
            Some(a) => {
                a.position = position;
                true
            }
            None => false,
        }
    }

    pub fn update_look_at(&mut self, id: AgentId, look_at: Vec3) -> bool {
        match self.agents.get_mut(id.index()) {
            Some(a) => {
                a.look_at = look_at;
                true
            }
            None => false,
        }
    }

    pub fn update_behavior(&mut self, id: AgentId, behavior: Behavior) -> bool {
        let Some(a) = self.agents.get_mut(id.index()) else {
            return false;
        };
        if a.behavior != behavior {
            debug!(agent = %a.name, from = %a.behavior, to = %behavior, "behavior transition");
            a.behavior = behavior;
        }
        true
    }

    /// Add `secs` of inspection time at `poi`.  Non-positive or non-finite
    /// amounts are ignored so the accumulator never decreases.
    pub fn add_dwell(&mut self, id: AgentId, poi: PoiId, secs: f32) -> bool {
        if !(secs.is_finite() && secs > 0.0) {
            return false;
        }
        match self.agents.get_mut(id.index()) {
            Some(a) => {
                *a.dwell.entry(poi).or_insert(0.0) += secs;
                true
            }
            None => false,
        }
    }

    // ── Target and follow assignment ──────────────────────────────────────

    /// Assign a new target POI.
    ///
    /// A free agent switches to `Moving`.  A following agent only remembers
    /// the target for when it is released; its pose stays derived from the
    /// agent it follows.
    pub fn set_target(&mut self, id: AgentId, poi: PoiId) -> bool {
        let Some(a) = self.agents.get_mut(id.index()) else {
            return false;
        };
        a.target_poi = Some(poi);
        if a.following.is_none() {
            if a.behavior != Behavior::Moving {
                debug!(agent = %a.name, from = %a.behavior, %poi, "retargeted");
            }
            a.behavior = Behavior::Moving;
        }
        true
    }

    /// Make `follower` follow `leader`, or release it with `None`.
    ///
    /// Rejected (no-op) when either id is unknown, when an agent would follow
    /// itself, when `leader` is itself following someone, or when `follower`
    /// is being followed.  Switching leaders moves the follower's name from
    /// the old leader's `merged_with` to the new one's.
    pub fn set_following(&mut self, follower: AgentId, leader: Option<AgentId>) -> bool {
        let Some(current) = self.get(follower) else {
            return false;
        };
        let previous = current.following;

        match leader {
            None => {
                let Some(old) = previous else {
                    return false;
                };
                let name = current.name.clone();
                self.unmerge(old, &name);
                let a = &mut self.agents[follower.index()];
                a.following = None;
                a.behavior = Behavior::Moving;
                debug!(agent = %name, "released from follow");
                true
            }
            Some(leader) => {
                if leader == follower || !current.merged_with.is_empty() {
                    return false;
                }
                match self.get(leader) {
                    Some(l) if l.following.is_none() => {}
                    _ => return false,
                }
                if previous == Some(leader) {
                    return true;
                }

                let name = current.name.clone();
                if let Some(old) = previous {
                    self.unmerge(old, &name);
                }
                let a = &mut self.agents[follower.index()];
                a.following = Some(leader);
                a.behavior = Behavior::Following;
                let l = &mut self.agents[leader.index()];
                l.merged_with.push(name.clone());
                debug!(agent = %name, leader = %l.name, "following");
                true
            }
        }
    }

    fn unmerge(&mut self, leader: AgentId, name: &str) {
        if let Some(l) = self.agents.get_mut(leader.index()) {
            l.merged_with.retain(|n| n != name);
        }
    }
}
