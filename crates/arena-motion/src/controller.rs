//! `MotionController` and its two-phase tick.

use tracing::trace;

use arena_agent::{Agent, AgentStore, Behavior};
use arena_core::{AgentId, PoiId, SimSpeed, Vec3, geo::approach};
use arena_scene::PoiRegistry;

use crate::{FormationAnchor, MotionParams};

// ── Intents ───────────────────────────────────────────────────────────────────

/// One agent's computed update for this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionIntent {
    pub agent: AgentId,
    pub position: Vec3,
    pub look_at: Vec3,
    pub behavior: Behavior,
    /// Inspection seconds to credit, if the agent was inspecting.
    pub dwell: Option<(PoiId, f32)>,
}

/// A behavior transition performed by the apply phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BehaviorChange {
    pub agent: AgentId,
    pub from: Behavior,
    pub to: Behavior,
}

// ── MotionController ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct MotionController {
    params: MotionParams,
}

impl MotionController {
    pub fn new(params: MotionParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    /// Run both phases for every agent.  Returns the behavior transitions in
    /// ascending `AgentId` order.
    pub fn tick(
        &self,
        store:     &mut AgentStore,
        registry:  &PoiRegistry,
        formation: Option<&FormationAnchor>,
        dt_secs:   f32,
        speed:     SimSpeed,
    ) -> Vec<BehaviorChange> {
        let intents = self.compute_intents(store, registry, formation, dt_secs, speed);
        Self::apply_intents(store, intents)
    }

    // ── Phase 1: intents ──────────────────────────────────────────────────

    /// Compute every agent's intent from the current store snapshot.
    pub fn compute_intents(
        &self,
        store:     &AgentStore,
        registry:  &PoiRegistry,
        formation: Option<&FormationAnchor>,
        dt_secs:   f32,
        speed:     SimSpeed,
    ) -> Vec<MotionIntent> {
        let agents = store.agents();
        let scaled_dt = if dt_secs.is_finite() && dt_secs > 0.0 {
            dt_secs * speed.factor()
        } else {
            0.0
        };

        #[cfg(not(feature = "parallel"))]
        {
            agents
                .iter()
                .enumerate()
                .map(|(rank, agent)| self.plan(agent, rank, agents, registry, formation, scaled_dt))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            agents
                .par_iter()
                .enumerate()
                .map(|(rank, agent)| self.plan(agent, rank, agents, registry, formation, scaled_dt))
                .collect()
        }
    }

    /// Where `agent` wants to stand and look this frame.
    ///
    /// Following takes precedence over formation, formation over the target
    /// POI.  An unknown leader or POI resolves to the agent's current pose.
    pub fn desired_pose(
        &self,
        agent:     &Agent,
        rank:      usize,
        agents:    &[Agent],
        registry:  &PoiRegistry,
        formation: Option<&FormationAnchor>,
    ) -> (Vec3, Vec3) {
        let hold = (agent.position, agent.look_at);

        if let Some(leader) = agent.following {
            return agents
                .get(leader.index())
                .map(|l| (l.position + self.params.follow_offset, l.look_at))
                .unwrap_or(hold);
        }
        if let Some(anchor) = formation {
            return (anchor.slot(rank, &self.params), anchor.target);
        }
        agent
            .target_poi
            .and_then(|poi| registry.position(poi))
            .map(|p| (p + self.params.poi_standoff, p))
            .unwrap_or(hold)
    }

    fn plan(
        &self,
        agent:     &Agent,
        rank:      usize,
        agents:    &[Agent],
        registry:  &PoiRegistry,
        formation: Option<&FormationAnchor>,
        scaled_dt: f32,
    ) -> MotionIntent {
        let (target_pos, target_gaze) = self.desired_pose(agent, rank, agents, registry, formation);
        let distance = agent.position.distance(target_pos);

        let mut position = agent.position;
        let mut behavior = agent.behavior;
        if distance > self.params.arrival_threshold {
            position = approach(position, target_pos, self.params.move_rate * scaled_dt);
            if !matches!(behavior, Behavior::Moving | Behavior::Following) {
                behavior = Behavior::Moving;
            }
        } else if behavior == Behavior::Moving {
            behavior = Behavior::Inspecting;
        }

        let look_at = approach(agent.look_at, target_gaze, self.params.gaze_rate * scaled_dt);

        let dwell = match (agent.behavior, agent.target_poi) {
            (Behavior::Inspecting, Some(poi)) if scaled_dt > 0.0 => Some((poi, scaled_dt)),
            _ => None,
        };

        MotionIntent { agent: agent.id, position, look_at, behavior, dwell }
    }

    // ── Phase 2: apply ────────────────────────────────────────────────────

    /// Write `intents` through the store's named operations, in order.
    pub fn apply_intents(store: &mut AgentStore, intents: Vec<MotionIntent>) -> Vec<BehaviorChange> {
        let mut changes = Vec::new();
        for intent in intents {
            let Some(from) = store.get(intent.agent).map(|a| a.behavior) else {
                continue;
            };
            store.update_position(intent.agent, intent.position);
            store.update_look_at(intent.agent, intent.look_at);
            if let Some((poi, secs)) = intent.dwell {
                store.add_dwell(intent.agent, poi, secs);
            }
            if from != intent.behavior {
                store.update_behavior(intent.agent, intent.behavior);
                trace!(agent = %intent.agent, %from, to = %intent.behavior, "motion transition");
                changes.push(BehaviorChange { agent: intent.agent, from, to: intent.behavior });
            }
        }
        changes
    }
}
