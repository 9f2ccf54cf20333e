//! `DialogueGenerator`: who speaks, and which line.
//!
//! Each poll an agent speaks only if it is inspecting, its cooldown has
//! elapsed, and its current POI still has an unused line for it.  Usage is
//! tracked per `(agent, POI)` pair; an exhausted pair stays silent until
//! [`reset`](DialogueGenerator::reset).

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use arena_agent::{Agent, Behavior};
use arena_core::{AgentId, ArenaConfig, PoiId, RandomSource, SimSpeed, SimTime};

use crate::DialogueBook;

/// A line chosen for an agent during a poll.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Utterance {
    pub agent: AgentId,
    pub poi: PoiId,
    /// Index into `DialogueBook::lines(poi)`.
    pub line: usize,
}

#[derive(Clone, Debug)]
pub struct DialogueGenerator {
    cooldown_min_ms: u64,
    cooldown_max_ms: u64,
    used: FxHashMap<(AgentId, PoiId), FxHashSet<usize>>,
    last_message: FxHashMap<AgentId, SimTime>,
}

impl DialogueGenerator {
    pub fn new(cooldown_min_ms: u64, cooldown_max_ms: u64) -> Self {
        Self {
            cooldown_min_ms,
            cooldown_max_ms,
            used: FxHashMap::default(),
            last_message: FxHashMap::default(),
        }
    }

    pub fn from_config(config: &ArenaConfig) -> Self {
        Self::new(config.cooldown_min_ms, config.cooldown_max_ms)
    }

    /// Forget all usage and cooldown state.
    pub fn reset(&mut self) {
        self.used.clear();
        self.last_message.clear();
    }

    /// Run one dialogue cycle over `agents` in order.
    ///
    /// A fresh cooldown is drawn for every inspecting agent, before its line
    /// is chosen.  An agent that has never spoken is always past its cooldown.
    pub fn poll<R: RandomSource>(
        &mut self,
        now:    SimTime,
        agents: &[Agent],
        book:   &DialogueBook,
        speed:  SimSpeed,
        rng:    &mut R,
    ) -> Vec<Utterance> {
        let mut out = Vec::new();
        for agent in agents {
            if agent.behavior != Behavior::Inspecting {
                continue;
            }
            let cooldown = speed.scale_ms(rng.range(
                self.cooldown_min_ms as f64,
                self.cooldown_max_ms as f64,
            ));
            if let Some(&last) = self.last_message.get(&agent.id) {
                if now.since(last) < cooldown {
                    continue;
                }
            }
            let Some(poi) = agent.target_poi else {
                continue;
            };
            let Some(line) = self.pick_line(agent.id, poi, book, rng) else {
                continue;
            };
            self.last_message.insert(agent.id, now);
            debug!(agent = %agent.name, %poi, line, "dialogue");
            out.push(Utterance { agent: agent.id, poi, line });
        }
        out
    }

    /// Draw an unused line of `poi` for `agent` and mark it used.  `None`
    /// when the POI has no lines or all have been spoken by this agent.
    pub fn pick_line<R: RandomSource>(
        &mut self,
        agent: AgentId,
        poi:   PoiId,
        book:  &DialogueBook,
        rng:   &mut R,
    ) -> Option<usize> {
        let total = book.lines(poi).len();
        if total == 0 {
            return None;
        }
        let used = self.used.entry((agent, poi)).or_default();
        let available: Vec<usize> = (0..total).filter(|i| !used.contains(i)).collect();
        let &line = rng.choose(&available)?;
        used.insert(line);
        Some(line)
    }

    /// Number of lines `agent` has already spoken about `poi`.
    pub fn used_count(&self, agent: AgentId, poi: PoiId) -> usize {
        self.used.get(&(agent, poi)).map_or(0, FxHashSet::len)
    }

    /// `true` once every line of `poi` has been spoken by `agent`.
    pub fn is_exhausted(&self, agent: AgentId, poi: PoiId, book: &DialogueBook) -> bool {
        self.used_count(agent, poi) >= book.lines(poi).len()
    }

    pub fn last_message_at(&self, agent: AgentId) -> Option<SimTime> {
        self.last_message.get(&agent).copied()
    }
}
