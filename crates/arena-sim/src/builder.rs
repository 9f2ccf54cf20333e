//! Fluent builder for constructing a [`Session`].

use arena_agent::{AgentSpec, AgentStoreBuilder};
use arena_camera::CameraRig;
use arena_core::{AgentId, ArenaConfig, RandomSource, SimClock, SimRng, Vec3};
use arena_dialogue::{DialogueBook, DialogueGenerator, InsightExtractor, Transcript};
use arena_motion::{MotionController, MotionParams};
use arena_scene::{Scene, synthesizer_scene};
use arena_schedule::{EventQueue, RetargetPolicy};

use crate::{NoopObserver, Session, SessionError, SessionObserver, SessionResult};

/// Offset of each built-in agent's starting position from its first POI.
const START_OFFSET: Vec3 = Vec3::new(0.0, 0.7, 1.2);

/// `(key, name, color, first POI)` of the built-in reviewers.
const SYNTHESIZER_AGENTS: &[(&str, &str, &str, &str)] = &[
    ("agent-alpha", "Alpha", "#4F46E5", "osc-1-knob"),
    ("agent-beta",  "Beta",  "#10B981", "filter-cutoff"),
    ("agent-gamma", "Gamma", "#F59E0B", "master-volume"),
];

/// The three built-in reviewers, each idle just above and in front of its
/// first POI and looking at it.
pub fn synthesizer_agents(scene: &Scene) -> SessionResult<Vec<AgentSpec>> {
    SYNTHESIZER_AGENTS
        .iter()
        .map(|&(key, name, color, poi_key)| {
            let poi = scene
                .registry
                .lookup(poi_key)
                .ok_or_else(|| SessionError::MissingPoi(poi_key.to_owned()))?;
            let at = scene.registry.position(poi).unwrap_or(Vec3::ZERO);
            Ok(AgentSpec::new(key, name, color)
                .at(at + START_OFFSET)
                .looking_at(at)
                .targeting(poi))
        })
        .collect()
}

/// Fluent builder for [`Session`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                    |
/// |-------------------------|--------------------------------------------|
/// | `.config(c)`            | `ArenaConfig::default()`                   |
/// | `.agents(v)`            | none; required unless `synthesizer()`     |
/// | `.book(b)`              | empty book (nobody speaks)                 |
/// | `.extractor(x)`         | `InsightExtractor::default()`              |
/// | `.follow(f, l)`         | no follow relations                        |
/// | `.split_agent(key)`     | the first agent                            |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::synthesizer()?
///     .config(ArenaConfig { seed: Some(7), ..ArenaConfig::default() })
///     .build()?;
/// ```
pub struct SessionBuilder {
    scene:       Scene,
    config:      ArenaConfig,
    agents:      Vec<AgentSpec>,
    book:        DialogueBook,
    extractor:   InsightExtractor,
    follows:     Vec<(String, String)>,
    split_agent: Option<String>,
}

impl SessionBuilder {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            config:      ArenaConfig::default(),
            agents:      Vec::new(),
            book:        DialogueBook::new(),
            extractor:   InsightExtractor::default(),
            follows:     Vec::new(),
            split_agent: None,
        }
    }

    /// The built-in synthesizer scene with its dialogue book and three
    /// reviewers.
    pub fn synthesizer() -> SessionResult<Self> {
        let scene = synthesizer_scene()?;
        let book = DialogueBook::synthesizer(&scene.registry)?;
        let agents = synthesizer_agents(&scene)?;
        Ok(Self::new(scene).book(book).agents(agents))
    }

    pub fn config(mut self, config: ArenaConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the agent list.
    pub fn agents(mut self, agents: Vec<AgentSpec>) -> Self {
        self.agents = agents;
        self
    }

    pub fn agent(mut self, agent: AgentSpec) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn book(mut self, book: DialogueBook) -> Self {
        self.book = book;
        self
    }

    pub fn extractor(mut self, extractor: InsightExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Start with agent `follower` following agent `leader` (by key).
    pub fn follow(mut self, follower: &str, leader: &str) -> Self {
        self.follows.push((follower.to_owned(), leader.to_owned()));
        self
    }

    /// Agent shown in the split-screen secondary view (by key).
    pub fn split_agent(mut self, key: &str) -> Self {
        self.split_agent = Some(key.to_owned());
        self
    }

    /// Build with a `SimRng` seeded from `config.seed` and no observer.
    pub fn build(self) -> SessionResult<Session<SimRng, NoopObserver>> {
        let rng = SimRng::from_seed_opt(self.config.seed);
        self.build_with(rng, NoopObserver)
    }

    /// Validate inputs and return a stopped session using `rng` for every
    /// random choice and reporting to `observer`.
    pub fn build_with<R: RandomSource, O: SessionObserver>(
        self,
        rng:      R,
        observer: O,
    ) -> SessionResult<Session<R, O>> {
        self.config.validate()?;
        if self.agents.is_empty() {
            return Err(SessionError::NoAgents);
        }
        for spec in &self.agents {
            if let Some(poi) = spec.target_poi {
                if self.scene.registry.get(poi).is_none() {
                    return Err(SessionError::UnknownPoi { agent: spec.key.clone(), poi });
                }
            }
        }

        let mut agents = AgentStoreBuilder::new().agents(self.agents).build()?;

        let resolve = |key: &str, agents: &arena_agent::AgentStore| {
            agents.find(key).ok_or_else(|| SessionError::UnknownAgent(key.to_owned()))
        };
        for (follower, leader) in &self.follows {
            let f = resolve(follower, &agents)?;
            let l = resolve(leader, &agents)?;
            if !agents.set_following(f, Some(l)) {
                return Err(SessionError::InvalidFollow {
                    follower: follower.clone(),
                    leader:   leader.clone(),
                });
            }
        }
        let split_agent: Option<AgentId> = match &self.split_agent {
            Some(key) => Some(resolve(key, &agents)?),
            None => agents.ids().next(),
        };

        Ok(Session {
            speed:       self.config.speed,
            retarget:    RetargetPolicy::from_config(&self.config),
            generator:   DialogueGenerator::from_config(&self.config),
            motion:      MotionController::new(MotionParams::from_config(&self.config)),
            config:      self.config,
            scene:       self.scene,
            agents,
            book:        self.book,
            extractor:   self.extractor,
            transcript:  Transcript::new(),
            camera:      CameraRig::new(),
            queue:       EventQueue::new(),
            clock:       SimClock::new(),
            rng,
            observer,
            running:     false,
            split_agent,
            selected:    None,
            hovered:     None,
        })
    }
}
