use arena_agent::AgentError;
use arena_core::{ArenaError, PoiId};
use arena_dialogue::DialogueError;
use arena_scene::SceneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("configuration error: {0}")]
    Config(#[from] ArenaError),

    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("dialogue error: {0}")]
    Dialogue(#[from] DialogueError),

    #[error("a session needs at least one agent")]
    NoAgents,

    #[error("agent {agent:?} targets {poi}, which is not in the scene")]
    UnknownPoi { agent: String, poi: PoiId },

    #[error("scene has no POI {0:?}")]
    MissingPoi(String),

    #[error("unknown agent key {0:?}")]
    UnknownAgent(String),

    #[error("agent {follower:?} cannot follow {leader:?}")]
    InvalidFollow { follower: String, leader: String },
}

pub type SessionResult<T> = Result<T, SessionError>;
