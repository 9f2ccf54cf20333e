use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("duplicate agent key {0:?}")]
    DuplicateAgent(String),

    #[error("too many agents for an AgentId")]
    TooManyAgents,
}

pub type AgentResult<T> = Result<T, AgentError>;
