use thiserror::Error;

#[derive(Debug, Error)]
pub enum DialogueError {
    #[error("dialogue lines given for unknown POI {0:?}")]
    UnknownPoi(String),
}

pub type DialogueResult<T> = Result<T, DialogueError>;
