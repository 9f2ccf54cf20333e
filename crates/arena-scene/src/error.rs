//! Scene error type.

use thiserror::Error;

/// Errors produced while building or loading a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("duplicate POI key {0:?}")]
    DuplicatePoi(String),

    #[error("group {group:?} references unknown POI {poi:?}")]
    UnknownPoi { group: String, poi: String },

    #[error("POI {poi:?} is already a member of group {group:?}")]
    AlreadyGrouped { poi: String, group: String },

    #[error("scene has more POIs than a PoiId can address")]
    TooManyPois,

    #[error("scene parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;
