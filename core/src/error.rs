use crate::types::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorldError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Coordinate ({x}|{y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("Entity {id} is not registered")]
    EntityNotRegistered { id: EntityId },

    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
