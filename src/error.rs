//! Error types
//!
//! Everything that can go wrong while configuring a generator.

use std::path::PathBuf;

use thiserror::Error;

/// Smallest room edge the generator can wall and label correctly
pub const MIN_ROOM_SIZE_FLOOR: i32 = 5;

/// Errors raised while configuring map generation
#[derive(Debug, Error)]
pub enum GenError {
    #[error("minimum room size is {min}, got {got}")]
    RoomTooSmall { min: i32, got: i32 },

    #[error("could not read config {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),
}

pub type Result<T> = std::result::Result<T, GenError>;
