//! Generation configuration
//!
//! Map size, partition bounds, padding and seed for one generator instance.
//! Can be built in code or loaded from a RON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result, MIN_ROOM_SIZE_FLOOR};

/// Settings for BSP map generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub width: i32,
    pub height: i32,
    /// Maximum depth of the partition tree
    pub max_depth: u32,
    /// Minimum room edge, applied to both dimensions
    pub min_room_size: i32,
    /// Distance a split line keeps from the cell edges
    pub split_pad: i32,
    /// Margin between a room and the edges of its cell
    pub room_pad: i32,
    /// Random seed, 0 derives one from the clock on every run
    pub seed: u64,
    /// Overlay partition cell outlines after rendering
    pub debug_cell_borders: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 60,
            max_depth: 6,
            min_room_size: MIN_ROOM_SIZE_FLOOR,
            split_pad: 12,
            room_pad: 2,
            seed: 0,
            debug_cell_borders: false,
        }
    }
}

impl GenerationConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Load a config from a RON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| GenError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&content)?;
        log::info!("Loaded generation config from {:?}", path);
        Ok(config)
    }

    pub fn from_ron(content: &str) -> Result<Self> {
        let config: Self = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the one hard precondition: rooms must be at least 5x5
    pub fn validate(&self) -> Result<()> {
        check_min_room_size(self.min_room_size)
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_min_room_size(mut self, min_room_size: i32) -> Self {
        self.min_room_size = min_room_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_padding(mut self, split_pad: i32, room_pad: i32) -> Self {
        self.split_pad = split_pad;
        self.room_pad = room_pad;
        self
    }

    pub fn with_cell_borders(mut self, enabled: bool) -> Self {
        self.debug_cell_borders = enabled;
        self
    }
}

pub(crate) fn check_min_room_size(size: i32) -> Result<()> {
    if size < MIN_ROOM_SIZE_FLOOR {
        return Err(GenError::RoomTooSmall {
            min: MIN_ROOM_SIZE_FLOOR,
            got: size,
        });
    }
    Ok(())
}
