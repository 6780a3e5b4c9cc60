//! BSP dungeon generator
//!
//! Splits a map into a binary space partition, carves rooms into the leaves,
//! joins siblings with corridors and renders everything into a grid of typed
//! tiles plus a tile to room id mapping.

pub mod error;
pub mod world;

// Re-export commonly used types
pub use error::{GenError, Result};
pub use world::generation::{BspGenerator, GeneratedMap, GenerationConfig, RoomTileMap};
pub use world::{IntPoint, IntRect, TileGrid, TileKind};
