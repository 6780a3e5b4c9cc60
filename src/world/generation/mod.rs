//! Procedural map generation
//!
//! Binary space partition pipeline: split the map into cells, carve a room
//! into each leaf, connect sibling cells with corridors, then rasterize and
//! label the result.
//!
//! Leaves too small for a room still act as corridor endpoints, so a corridor
//! can end in open ground with no room attached.

pub mod bsp;
pub mod config;
pub mod corridors;
pub mod generator;
pub mod labels;
pub mod render;
pub mod rooms;

pub use bsp::CellNode;
pub use config::GenerationConfig;
pub use generator::{BspGenerator, GeneratedMap};
pub use labels::RoomTileMap;
