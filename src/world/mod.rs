//! World module
//!
//! Contains the tile grid, tile kinds, geometry and procedural generation.

pub mod geom;
pub mod map;
pub mod tile;
pub mod generation;

pub use geom::{IntPoint, IntRect};
pub use map::TileGrid;
pub use tile::TileKind;
