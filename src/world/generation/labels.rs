//! Room labeller
//!
//! Flood fills each room from just inside its top-left corner, finalizing
//! room floor and recording which room every tile belongs to. Doors stop
//! the fill, so rooms joined only through doors keep separate ids.

use std::collections::HashMap;

use crate::world::geom::{IntPoint, IntRect};
use crate::world::map::TileGrid;
use crate::world::tile::TileKind;

/// Mapping from tile coordinate to room id
///
/// Only finalized room floor tiles are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomTileMap {
    tiles: HashMap<IntPoint, usize>,
}

impl RoomTileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tile: IntPoint, room: usize) {
        self.tiles.insert(tile, room);
    }

    /// Room id of a tile, `None` if the tile is not inside any room
    pub fn get(&self, tile: IntPoint) -> Option<usize> {
        self.tiles.get(&tile).copied()
    }

    pub fn contains(&self, tile: IntPoint) -> bool {
        self.tiles.contains_key(&tile)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IntPoint, usize)> + '_ {
        self.tiles.iter().map(|(p, id)| (*p, *id))
    }

    /// All tiles of one room, row-major
    pub fn tiles_of(&self, room: usize) -> Vec<IntPoint> {
        let mut tiles: Vec<IntPoint> = self
            .tiles
            .iter()
            .filter(|(_, id)| **id == room)
            .map(|(p, _)| *p)
            .collect();
        tiles.sort_by_key(|p| (p.y, p.x));
        tiles
    }
}

/// Label every room in registry order
pub fn label_rooms(grid: &mut TileGrid, rooms: &[IntRect]) -> RoomTileMap {
    let mut map = RoomTileMap::new();
    for (id, room) in rooms.iter().enumerate() {
        let filled = flood_fill(grid, room, id, &mut map);
        if filled == 0 {
            log::debug!("Room {} at {:?} was already claimed by an earlier room", id, room);
        }
    }
    map
}

/// Fill from `(room.x + 1, room.y + 1)` through unlabelled room and corridor
/// floor, returning the number of tiles claimed.
fn flood_fill(grid: &mut TileGrid, room: &IntRect, id: usize, map: &mut RoomTileMap) -> usize {
    let mut filled = 0;
    let mut todo = vec![IntPoint::new(room.x + 1, room.y + 1)];

    while let Some(tile) = todo.pop() {
        if grid.get_at(tile).is_some_and(|t| t.is_open_floor()) {
            grid.set(tile.x, tile.y, TileKind::RoomFloor);
            map.insert(tile, id);
            filled += 1;
        }

        for next in [
            IntPoint::new(tile.x, tile.y - 1),
            IntPoint::new(tile.x, tile.y + 1),
            IntPoint::new(tile.x - 1, tile.y),
            IntPoint::new(tile.x + 1, tile.y),
        ] {
            if grid.get_at(next).is_some_and(|t| t.is_open_floor() && !t.is_door()) {
                todo.push(next);
            }
        }
    }

    filled
}
