//! Rasterizer
//!
//! Turns the rectangles of a finished partition tree into tiles. The passes
//! read tile kinds written by earlier passes, so they must run in this order:
//!
//! 1. corridors
//! 2. rooms
//! 3. room walls
//! 4. corridor walls
//! 5. doors
//! 6. room labelling (see `labels`)
//! 7. void conversion
//!
//! Cell borders are a debug overlay drawn after everything else.

use super::bsp::CellNode;
use crate::world::geom::IntRect;
use crate::world::map::TileGrid;
use crate::world::tile::TileKind;

const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Wall, two unlabelled room tiles, wall
const DOOR_PATTERN: [TileKind; 4] = [TileKind::Wall, TileKind::RoomTemp, TileKind::RoomTemp, TileKind::Wall];

fn fill_rect(grid: &mut TileGrid, rect: &IntRect, kind: TileKind) {
    for p in rect.points() {
        grid.set(p.x, p.y, kind);
    }
}

/// Paint every corridor rectangle as corridor floor
pub fn paint_corridors(grid: &mut TileGrid, root: &CellNode) {
    root.walk(&mut |node| {
        if let Some(ref corridor) = node.corridor {
            fill_rect(grid, corridor, TileKind::Floor);
        }
    });
}

/// Paint every room rectangle as unlabelled room floor, leaving doors alone
pub fn paint_rooms(grid: &mut TileGrid, root: &CellNode) {
    root.walk(&mut |node| {
        if let Some(ref room) = node.room {
            for p in room.points() {
                if !grid.get_at(p).is_some_and(|t| t.is_door()) {
                    grid.set(p.x, p.y, TileKind::RoomTemp);
                }
            }
        }
    });
}

/// Turn room tiles bordering void into walls. The outer ring is never touched.
pub fn build_room_walls(grid: &mut TileGrid) -> usize {
    let mut walls = 0;
    for y in 1..grid.height - 1 {
        for x in 1..grid.width - 1 {
            if !grid.is(x, y, TileKind::RoomTemp) {
                continue;
            }
            if NEIGHBORS.iter().any(|(dx, dy)| grid.is(x + dx, y + dy, TileKind::Void)) {
                grid.set(x, y, TileKind::Wall);
                walls += 1;
            }
        }
    }
    walls
}

/// Wall in corridors from the outside: void next to corridor floor becomes wall
pub fn build_corridor_walls(grid: &mut TileGrid) -> usize {
    let mut walls = 0;
    for y in 1..grid.height - 1 {
        for x in 1..grid.width - 1 {
            if !grid.is(x, y, TileKind::Floor) {
                continue;
            }
            for (dx, dy) in NEIGHBORS {
                if grid.is(x + dx, y + dy, TileKind::Void) {
                    grid.set(x + dx, y + dy, TileKind::Wall);
                    walls += 1;
                }
            }
        }
    }
    walls
}

fn matches_door_pattern(grid: &TileGrid, x: i32, y: i32, (dx, dy): (i32, i32)) -> bool {
    DOOR_PATTERN
        .iter()
        .enumerate()
        .all(|(i, kind)| grid.is(x + dx * i as i32, y + dy * i as i32, *kind))
}

/// Cut a door pair wherever a wall-room-room-wall run crosses a wall.
///
/// Scans row-major and mutates in place; at each position the horizontal run
/// is tested first. A horizontal run yields `DoorV` tiles, a vertical run
/// yields `DoorH` tiles.
pub fn cut_doors(grid: &mut TileGrid) -> usize {
    let mut doors = 0;
    for y in 1..grid.height - 1 {
        for x in 1..grid.width - 1 {
            if matches_door_pattern(grid, x, y, (1, 0)) {
                grid.set(x + 1, y, TileKind::DoorV);
                grid.set(x + 2, y, TileKind::DoorV);
                doors += 1;
            } else if matches_door_pattern(grid, x, y, (0, 1)) {
                grid.set(x, y + 1, TileKind::DoorH);
                grid.set(x, y + 2, TileKind::DoorH);
                doors += 1;
            }
        }
    }
    doors
}

/// Whatever is still void becomes outer floor
pub fn convert_void(grid: &mut TileGrid) -> usize {
    let mut converted = 0;
    for tile in grid.tiles.iter_mut().filter(|t| **t == TileKind::Void) {
        *tile = TileKind::OuterFloor;
        converted += 1;
    }
    converted
}

/// Debug overlay: outline every partition cell
pub fn draw_cell_borders(grid: &mut TileGrid, root: &CellNode) {
    root.walk(&mut |node| {
        let cell = node.bounds();
        for x in cell.x..cell.right() {
            grid.set(x, cell.y, TileKind::CellBorder);
            grid.set(x, cell.bottom() - 1, TileKind::CellBorder);
        }
        for y in cell.y..cell.bottom() {
            grid.set(cell.x, y, TileKind::CellBorder);
            grid.set(cell.right() - 1, y, TileKind::CellBorder);
        }
    });
}
