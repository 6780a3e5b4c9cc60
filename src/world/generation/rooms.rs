//! Room placer
//!
//! Carves one rectangular room into every partition leaf that is large
//! enough, centered on the leaf so corridors between cell centers hit it.

use rand::rngs::StdRng;
use rand::Rng;

use super::bsp::CellNode;
use crate::world::geom::IntRect;

/// Place rooms in the leaves of `root`, returning the room registry in
/// pre-order leaf order. The index into the returned list is the room id.
pub fn insert_rooms(rng: &mut StdRng, root: &mut CellNode, min_room_size: i32, room_pad: i32) -> Vec<IntRect> {
    let mut rooms = Vec::new();
    let mut skipped = 0;

    root.walk_mut(&mut |node| {
        if !node.is_leaf() {
            return;
        }
        match place_room(rng, node, min_room_size, room_pad) {
            Some(room) => {
                node.room = Some(room);
                rooms.push(room);
            }
            None => skipped += 1,
        }
    });

    log::debug!("Placed {} rooms ({} leaves too small)", rooms.len(), skipped);
    rooms
}

/// Roll a room for one leaf, `None` if the cell interior is too small
fn place_room(rng: &mut StdRng, cell: &CellNode, min_room_size: i32, room_pad: i32) -> Option<IntRect> {
    let max_width = cell.width - 2 * room_pad;
    let max_height = cell.height - 2 * room_pad;
    if max_width < min_room_size || max_height < min_room_size {
        return None;
    }

    let width = roll_size(rng, min_room_size, max_width);
    let height = roll_size(rng, min_room_size, max_height);

    // Grow from the cell center so corridors reliably reach the room
    let center = cell.center();
    Some(IntRect::new(center.x - width / 2, center.y - height / 2, width, height))
}

/// Uniform in `[min, max)`, or exactly `min` when the range is empty
fn roll_size(rng: &mut StdRng, min: i32, max: i32) -> i32 {
    if max > min {
        min + rng.gen_range(0..max - min)
    } else {
        min
    }
}
