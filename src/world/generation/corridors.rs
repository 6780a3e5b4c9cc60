//! Corridor connector
//!
//! Links the two children of every internal partition node with a
//! rectangle spanning their cell centers.

use super::bsp::CellNode;
use crate::world::geom::{IntPoint, IntRect};

/// Set the corridor of every internal node, returning how many were made
pub fn connect_rooms(root: &mut CellNode) -> usize {
    let mut count = 0;
    root.walk_mut(&mut |node| {
        let ends = node.children().map(|(left, right)| (left.center(), right.center()));
        if let Some((from, to)) = ends {
            node.corridor = Some(corridor_between(from, to));
            count += 1;
        }
    });
    log::debug!("Connected {} sibling pairs", count);
    count
}

/// Rectangle from `from` to `to`, grown by one tile on every side
///
/// Children are ordered left/top first, so `to` is never above or left of `from`.
pub fn corridor_between(from: IntPoint, to: IntPoint) -> IntRect {
    IntRect::new(from.x - 1, from.y - 1, to.x - from.x + 2, to.y - from.y + 2)
}
