//! Partition tree
//!
//! Recursive binary space partition of the map into axis-aligned cells.
//! Children share one unit of overlap along the split line.

use rand::rngs::StdRng;
use rand::Rng;

use crate::world::geom::{IntPoint, IntRect};

/// A node of the partition tree
#[derive(Debug, Clone)]
pub struct CellNode {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub depth: u32,
    /// True if the split line is vertical (children side by side)
    pub horizontal: bool,
    pub left: Option<Box<CellNode>>,
    pub right: Option<Box<CellNode>>,
    /// Room carved into this leaf, if it was large enough
    pub room: Option<IntRect>,
    /// Connection between the children's centers, internal nodes only
    pub corridor: Option<IntRect>,
}

impl CellNode {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            depth: 0,
            horizontal: false,
            left: None,
            right: None,
            room: None,
            corridor: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn bounds(&self) -> IntRect {
        IntRect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> IntPoint {
        self.bounds().center()
    }

    /// Both children, when the node was split
    pub fn children(&self) -> Option<(&CellNode, &CellNode)> {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }

    /// Visit this node, then the left subtree, then the right subtree
    pub fn walk<F: FnMut(&CellNode)>(&self, f: &mut F) {
        f(self);
        if let Some(ref left) = self.left {
            left.walk(f);
        }
        if let Some(ref right) = self.right {
            right.walk(f);
        }
    }

    /// Mutable pre-order walk
    pub fn walk_mut<F: FnMut(&mut CellNode)>(&mut self, f: &mut F) {
        f(self);
        if let Some(ref mut left) = self.left {
            left.walk_mut(f);
        }
        if let Some(ref mut right) = self.right {
            right.walk_mut(f);
        }
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |node| {
            if node.is_leaf() {
                count += 1;
            }
        });
        count
    }

    /// Deepest level reached by any node
    pub fn max_depth(&self) -> u32 {
        let mut depth = 0;
        self.walk(&mut |node| depth = depth.max(node.depth));
        depth
    }
}

/// Build a partition tree covering a `width` x `height` map
pub fn build_tree(rng: &mut StdRng, width: i32, height: i32, max_depth: u32, split_pad: i32) -> CellNode {
    let mut root = CellNode::new(0, 0, width, height);
    split_cell(rng, &mut root, max_depth, split_pad);
    log::debug!(
        "Partition tree: {} nodes, {} leaves, depth {}",
        root.node_count(),
        root.leaf_count(),
        root.max_depth()
    );
    root
}

/// Recursively split a cell until depth runs out or it gets too small
fn split_cell(rng: &mut StdRng, parent: &mut CellNode, max_depth: u32, split_pad: i32) {
    if parent.depth >= max_depth || parent.width <= 2 * split_pad || parent.height <= 2 * split_pad {
        return;
    }

    let depth = parent.depth + 1;
    parent.horizontal = rng.gen_bool(0.5);

    let (mut left, mut right) = if parent.horizontal {
        let split = split_pad + rng.gen_range(0..parent.width - 2 * split_pad);
        (
            CellNode::new(parent.x, parent.y, split + 1, parent.height),
            CellNode::new(parent.x + split, parent.y, parent.width - split, parent.height),
        )
    } else {
        let split = split_pad + rng.gen_range(0..parent.height - 2 * split_pad);
        (
            CellNode::new(parent.x, parent.y, parent.width, split + 1),
            CellNode::new(parent.x, parent.y + split, parent.width, parent.height - split),
        )
    };
    log::trace!("Split {:?} at depth {} ({})", parent.bounds(), parent.depth, if parent.horizontal { "vertical line" } else { "horizontal line" });

    left.depth = depth;
    right.depth = depth;

    split_cell(rng, &mut left, max_depth, split_pad);
    split_cell(rng, &mut right, max_depth, split_pad);

    parent.left = Some(Box::new(left));
    parent.right = Some(Box::new(right));
}
