//! Integer geometry
//!
//! Points and axis-aligned rectangles on the tile grid.

use serde::{Deserialize, Serialize};

/// A tile coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, `width` x `height` tiles starting at `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// One past the rightmost column
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom row
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Midpoint, rounded towards the top-left
    pub fn center(&self) -> IntPoint {
        IntPoint::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn contains(&self, p: IntPoint) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// True if `p` lies inside the rectangle and not on its outer ring
    pub fn contains_strictly(&self, p: IntPoint) -> bool {
        p.x > self.x && p.x < self.right() - 1 && p.y > self.y && p.y < self.bottom() - 1
    }

    pub fn intersects(&self, other: &IntRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Every covered tile, row by row
    pub fn points(&self) -> impl Iterator<Item = IntPoint> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| IntPoint::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = IntRect::new(2, 3, 4, 5);
        assert!(r.contains(IntPoint::new(2, 3)));
        assert!(r.contains(IntPoint::new(5, 7)));
        assert!(!r.contains(IntPoint::new(6, 7))); // right edge is exclusive
        assert!(!r.contains(IntPoint::new(1, 3)));
    }

    #[test]
    fn test_contains_strictly() {
        let r = IntRect::new(0, 0, 5, 5);
        assert!(r.contains_strictly(IntPoint::new(1, 1)));
        assert!(r.contains_strictly(IntPoint::new(3, 3)));
        assert!(!r.contains_strictly(IntPoint::new(0, 2)));
        assert!(!r.contains_strictly(IntPoint::new(4, 2)));
    }

    #[test]
    fn test_intersects() {
        let a = IntRect::new(0, 0, 10, 10);
        assert!(a.intersects(&IntRect::new(9, 9, 3, 3)));
        assert!(!a.intersects(&IntRect::new(10, 0, 3, 3))); // touching only
    }

    #[test]
    fn test_center_and_points() {
        let r = IntRect::new(10, 20, 5, 4);
        assert_eq!(r.center(), IntPoint::new(12, 22));
        assert_eq!(r.points().count(), 20);
        assert_eq!(r.points().next(), Some(IntPoint::new(10, 20)));
    }
}
