//! Tile grid
//!
//! The 2D grid of tile kinds produced by one generation run.

use std::fmt;

use super::geom::IntPoint;
use super::tile::TileKind;

/// A `height` x `width` grid of tiles, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<TileKind>,
}

impl TileGrid {
    /// Create a new grid filled with void
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width: width.max(0),
            height: height.max(0),
            tiles: vec![TileKind::Void; len],
        }
    }

    /// Build a grid from glyph rows. Unknown glyphs become void.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let kind = TileKind::from_glyph(c).unwrap_or_default();
                grid.set(x as i32, y as i32, kind);
            }
        }
        grid
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Convert 1D index to 2D coordinates
    #[inline]
    pub fn idx_to_xy(&self, idx: usize) -> (i32, i32) {
        let idx = idx as i32;
        (idx % self.width, idx / self.width)
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Tile at position, `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<TileKind> {
        if self.in_bounds(x, y) {
            Some(self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    pub fn get_at(&self, p: IntPoint) -> Option<TileKind> {
        self.get(p.x, p.y)
    }

    /// Check the tile kind at a position; false outside the grid
    #[inline]
    pub fn is(&self, x: i32, y: i32, kind: TileKind) -> bool {
        self.get(x, y) == Some(kind)
    }

    /// Set tile at position. Writes outside the grid are ignored.
    pub fn set(&mut self, x: i32, y: i32, kind: TileKind) {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            self.tiles[idx] = kind;
        }
    }

    /// One row of tiles, `[y][x]` addressing
    pub fn row(&self, y: i32) -> &[TileKind] {
        let start = self.xy_to_idx(0, y);
        &self.tiles[start..start + self.width as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileKind]> {
        self.tiles.chunks(self.width.max(1) as usize)
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| **t == kind).count()
    }

    /// Positions holding the given kind, row-major
    pub fn positions_of(&self, kind: TileKind) -> impl Iterator<Item = IntPoint> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(move |(_, t)| **t == kind)
            .map(move |(idx, _)| {
                let (x, y) = self.idx_to_xy(idx);
                IntPoint::new(x, y)
            })
    }

    /// One line per row, one glyph per tile
    pub fn to_ascii(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.rows() {
            let line: String = row.iter().map(|t| t.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_void() {
        let grid = TileGrid::new(7, 3);
        assert_eq!(grid.tiles.len(), 21);
        assert_eq!(grid.count(TileKind::Void), 21);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = TileGrid::new(4, 4);
        grid.set(-1, 0, TileKind::Wall);
        grid.set(4, 0, TileKind::Wall);
        assert_eq!(grid.count(TileKind::Wall), 0);
        assert_eq!(grid.get(0, 4), None);
        assert!(!grid.is(9, 9, TileKind::Void));
    }

    #[test]
    fn test_ascii_roundtrip() {
        let rows = ["####", "#TT#", "#..#", "####"];
        let grid = TileGrid::from_ascii(&rows);
        assert_eq!(grid.get(1, 1), Some(TileKind::RoomTemp));
        assert_eq!(grid.get(2, 2), Some(TileKind::Floor));
        assert_eq!(grid.row(1), &[TileKind::Wall, TileKind::RoomTemp, TileKind::RoomTemp, TileKind::Wall]);
        assert_eq!(grid.to_ascii(), "####\n#TT#\n#..#\n####\n");
    }

    #[test]
    fn test_positions_of() {
        let grid = TileGrid::from_ascii(&["#.", ".#"]);
        let walls: Vec<_> = grid.positions_of(TileKind::Wall).collect();
        assert_eq!(walls, vec![IntPoint::new(0, 0), IntPoint::new(1, 1)]);
    }
}
