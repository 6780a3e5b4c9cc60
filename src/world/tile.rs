//! Tile definitions
//!
//! The tile kinds a generated map is made of and how they are drawn.

use serde::{Deserialize, Serialize};

/// Kinds of tiles in a generated map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileKind {
    /// Untouched background, only present while rendering
    #[default]
    Void,

    // Room interior
    RoomTemp, // painted but not yet labelled
    RoomFloor,

    // Open terrain
    Floor, // corridor floor
    OuterFloor,

    Wall,

    // Doors, named after the orientation of the wall they sit in
    DoorH,
    DoorV,

    /// Debug overlay of partition cell outlines
    CellBorder,
}

impl TileKind {
    pub fn is_door(&self) -> bool {
        matches!(self, TileKind::DoorH | TileKind::DoorV)
    }

    /// Tiles the room labeller may flood through
    pub fn is_open_floor(&self) -> bool {
        matches!(self, TileKind::RoomTemp | TileKind::Floor)
    }

    pub fn is_walkable(&self) -> bool {
        matches!(
            self,
            TileKind::RoomFloor
                | TileKind::Floor
                | TileKind::OuterFloor
                | TileKind::DoorH
                | TileKind::DoorV
        )
    }

    pub fn glyph(&self) -> char {
        match self {
            TileKind::Void => ' ',
            TileKind::RoomTemp => 'T',
            TileKind::RoomFloor => ',',
            TileKind::Floor => '.',
            TileKind::OuterFloor => '~',
            TileKind::Wall => '#',
            TileKind::DoorH => '|',
            TileKind::DoorV => '-',
            TileKind::CellBorder => '&',
        }
    }

    /// Inverse of [`TileKind::glyph`]
    pub fn from_glyph(c: char) -> Option<Self> {
        let kind = match c {
            ' ' => TileKind::Void,
            'T' => TileKind::RoomTemp,
            ',' => TileKind::RoomFloor,
            '.' => TileKind::Floor,
            '~' => TileKind::OuterFloor,
            '#' => TileKind::Wall,
            '|' => TileKind::DoorH,
            '-' => TileKind::DoorV,
            '&' => TileKind::CellBorder,
            _ => return None,
        };
        Some(kind)
    }

    pub fn fg_color(&self) -> (u8, u8, u8) {
        match self {
            TileKind::Void => (0, 0, 0),
            TileKind::RoomTemp => (255, 0, 255), // should never survive generation
            TileKind::RoomFloor => (150, 140, 120),
            TileKind::Floor => (110, 110, 110),
            TileKind::OuterFloor => (50, 70, 50),
            TileKind::Wall => (130, 110, 90),
            TileKind::DoorH | TileKind::DoorV => (139, 90, 43),
            TileKind::CellBorder => (200, 60, 60),
        }
    }
}
