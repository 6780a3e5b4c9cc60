//! Generator façade
//!
//! Owns the configuration and random stream of one generator instance and
//! drives the pipeline: partition, rooms, corridors, rasterize, label.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::bsp::build_tree;
use super::config::{check_min_room_size, GenerationConfig};
use super::corridors::connect_rooms;
use super::labels::{label_rooms, RoomTileMap};
use super::render;
use super::rooms::insert_rooms;
use crate::error::Result;
use crate::world::geom::{IntPoint, IntRect};
use crate::world::map::TileGrid;

/// Result of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMap {
    pub grid: TileGrid,
    /// Room registry; the index is the room id
    pub rooms: Vec<IntRect>,
    pub room_tiles: RoomTileMap,
    /// Seed the run actually used
    pub seed: u64,
}

impl GeneratedMap {
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Room id and rectangle of the room a tile was labelled with
    pub fn room_at(&self, tile: IntPoint) -> Option<(usize, &IntRect)> {
        let id = self.room_tiles.get(tile)?;
        self.rooms.get(id).map(|rect| (id, rect))
    }

    /// Call `f` with the id, rectangle and labelled tiles of every room
    pub fn for_each_room<F>(&self, mut f: F)
    where
        F: FnMut(usize, &IntRect, &[IntPoint]),
    {
        for (id, rect) in self.rooms.iter().enumerate() {
            let tiles = self.room_tiles.tiles_of(id);
            f(id, rect, &tiles);
        }
    }

    pub fn to_ascii(&self) -> String {
        self.grid.to_ascii()
    }
}

/// BSP dungeon generator
///
/// A constructed generator is always configured; `generate` can be called
/// any number of times and rebuilds everything from scratch.
pub struct BspGenerator {
    config: GenerationConfig,
    out: Option<Box<dyn Write + Send>>,
    last_seed: Option<u64>,
}

impl BspGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            out: None,
            last_seed: None,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Seed used by the most recent `generate` call
    pub fn last_seed(&self) -> Option<u64> {
        self.last_seed
    }

    /// Attach a sink that receives the rendered map after each run
    pub fn set_output(&mut self, out: Box<dyn Write + Send>) {
        self.out = Some(out);
    }

    pub fn set_map_dimension(&mut self, width: i32, height: i32) {
        self.config.width = width;
        self.config.height = height;
    }

    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.config.max_depth = max_depth;
    }

    /// Rejects sizes below 5 immediately, leaving the config unchanged
    pub fn set_min_room_size(&mut self, min_room_size: i32) -> Result<()> {
        check_min_room_size(min_room_size)?;
        self.config.min_room_size = min_room_size;
        Ok(())
    }

    /// 0 derives a fresh seed from the clock on every run
    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = seed;
    }

    pub fn set_split_pad(&mut self, split_pad: i32) {
        self.config.split_pad = split_pad;
    }

    pub fn set_room_pad(&mut self, room_pad: i32) {
        self.config.room_pad = room_pad;
    }

    fn resolve_seed(&self) -> u64 {
        if self.config.seed != 0 {
            return self.config.seed;
        }
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(1);
        millis.max(1)
    }

    /// Generate a new map
    pub fn generate(&mut self) -> GeneratedMap {
        let config = &self.config;
        let seed = self.resolve_seed();
        if config.seed == 0 {
            log::info!("seed: {} (derived from clock)", seed);
        } else {
            log::info!("seed: {}", seed);
        }

        let mut rng = StdRng::seed_from_u64(seed);

        let mut root = build_tree(&mut rng, config.width, config.height, config.max_depth, config.split_pad);
        let rooms = insert_rooms(&mut rng, &mut root, config.min_room_size, config.room_pad);
        connect_rooms(&mut root);

        let mut grid = TileGrid::new(config.width, config.height);
        render::paint_corridors(&mut grid, &root);
        render::paint_rooms(&mut grid, &root);
        let room_walls = render::build_room_walls(&mut grid);
        let corridor_walls = render::build_corridor_walls(&mut grid);
        let doors = render::cut_doors(&mut grid);
        let room_tiles = label_rooms(&mut grid, &rooms);
        let outer = render::convert_void(&mut grid);
        log::debug!(
            "Rendered {} room walls, {} corridor walls, {} doors, {} labelled tiles, {} outer tiles",
            room_walls,
            corridor_walls,
            doors,
            room_tiles.len(),
            outer
        );

        if config.debug_cell_borders {
            render::draw_cell_borders(&mut grid, &root);
        }

        let map = GeneratedMap {
            grid,
            rooms,
            room_tiles,
            seed,
        };
        self.last_seed = Some(seed);

        if let Some(out) = self.out.as_mut() {
            if let Err(e) = out.write_all(map.to_ascii().as_bytes()).and_then(|_| out.flush()) {
                log::warn!("Failed to write map output: {}", e);
            }
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;
    use crate::world::tile::TileKind;
    use std::sync::{Arc, Mutex};

    fn scenario() -> GenerationConfig {
        GenerationConfig::new(100, 60)
            .with_max_depth(6)
            .with_min_room_size(5)
            .with_seed(42)
    }

    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_min_room_size_validation() {
        assert!(matches!(
            BspGenerator::new(scenario().with_min_room_size(4)),
            Err(GenError::RoomTooSmall { .. })
        ));
        assert!(BspGenerator::new(scenario().with_min_room_size(5)).is_ok());

        let mut generator = BspGenerator::new(scenario()).unwrap();
        assert!(generator.set_min_room_size(4).is_err());
        assert_eq!(generator.config().min_room_size, 5);
        assert!(generator.set_min_room_size(7).is_ok());
        assert_eq!(generator.config().min_room_size, 7);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut generator = BspGenerator::new(scenario()).unwrap();
        let first = generator.generate();
        let second = generator.generate();
        assert_eq!(first, second);

        let mut other = BspGenerator::new(scenario()).unwrap();
        assert_eq!(first, other.generate());
        assert_eq!(first.seed, 42);
    }

    #[test]
    fn test_scenario_structure() {
        let map = BspGenerator::new(scenario()).unwrap().generate();
        assert_eq!((map.grid.width, map.grid.height), (100, 60));
        assert!(map.room_count() > 0);
        assert_eq!(map.grid.count(TileKind::Void), 0);
        assert_eq!(map.grid.count(TileKind::RoomTemp), 0);
        assert_eq!(map.grid.count(TileKind::CellBorder), 0);
        assert!(map.grid.count(TileKind::Wall) > 0);
    }

    #[test]
    fn test_room_map_matches_room_floor() {
        for seed in [1, 42, 1234, 99_999] {
            let map = BspGenerator::new(scenario().with_seed(seed)).unwrap().generate();
            for (tile, id) in map.room_tiles.iter() {
                assert_eq!(map.grid.get_at(tile), Some(TileKind::RoomFloor));
                assert!(id < map.room_count());
            }
            let floor = map.grid.count(TileKind::RoomFloor);
            assert_eq!(floor, map.room_tiles.len());
        }
    }

    #[test]
    fn test_every_room_has_floor() {
        for seed in [3, 42, 777] {
            let map = BspGenerator::new(scenario().with_seed(seed)).unwrap().generate();
            for room in &map.rooms {
                let inside = room
                    .points()
                    .filter(|p| room.contains_strictly(*p))
                    .any(|p| map.room_tiles.contains(p));
                assert!(inside, "room {:?} has no labelled floor (seed {})", room, seed);
            }
        }
    }

    #[test]
    fn test_doors_sit_in_walls() {
        let map = BspGenerator::new(scenario()).unwrap().generate();
        let grid = &map.grid;
        for p in grid.positions_of(TileKind::DoorV) {
            let west = (1..=2).any(|d| grid.is(p.x - d, p.y, TileKind::Wall));
            let east = (1..=2).any(|d| grid.is(p.x + d, p.y, TileKind::Wall));
            assert!(west && east, "door at {:?} not between walls", p);
        }
        for p in grid.positions_of(TileKind::DoorH) {
            let north = (1..=2).any(|d| grid.is(p.x, p.y - d, TileKind::Wall));
            let south = (1..=2).any(|d| grid.is(p.x, p.y + d, TileKind::Wall));
            assert!(north && south, "door at {:?} not between walls", p);
        }
    }

    #[test]
    fn test_walls_reproducible_without_doors() {
        use crate::world::generation::bsp::build_tree;
        use crate::world::generation::corridors::connect_rooms;
        use crate::world::generation::rooms::insert_rooms;

        let mut rng = StdRng::seed_from_u64(42);
        let mut root = build_tree(&mut rng, 100, 60, 6, 12);
        insert_rooms(&mut rng, &mut root, 5, 2);
        connect_rooms(&mut root);

        let mut grid = TileGrid::new(100, 60);
        render::paint_corridors(&mut grid, &root);
        render::paint_rooms(&mut grid, &root);
        render::build_room_walls(&mut grid);
        render::build_corridor_walls(&mut grid);
        let walls_before: Vec<_> = grid.positions_of(TileKind::Wall).collect();

        render::cut_doors(&mut grid);
        // Undo the doors and wall again: same wall positions
        for tile in grid.tiles.iter_mut().filter(|t| t.is_door()) {
            *tile = TileKind::RoomTemp;
        }
        render::build_room_walls(&mut grid);
        render::build_corridor_walls(&mut grid);
        let walls_after: Vec<_> = grid.positions_of(TileKind::Wall).collect();
        assert_eq!(walls_before, walls_after);
    }

    #[test]
    fn test_degenerate_map_is_outer_floor() {
        let config = GenerationConfig::new(20, 15).with_seed(5);
        let map = BspGenerator::new(config).unwrap().generate();
        // Too small to split, the single leaf still fits a room
        assert_eq!(map.room_count(), 1);
        assert_eq!(map.grid.count(TileKind::Void), 0);

        let tiny = GenerationConfig::new(8, 8).with_seed(5);
        let map = BspGenerator::new(tiny).unwrap().generate();
        assert_eq!(map.room_count(), 0);
        assert!(map.room_tiles.is_empty());
        assert_eq!(map.grid.count(TileKind::OuterFloor), 64);
    }

    #[test]
    fn test_clock_seed_is_reported() {
        let mut generator = BspGenerator::new(GenerationConfig::default()).unwrap();
        assert_eq!(generator.last_seed(), None);
        let map = generator.generate();
        assert_ne!(map.seed, 0);
        assert_eq!(generator.last_seed(), Some(map.seed));
        // Configured seed stays unset
        assert_eq!(generator.config().seed, 0);
    }

    #[test]
    fn test_reconfigure_between_runs() {
        let mut generator = BspGenerator::new(scenario()).unwrap();
        generator.set_map_dimension(60, 40);
        generator.set_max_depth(2);
        generator.set_seed(7);
        let map = generator.generate();
        assert_eq!((map.grid.width, map.grid.height), (60, 40));
        assert_eq!(map.seed, 7);
    }

    #[test]
    fn test_padding_is_per_instance() {
        let tight = GenerationConfig::new(100, 60).with_padding(6, 1).with_max_depth(8).with_seed(42);
        let mut a = BspGenerator::new(tight).unwrap();
        let mut b = BspGenerator::new(scenario()).unwrap();

        let dense = a.generate();
        let sparse = b.generate();
        assert!(dense.room_count() > sparse.room_count());
        assert_eq!(b.config().split_pad, 12);

        assert_eq!(dense.grid.count(TileKind::Void), 0);
        assert_eq!(dense.grid.count(TileKind::RoomFloor), dense.room_tiles.len());
        assert!(dense.grid.tiles.iter().any(|t| t.is_walkable()));
    }

    #[test]
    fn test_output_sink() {
        let sink = SharedSink::default();
        let mut generator = BspGenerator::new(scenario()).unwrap();
        generator.set_output(Box::new(sink.clone()));
        let map = generator.generate();

        let written = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, map.to_ascii());
        assert_eq!(written.lines().count(), 60);
        assert!(written.lines().all(|l| l.chars().count() == 100));
    }

    #[test]
    fn test_cell_border_overlay() {
        let mut generator = BspGenerator::new(scenario().with_cell_borders(true)).unwrap();
        let map = generator.generate();
        assert!(map.grid.count(TileKind::CellBorder) > 0);
        // Outer ring is a cell border
        assert!(map.grid.row(0).iter().all(|t| *t == TileKind::CellBorder));
    }

    #[test]
    fn test_for_each_room() {
        let map = BspGenerator::new(scenario()).unwrap().generate();
        let mut seen = 0;
        let mut labelled = 0;
        map.for_each_room(|id, rect, tiles| {
            assert_eq!(id, seen);
            assert_eq!(*rect, map.rooms[id]);
            for tile in tiles {
                assert_eq!(map.room_at(*tile).map(|(room, _)| room), Some(id));
            }
            labelled += tiles.len();
            seen += 1;
        });
        assert_eq!(seen, map.room_count());
        assert_eq!(labelled, map.room_tiles.len());
    }
}
