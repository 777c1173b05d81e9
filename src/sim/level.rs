//! Level bounds, obstacles and tile maps
//!
//! A level is a bounded area holding static obstacles and, optionally, a grid
//! of tiles. Entities query it with [`Level::blocks`] before committing to a
//! move.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, boxes_overlap};
use super::shape::CollisionShape;
use crate::error::TileMapError;

/// Tile sprite kinds, in sprite sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Red,
    Green,
    Blue,
    Center,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl TileKind {
    /// Number of kinds on the sprite sheet
    pub const COUNT: i64 = 12;

    pub fn from_index(index: i64) -> Option<Self> {
        let kind = match index {
            0 => TileKind::Red,
            1 => TileKind::Green,
            2 => TileKind::Blue,
            3 => TileKind::Center,
            4 => TileKind::Top,
            5 => TileKind::TopRight,
            6 => TileKind::Right,
            7 => TileKind::BottomRight,
            8 => TileKind::Bottom,
            9 => TileKind::BottomLeft,
            10 => TileKind::Left,
            11 => TileKind::TopLeft,
            _ => return None,
        };
        Some(kind)
    }

    /// Floor tiles are passable, everything from `Center` on is wall
    pub fn is_wall(&self) -> bool {
        !matches!(self, TileKind::Red | TileKind::Green | TileKind::Blue)
    }
}

/// A single placed tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub rect: Rect,
    pub kind: TileKind,
}

/// A row-major grid of tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMap {
    pub columns: usize,
    pub rows: usize,
    pub tile_width: i32,
    pub tile_height: i32,
    pub tiles: Vec<Tile>,
}

impl TileMap {
    /// Read a map of whitespace separated tile numbers
    ///
    /// Exactly `columns * rows` numbers are consumed; anything after them is
    /// ignored.
    pub fn parse(
        text: &str,
        columns: usize,
        rows: usize,
        tile_width: i32,
        tile_height: i32,
    ) -> Result<Self, TileMapError> {
        let total = columns * rows;
        let mut tokens = text.split_whitespace();
        let mut tiles = Vec::with_capacity(total);

        for index in 0..total {
            let token = tokens.next().ok_or(TileMapError::UnexpectedEof { index })?;
            let value: i64 = token.parse().map_err(|_| TileMapError::InvalidToken {
                index,
                token: token.to_string(),
            })?;
            let kind = TileKind::from_index(value)
                .ok_or(TileMapError::InvalidTileType { index, value })?;

            let col = (index % columns) as i32;
            let row = (index / columns) as i32;
            tiles.push(Tile {
                rect: Rect::new(col * tile_width, row * tile_height, tile_width, tile_height),
                kind,
            });
        }

        log::info!(
            "Loaded tile map: {}x{} tiles, {} walls",
            columns,
            rows,
            tiles.iter().filter(|t| t.kind.is_wall()).count()
        );

        Ok(Self {
            columns,
            rows,
            tile_width,
            tile_height,
            tiles,
        })
    }

    /// Pixel size of the whole map
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            self.columns as i32 * self.tile_width,
            self.rows as i32 * self.tile_height,
        )
    }

    /// Check whether a box touches any wall tile
    pub fn touches_wall(&self, rect: &Rect) -> bool {
        self.tiles
            .iter()
            .any(|t| t.kind.is_wall() && boxes_overlap(rect, &t.rect))
    }

    /// Check whether a shape touches any wall tile
    pub fn shape_touches_wall(&self, shape: &CollisionShape) -> bool {
        self.tiles
            .iter()
            .any(|t| t.kind.is_wall() && shape.overlaps_rect(&t.rect))
    }

    /// Tiles overlapping the camera rectangle
    pub fn visible<'a>(&'a self, camera: &'a Rect) -> impl Iterator<Item = &'a Tile> + 'a {
        self.tiles.iter().filter(move |t| boxes_overlap(camera, &t.rect))
    }
}

/// The area an entity moves in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Level {
    pub width: i32,
    pub height: i32,
    pub obstacles: Vec<CollisionShape>,
    pub tiles: Option<TileMap>,
    /// Where entities are placed when a scene starts
    pub spawn: IVec2,
}

impl Level {
    /// Empty level of the given size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            obstacles: Vec::new(),
            tiles: None,
            spawn: IVec2::ZERO,
        }
    }

    /// Level sized to a tile map
    pub fn from_tiles(tiles: TileMap) -> Self {
        let (width, height) = tiles.pixel_size();
        Self {
            width,
            height,
            obstacles: Vec::new(),
            tiles: Some(tiles),
            spawn: IVec2::ZERO,
        }
    }

    pub fn with_spawn(mut self, spawn: IVec2) -> Self {
        self.spawn = spawn;
        self
    }

    pub fn with_obstacle(mut self, obstacle: CollisionShape) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Check whether a shape's bounding box leaves the level
    pub fn out_of_bounds(&self, shape: &CollisionShape) -> bool {
        let b = shape.bounds();
        b.left() < 0 || b.top() < 0 || b.right() > self.width || b.bottom() > self.height
    }

    /// Check whether a shape may not occupy its current position
    pub fn blocks(&self, shape: &CollisionShape) -> bool {
        if self.out_of_bounds(shape) {
            return true;
        }
        if self.obstacles.iter().any(|o| shape.overlaps(o)) {
            return true;
        }
        self.tiles
            .as_ref()
            .is_some_and(|tiles| tiles.shape_touches_wall(shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_map() -> TileMap {
        // 3x2 map, one wall in the middle of the top row
        TileMap::parse("0 4 1\n2 0 0\n", 3, 2, 80, 80).expect("valid map")
    }

    #[test]
    fn test_parse_lays_out_row_major() {
        let map = small_map();
        assert_eq!(map.tiles.len(), 6);
        assert_eq!(map.tiles[1].rect, Rect::new(80, 0, 80, 80));
        assert_eq!(map.tiles[1].kind, TileKind::Top);
        assert_eq!(map.tiles[3].rect, Rect::new(0, 80, 80, 80));
        assert_eq!(map.pixel_size(), (240, 160));
    }

    #[test]
    fn test_parse_errors_report_index() {
        assert_eq!(
            TileMap::parse("0 0", 3, 1, 80, 80),
            Err(TileMapError::UnexpectedEof { index: 2 })
        );
        assert_eq!(
            TileMap::parse("0 x 0", 3, 1, 80, 80),
            Err(TileMapError::InvalidToken {
                index: 1,
                token: "x".to_string()
            })
        );
        assert_eq!(
            TileMap::parse("0 0 12", 3, 1, 80, 80),
            Err(TileMapError::InvalidTileType { index: 2, value: 12 })
        );
        assert_eq!(
            TileMap::parse("-1 0 0", 3, 1, 80, 80),
            Err(TileMapError::InvalidTileType { index: 0, value: -1 })
        );
    }

    #[test]
    fn test_wall_kinds() {
        assert!(!TileKind::Red.is_wall());
        assert!(!TileKind::Blue.is_wall());
        assert!(TileKind::Center.is_wall());
        assert!(TileKind::TopLeft.is_wall());
        assert_eq!(TileKind::from_index(TileKind::COUNT), None);
    }

    #[test]
    fn test_touches_wall() {
        let map = small_map();
        assert!(map.touches_wall(&Rect::new(75, 10, 20, 20)));
        // Flush against the wall's left edge
        assert!(!map.touches_wall(&Rect::new(60, 10, 20, 20)));
        assert!(!map.touches_wall(&Rect::new(10, 90, 20, 20)));
    }

    #[test]
    fn test_visible_tiles() {
        let map = small_map();
        let camera = Rect::new(0, 0, 100, 50);
        let visible: Vec<_> = map.visible(&camera).collect();
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_level_blocks_bounds_and_obstacles() {
        let wall = CollisionShape::Box(Rect::new(300, 40, 40, 400));
        let level = Level::new(640, 480).with_obstacle(wall);

        let mut dot = CollisionShape::rect(20, 20);
        dot.shift_to(IVec2::new(0, 0));
        assert!(!level.blocks(&dot));

        dot.shift_to(IVec2::new(-1, 0));
        assert!(level.blocks(&dot));

        dot.shift_to(IVec2::new(620, 460));
        assert!(!level.blocks(&dot));
        dot.shift_to(IVec2::new(621, 460));
        assert!(level.blocks(&dot));

        dot.shift_to(IVec2::new(290, 100));
        assert!(level.blocks(&dot));
    }

    #[test]
    fn test_level_blocks_wall_tiles() {
        let level = Level::from_tiles(small_map());
        assert_eq!((level.width, level.height), (240, 160));

        let mut dot = CollisionShape::rect(20, 20);
        dot.shift_to(IVec2::new(85, 10));
        assert!(level.blocks(&dot));
        dot.shift_to(IVec2::new(85, 100));
        assert!(!level.blocks(&dot));
    }
}
