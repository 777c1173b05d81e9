//! dotsim - 2D collision, motion and frame timing
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, shapes, entities, levels, ticks)
//! - `timer`: Pausable millisecond timer, frame limiter and FPS counter
//! - `platform`: Host clock abstraction
//! - `renderer`: Render context trait and a headless text canvas
//! - `settings`: Persisted preferences

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod timer;

pub use error::{Error, Result};
pub use settings::{QualityPreset, Settings};
pub use timer::{FpsCounter, FrameLimiter, FrameTimer};

/// Simulation configuration constants
pub mod consts {
    /// Viewport dimensions
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Scrolling/tiled level dimensions
    pub const LEVEL_WIDTH: i32 = 1280;
    pub const LEVEL_HEIGHT: i32 = 960;

    /// Tile dimensions and counts
    pub const TILE_WIDTH: i32 = 80;
    pub const TILE_HEIGHT: i32 = 80;
    pub const TILE_COLUMNS: usize = (LEVEL_WIDTH / TILE_WIDTH) as usize;
    pub const TILE_ROWS: usize = (LEVEL_HEIGHT / TILE_HEIGHT) as usize;
    pub const TOTAL_TILES: usize = TILE_COLUMNS * TILE_ROWS;
    pub const TOTAL_TILE_SPRITES: i32 = 12;

    /// Dot defaults
    pub const DOT_WIDTH: i32 = 20;
    pub const DOT_HEIGHT: i32 = 20;
    /// Velocity increment per key press (pixels per tick)
    pub const DOT_VEL: i32 = 10;
    /// Velocity increment per key press for frame independent motion (pixels per second)
    pub const DOT_VEL_PER_SEC: i32 = 640;

    /// Particle trail size
    pub const TOTAL_PARTICLES: usize = 20;

    /// Frame rate cap
    pub const SCREEN_FPS: u32 = 60;
    pub const SCREEN_TICKS_PER_FRAME: u64 = 1000 / SCREEN_FPS as u64;
}
