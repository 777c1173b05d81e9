//! Deterministic simulation module
//!
//! All motion and collision logic lives here. This module must stay pure and
//! deterministic:
//! - Integer geometry only
//! - Seeded RNG only
//! - No clock reads; elapsed time arrives through `TickInput`
//! - No rendering or platform dependencies

pub mod button;
pub mod camera;
pub mod entity;
pub mod geometry;
pub mod input;
pub mod level;
pub mod particles;
pub mod shape;
pub mod state;
pub mod tick;

pub use button::{Button, ButtonState};
pub use camera::Camera;
pub use entity::MovingEntity;
pub use geometry::{
    Circle, Rect, boxes_overlap, circle_overlaps_box, circles_overlap, composites_overlap,
    squared_distance,
};
pub use input::{Direction, DirectionalInput, InputEvent};
pub use level::{Level, Tile, TileKind, TileMap};
pub use particles::{Particle, ParticleColor, ParticleTrail};
pub use shape::CollisionShape;
pub use state::Scene;
pub use tick::{TickInput, tick};
