//! Moving entities
//!
//! Motion is resolved one axis at a time: x first, then y. A rejected axis is
//! rolled back on its own, so an entity pressed against a wall still slides
//! along it. Fast entities can tunnel through thin obstacles; there is no
//! sweep.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::input::{DirectionalInput, InputEvent};
use super::level::Level;
use super::shape::CollisionShape;

/// Milliseconds per second, for time-scaled motion
const MS_PER_SEC: i64 = 1000;

/// An entity with a position, a velocity and a collision shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingEntity {
    pos: IVec2,
    vel: IVec2,
    shape: CollisionShape,
    /// Velocity change per directional key press
    speed: i32,
    /// Sub-pixel remainder carried between time-scaled steps (pixel-milliseconds)
    remainder: IVec2,
    /// Held directions; `vel` is only consistent with this set
    input: DirectionalInput,
}

impl MovingEntity {
    pub fn new(pos: IVec2, shape: CollisionShape, speed: i32) -> Self {
        let mut entity = Self {
            pos,
            vel: IVec2::ZERO,
            shape,
            speed,
            remainder: IVec2::ZERO,
            input: DirectionalInput::new(),
        };
        entity.shape.shift_to(pos);
        entity
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        self.pos
    }

    #[inline]
    pub fn velocity(&self) -> IVec2 {
        self.vel
    }

    pub fn shape(&self) -> &CollisionShape {
        &self.shape
    }

    /// Bounding box of the collision shape
    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn set_velocity(&mut self, vel: IVec2) {
        self.vel = vel;
    }

    /// Teleport without collision checks
    pub fn set_position(&mut self, pos: IVec2) {
        self.pos = pos;
        self.shape.shift_to(pos);
    }

    /// Adjust velocity from a directional press or release
    pub fn handle_event(&mut self, event: InputEvent) {
        let delta = self.input.apply(event, self.speed);
        if delta != IVec2::ZERO {
            self.vel += delta;
            log::debug!("{:?} -> velocity {:?}", event, self.vel);
        }
    }

    /// Drop every held direction, cancelling their velocity
    pub fn release_all(&mut self) {
        self.vel += self.input.release_all(self.speed);
    }

    /// Advance one tick using the velocity as pixels per tick
    pub fn step(&mut self, level: &Level) {
        let delta = self.vel;
        self.move_by(delta, level);
    }

    /// Advance by `elapsed_ms` using the velocity as pixels per second
    ///
    /// Fractions of a pixel are carried over to the next step so slow
    /// movement at high frame rates still accumulates.
    pub fn step_timed(&mut self, level: &Level, elapsed_ms: u64) {
        let ms = elapsed_ms as i64;
        let total_x = self.vel.x as i64 * ms + self.remainder.x as i64;
        let total_y = self.vel.y as i64 * ms + self.remainder.y as i64;

        // Truncating division keeps the remainder's sign with the motion
        let delta = IVec2::new((total_x / MS_PER_SEC) as i32, (total_y / MS_PER_SEC) as i32);
        self.remainder = IVec2::new(
            (total_x % MS_PER_SEC) as i32,
            (total_y % MS_PER_SEC) as i32,
        );

        self.move_by(delta, level);
    }

    /// Apply `delta` one axis at a time, rolling back any axis the level
    /// rejects. Returns which axes were blocked.
    pub fn move_by(&mut self, delta: IVec2, level: &Level) -> (bool, bool) {
        // Horizontal
        self.pos.x += delta.x;
        self.shape.shift_to(self.pos);
        let blocked_x = level.blocks(&self.shape);
        if blocked_x {
            self.pos.x -= delta.x;
            self.shape.shift_to(self.pos);
        }

        // Vertical
        self.pos.y += delta.y;
        self.shape.shift_to(self.pos);
        let blocked_y = level.blocks(&self.shape);
        if blocked_y {
            self.pos.y -= delta.y;
            self.shape.shift_to(self.pos);
        }

        (blocked_x, blocked_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Circle;
    use crate::sim::input::Direction;

    fn dot_at(x: i32, y: i32) -> MovingEntity {
        MovingEntity::new(IVec2::new(x, y), CollisionShape::rect(20, 20), 10)
    }

    #[test]
    fn test_free_motion_applies_velocity() {
        let level = Level::new(640, 480);
        let mut dot = dot_at(100, 100);
        dot.set_velocity(IVec2::new(7, -3));
        dot.step(&level);
        assert_eq!(dot.position(), IVec2::new(107, 97));
        assert_eq!(dot.bounds(), Rect::new(107, 97, 20, 20));
    }

    #[test]
    fn test_right_boundary_rejects_motion() {
        let level = Level::new(640, 480);
        let mut dot = dot_at(640 - 20, 100);
        dot.set_velocity(IVec2::new(10, 0));
        dot.step(&level);
        assert_eq!(dot.position(), IVec2::new(620, 100));
        assert_eq!(dot.bounds().x, 620);
    }

    #[test]
    fn test_slides_along_wall() {
        let wall = CollisionShape::Box(Rect::new(125, 0, 40, 480));
        let level = Level::new(640, 480).with_obstacle(wall);
        let mut dot = dot_at(100, 100);
        dot.set_velocity(IVec2::new(10, 10));

        let blocked = dot.move_by(dot.velocity(), &level);
        assert_eq!(blocked, (true, false));
        assert_eq!(dot.position(), IVec2::new(100, 110));
    }

    #[test]
    fn test_keyboard_drives_velocity() {
        let mut dot = dot_at(0, 0);
        dot.handle_event(InputEvent::Pressed(Direction::Right));
        dot.handle_event(InputEvent::Pressed(Direction::Right));
        dot.handle_event(InputEvent::Pressed(Direction::Down));
        assert_eq!(dot.velocity(), IVec2::new(10, 10));

        dot.handle_event(InputEvent::Released(Direction::Right));
        assert_eq!(dot.velocity(), IVec2::new(0, 10));

        dot.release_all();
        assert_eq!(dot.velocity(), IVec2::ZERO);
    }

    #[test]
    fn test_circle_entity_bounds_from_centre() {
        let level = Level::new(640, 480);
        let mut ball = MovingEntity::new(IVec2::new(10, 240), CollisionShape::circle(10), 1);
        ball.set_velocity(IVec2::new(-1, 0));
        ball.step(&level);
        assert_eq!(ball.position(), IVec2::new(10, 240));
        assert_eq!(ball.shape(), &CollisionShape::Circle(Circle::new(10, 240, 10)));
    }

    #[test]
    fn test_composite_entity_stops_at_obstacle() {
        let wall = CollisionShape::Box(Rect::new(300, 40, 40, 400));
        let level = Level::new(640, 480).with_obstacle(wall);
        let mut dot = MovingEntity::new(
            IVec2::new(270, 100),
            CollisionShape::dot_silhouette(),
            1,
        );
        dot.set_velocity(IVec2::new(1, 0));
        for _ in 0..50 {
            dot.step(&level);
        }
        // Right edge flush against the wall
        assert_eq!(dot.position().x, 280);
    }

    #[test]
    fn test_step_timed_carries_remainder() {
        let level = Level::new(10_000, 10_000);
        let mut dot = dot_at(0, 0);
        dot.set_velocity(IVec2::new(640, 0));

        // 640 px/s over 16 ms is 10.24 px
        dot.step_timed(&level, 16);
        assert_eq!(dot.position().x, 10);

        // Remainders add up over 25 frames (400 ms -> 256 px)
        for _ in 0..24 {
            dot.step_timed(&level, 16);
        }
        assert_eq!(dot.position().x, 256);
    }

    #[test]
    fn test_step_timed_negative_velocity() {
        let level = Level::new(10_000, 10_000);
        let mut dot = dot_at(1000, 1000);
        dot.set_velocity(IVec2::new(0, -640));
        for _ in 0..25 {
            dot.step_timed(&level, 16);
        }
        assert_eq!(dot.position(), IVec2::new(1000, 1000 - 256));
    }

    #[test]
    fn test_step_timed_respects_bounds() {
        let level = Level::new(640, 480);
        let mut dot = dot_at(615, 0);
        dot.set_velocity(IVec2::new(640, 0));
        dot.step_timed(&level, 100);
        assert_eq!(dot.position().x, 615);
    }

    #[test]
    fn test_release_after_json_round_trip() {
        let level = Level::new(640, 480);
        let mut dot = dot_at(100, 100);
        dot.handle_event(InputEvent::Pressed(Direction::Right));

        let json = serde_json::to_string(&dot).expect("serialize");
        let mut dot: MovingEntity = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(dot.velocity(), IVec2::new(10, 0));

        dot.handle_event(InputEvent::Released(Direction::Right));
        dot.step(&level);
        assert_eq!(dot.velocity(), IVec2::ZERO);
        assert_eq!(dot.position(), IVec2::new(100, 100));
    }
}
