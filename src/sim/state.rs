//! Scene state
//!
//! Everything one run of the simulation owns lives in a [`Scene`]: the
//! player entity, the level it moves in, the camera, and its particle trail.

use super::button::Button;
use super::camera::Camera;
use super::entity::MovingEntity;
use super::level::Level;
use super::particles::ParticleTrail;
use super::shape::CollisionShape;
use crate::consts::*;
use crate::settings::Settings;

/// Complete state for one run
#[derive(Debug, Clone)]
pub struct Scene {
    pub dot: MovingEntity,
    pub level: Level,
    pub camera: Camera,
    pub particles: ParticleTrail,
    /// Pointer buttons, in view coordinates
    pub buttons: Vec<Button>,
    /// Cleared when a quit event arrives
    pub running: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Scene {
    /// Scene with `dot` in `level`, viewed through a screen-sized camera
    pub fn new(level: Level, dot: MovingEntity, particle_count: usize, seed: u64) -> Self {
        let particles = ParticleTrail::new(particle_count, dot.position(), seed);
        let mut scene = Self {
            dot,
            level,
            camera: Camera::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            particles,
            buttons: Vec::new(),
            running: true,
            time_ticks: 0,
        };
        scene.follow_dot();
        scene
    }

    /// Build a scene from settings with the dot at the level's spawn point.
    /// The dot is a box, or the round composite when per-pixel collision is on.
    pub fn from_settings(level: Level, settings: &Settings, seed: u64) -> Self {
        let shape = if settings.per_pixel_collision {
            CollisionShape::dot_silhouette()
        } else {
            CollisionShape::rect(DOT_WIDTH, DOT_HEIGHT)
        };
        let speed = if settings.frame_independent {
            settings.timed_velocity
        } else {
            settings.dot_velocity
        };
        let dot = MovingEntity::new(level.spawn, shape, speed);
        log::info!(
            "Scene: level {}x{}, {} obstacles, tiles={}, speed={}",
            level.width,
            level.height,
            level.obstacles.len(),
            level.tiles.is_some(),
            speed
        );
        Self::new(level, dot, settings.max_particles(), seed)
    }

    pub fn with_buttons(mut self, buttons: impl IntoIterator<Item = Button>) -> Self {
        self.buttons.extend(buttons);
        self
    }

    /// Re-centre the camera on the dot
    pub fn follow_dot(&mut self) {
        self.camera
            .follow(&self.dot.bounds(), self.level.width, self.level.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_scene_from_settings() {
        let settings = Settings::default();
        let scene = Scene::from_settings(Level::new(LEVEL_WIDTH, LEVEL_HEIGHT), &settings, 1);
        assert!(scene.running);
        assert_eq!(scene.dot.speed(), DOT_VEL);
        assert_eq!(scene.dot.bounds().size(), IVec2::new(DOT_WIDTH, DOT_HEIGHT));
        assert_eq!(scene.particles.len(), settings.max_particles());
        assert_eq!(scene.camera.view.position(), IVec2::ZERO);
    }

    #[test]
    fn test_scene_frame_independent_speed() {
        let settings = Settings {
            frame_independent: true,
            per_pixel_collision: true,
            ..Settings::default()
        };
        let scene = Scene::from_settings(Level::new(640, 480), &settings, 1);
        assert_eq!(scene.dot.speed(), DOT_VEL_PER_SEC);
        assert!(matches!(scene.dot.shape(), CollisionShape::Composite(_)));
    }
}
