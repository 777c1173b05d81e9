//! Rendering
//!
//! Drawing goes through a [`Canvas`] passed in by the caller; nothing here
//! holds a global renderer. [`render_scene`] walks a scene in draw order and
//! emits filled boxes in view coordinates.

pub mod ascii;

pub use ascii::AsciiCanvas;

use crate::sim::button::ButtonState;
use crate::sim::geometry::Rect;
use crate::sim::level::TileKind;
use crate::sim::particles::ParticleColor;
use crate::sim::shape::CollisionShape;
use crate::sim::state::Scene;

/// Particle sprites are drawn this size
pub const PARTICLE_SIZE: i32 = 4;

/// What a filled box represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    Floor(TileKind),
    Wall(TileKind),
    Obstacle,
    Dot,
    Particle(ParticleColor),
    Shimmer,
    Button(ButtonState),
}

/// A render target
pub trait Canvas {
    /// View size in pixels
    fn size(&self) -> (i32, i32);

    /// Reset to the background
    fn clear(&mut self);

    /// Fill a box given in view coordinates. Parts outside the view are clipped.
    fn fill_rect(&mut self, rect: Rect, brush: Brush);
}

/// Draw a shape's boxes (or a circle's bounding box) offset into view space
fn draw_shape(canvas: &mut impl Canvas, shape: &CollisionShape, scene: &Scene, brush: Brush) {
    let offset = -scene.camera.view.position();
    match shape {
        CollisionShape::Box(rect) => canvas.fill_rect(rect.translate(offset), brush),
        CollisionShape::Composite(rows) => {
            for row in rows {
                canvas.fill_rect(row.translate(offset), brush);
            }
        }
        CollisionShape::Circle(circle) => canvas.fill_rect(circle.bounds().translate(offset), brush),
    }
}

/// Draw a whole scene: tiles, obstacles, the dot, its particles, then
/// buttons on top in view space
pub fn render_scene(scene: &Scene, canvas: &mut impl Canvas) {
    canvas.clear();
    let camera = &scene.camera;

    if let Some(tiles) = &scene.level.tiles {
        for tile in tiles.visible(&camera.view) {
            let brush = if tile.kind.is_wall() {
                Brush::Wall(tile.kind)
            } else {
                Brush::Floor(tile.kind)
            };
            canvas.fill_rect(tile.rect.translate(-camera.view.position()), brush);
        }
    }

    for obstacle in &scene.level.obstacles {
        draw_shape(canvas, obstacle, scene, Brush::Obstacle);
    }

    draw_shape(canvas, scene.dot.shape(), scene, Brush::Dot);

    for particle in scene.particles.particles() {
        let view = camera.to_view(particle.pos);
        let rect = Rect::new(view.x, view.y, PARTICLE_SIZE, PARTICLE_SIZE);
        canvas.fill_rect(rect, Brush::Particle(particle.color));
        if particle.shimmering() {
            canvas.fill_rect(rect, Brush::Shimmer);
        }
    }

    for button in &scene.buttons {
        canvas.fill_rect(button.rect, Brush::Button(button.state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::level::Level;
    use glam::IVec2;

    /// Records every call for inspection
    #[derive(Default)]
    struct RecordingCanvas {
        clears: usize,
        fills: Vec<(Rect, Brush)>,
    }

    impl Canvas for RecordingCanvas {
        fn size(&self) -> (i32, i32) {
            (640, 480)
        }

        fn clear(&mut self) {
            self.clears += 1;
            self.fills.clear();
        }

        fn fill_rect(&mut self, rect: Rect, brush: Brush) {
            self.fills.push((rect, brush));
        }
    }

    #[test]
    fn test_render_order_and_view_offset() {
        let level = Level::new(1280, 960).with_obstacle(CollisionShape::Box(Rect::new(
            900, 700, 40, 40,
        )));
        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        let mut scene = Scene::from_settings(level, &settings, 9);
        scene.dot.set_position(IVec2::new(1000, 800));
        scene.follow_dot();

        let mut canvas = RecordingCanvas::default();
        render_scene(&scene, &mut canvas);

        assert_eq!(canvas.clears, 1);
        assert_eq!(canvas.fills.len(), 2);
        // Camera is clamped to (640, 480)
        assert_eq!(canvas.fills[0], (Rect::new(260, 220, 40, 40), Brush::Obstacle));
        assert_eq!(canvas.fills[1], (Rect::new(360, 320, 20, 20), Brush::Dot));
    }

    #[test]
    fn test_particles_drawn_with_shimmer() {
        let scene = Scene::from_settings(Level::new(640, 480), &Settings::default(), 5);
        let mut canvas = RecordingCanvas::default();
        render_scene(&scene, &mut canvas);

        let particles = canvas
            .fills
            .iter()
            .filter(|(_, b)| matches!(b, Brush::Particle(_)))
            .count();
        let shimmers = scene
            .particles
            .particles()
            .iter()
            .filter(|p| p.shimmering())
            .count();
        assert_eq!(particles, scene.particles.len());
        assert_eq!(
            canvas.fills.iter().filter(|(_, b)| *b == Brush::Shimmer).count(),
            shimmers
        );
    }

    #[test]
    fn test_buttons_drawn_last_without_camera_offset() {
        use crate::sim::button::Button;

        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        let mut scene = Scene::from_settings(Level::new(1280, 960), &settings, 2)
            .with_buttons([Button::new(IVec2::new(10, 20))]);
        scene.dot.set_position(IVec2::new(1000, 800));
        scene.follow_dot();

        let mut canvas = RecordingCanvas::default();
        render_scene(&scene, &mut canvas);
        assert_eq!(
            canvas.fills.last(),
            Some(&(Rect::new(10, 20, 300, 200), Brush::Button(ButtonState::MouseOut)))
        );
    }
}
