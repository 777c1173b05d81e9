//! Simulation tick
//!
//! One call to [`tick`] processes a frame's input and advances the scene.

use super::input::InputEvent;
use super::state::Scene;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events gathered since the previous tick, in arrival order
    pub events: Vec<InputEvent>,
    /// Milliseconds since the previous tick. `None` moves the dot by its
    /// velocity once per tick; `Some` treats velocity as pixels per second.
    pub elapsed_ms: Option<u64>,
}

impl TickInput {
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            elapsed_ms: None,
        }
    }
}

/// Advance the scene by one tick
pub fn tick(scene: &mut Scene, input: &TickInput) {
    for &event in &input.events {
        match event {
            InputEvent::Quit => {
                log::info!("Quit requested at tick {}", scene.time_ticks);
                scene.running = false;
            }
            InputEvent::FocusLost => {
                log::debug!("Focus lost, releasing held keys");
                scene.dot.release_all();
            }
            InputEvent::PointerMoved(_) | InputEvent::PointerDown(_) | InputEvent::PointerUp(_) => {
                for button in &mut scene.buttons {
                    if button.handle_event(event) {
                        log::debug!("Button at {:?} -> {:?}", button.rect.position(), button.state);
                    }
                }
            }
            InputEvent::Pressed(_) | InputEvent::Released(_) => scene.dot.handle_event(event),
        }
    }

    if !scene.running {
        return;
    }

    match input.elapsed_ms {
        Some(ms) => scene.dot.step_timed(&scene.level, ms),
        None => scene.dot.step(&scene.level),
    }

    scene.follow_dot();
    scene.particles.update(scene.dot.position());
    scene.time_ticks += 1;
}
