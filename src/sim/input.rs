//! Directional input with key-repeat suppression
//!
//! Held keys usually repeat. Only the first press and the matching release
//! change velocity, so held state is tracked here per direction instead of
//! trusting a repeat flag from the host.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A logical movement direction (screen space, +y is down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Slot in a per-direction table
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Unit step for this direction
    pub fn unit(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

/// A discrete input event consumed by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed(Direction),
    Released(Direction),
    /// Pointer moved to a position in view coordinates
    PointerMoved(IVec2),
    /// Pointer button pressed at a position
    PointerDown(IVec2),
    /// Pointer button released at a position
    PointerUp(IVec2),
    /// The window lost keyboard focus; held keys will never see a release
    FocusLost,
    /// The host asked to close
    Quit,
}

/// Tracks which directions are held and turns press/release edges into
/// velocity changes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalInput {
    /// Indexed by [`Direction::index`]
    held: [bool; 4],
}

impl DirectionalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Velocity change caused by `event`, given a per-press `increment`
    ///
    /// Repeated presses of a held direction and releases of a direction
    /// that was never pressed produce no change.
    pub fn apply(&mut self, event: InputEvent, increment: i32) -> IVec2 {
        match event {
            InputEvent::Pressed(dir) => {
                let slot = &mut self.held[dir.index()];
                if *slot {
                    IVec2::ZERO
                } else {
                    *slot = true;
                    dir.unit() * increment
                }
            }
            InputEvent::Released(dir) => {
                let slot = &mut self.held[dir.index()];
                if *slot {
                    *slot = false;
                    -dir.unit() * increment
                } else {
                    IVec2::ZERO
                }
            }
            InputEvent::FocusLost => self.release_all(increment),
            InputEvent::PointerMoved(_)
            | InputEvent::PointerDown(_)
            | InputEvent::PointerUp(_)
            | InputEvent::Quit => IVec2::ZERO,
        }
    }

    /// Release every held direction, returning the cancelling velocity change
    pub fn release_all(&mut self, increment: i32) -> IVec2 {
        let mut delta = IVec2::ZERO;
        for dir in Direction::ALL {
            let slot = &mut self.held[dir.index()];
            if *slot {
                *slot = false;
                delta -= dir.unit() * increment;
            }
        }
        delta
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held[dir.index()]
    }

    /// Number of directions currently held
    pub fn held_count(&self) -> usize {
        self.held.iter().filter(|&&held| held).count()
    }
}
