//! Pointer-driven buttons
//!
//! A button only tracks which of four looks it should show. Hit testing is
//! inclusive on every edge, so the pixel at `x + w` still counts as inside.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::input::InputEvent;

pub const BUTTON_WIDTH: i32 = 300;
pub const BUTTON_HEIGHT: i32 = 200;

/// Which sprite a button shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonState {
    #[default]
    MouseOut,
    MouseOverMotion,
    MouseDown,
    MouseUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub rect: Rect,
    pub state: ButtonState,
}

impl Button {
    pub fn new(position: IVec2) -> Self {
        Self {
            rect: Rect::new(position.x, position.y, BUTTON_WIDTH, BUTTON_HEIGHT),
            state: ButtonState::MouseOut,
        }
    }

    /// One button in each corner of a `width` x `height` view
    pub fn corners(width: i32, height: i32) -> [Button; 4] {
        let right = width - BUTTON_WIDTH;
        let bottom = height - BUTTON_HEIGHT;
        [
            Button::new(IVec2::ZERO),
            Button::new(IVec2::new(right, 0)),
            Button::new(IVec2::new(0, bottom)),
            Button::new(IVec2::new(right, bottom)),
        ]
    }

    pub fn hit(&self, p: IVec2) -> bool {
        self.rect.contains_point_inclusive(p)
    }

    /// Update the state from a pointer event. Returns whether it changed.
    /// Non-pointer events are ignored.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let (pos, inside_state) = match event {
            InputEvent::PointerMoved(p) => (p, ButtonState::MouseOverMotion),
            InputEvent::PointerDown(p) => (p, ButtonState::MouseDown),
            InputEvent::PointerUp(p) => (p, ButtonState::MouseUp),
            _ => return false,
        };

        let next = if self.hit(pos) {
            inside_state
        } else {
            ButtonState::MouseOut
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }
}
