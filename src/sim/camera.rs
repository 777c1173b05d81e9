//! Camera that keeps a target centred inside a larger level

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    /// Visible region in level coordinates
    pub view: Rect,
}

impl Camera {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            view: Rect::new(0, 0, width, height),
        }
    }

    /// Centre on `target`, then clamp so the view stays inside the level
    ///
    /// A level smaller than the view pins that axis to 0.
    pub fn follow(&mut self, target: &Rect, level_width: i32, level_height: i32) {
        let centre = target.centre();
        self.view.x = (centre.x - self.view.w / 2)
            .min(level_width - self.view.w)
            .max(0);
        self.view.y = (centre.y - self.view.h / 2)
            .min(level_height - self.view.h)
            .max(0);
    }

    /// Convert a level position to view coordinates
    #[inline]
    pub fn to_view(&self, p: IVec2) -> IVec2 {
        p - self.view.position()
    }
}
