//! Overlap tests for axis-aligned boxes and circles
//!
//! Everything here is integer arithmetic. Distances are only ever compared in
//! squared form, widened to `i64` so large coordinates cannot overflow.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Top-left corner
    #[inline]
    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    /// Centre point (rounded toward the top-left)
    pub fn centre(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Copy of this box moved by `offset`
    pub fn translate(&self, offset: IVec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains_point(&self, p: IVec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Closed containment: a point on the right or bottom edge is inside.
    /// Pointer hit tests use this.
    pub fn contains_point_inclusive(&self, p: IVec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Smallest box covering both
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }
}

/// A circle: centre plus radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub center: IVec2,
    pub radius: i32,
}

impl Circle {
    pub const fn new(x: i32, y: i32, radius: i32) -> Self {
        Self {
            center: IVec2::new(x, y),
            radius,
        }
    }

    /// Bounding box of the circle
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2,
            self.radius * 2,
        )
    }
}

/// Squared distance between two points
#[inline]
pub fn squared_distance(a: IVec2, b: IVec2) -> i64 {
    let dx = b.x as i64 - a.x as i64;
    let dy = b.y as i64 - a.y as i64;
    dx * dx + dy * dy
}

/// Check whether two boxes overlap
///
/// Edges are half-open: boxes that only share an edge do not overlap.
pub fn boxes_overlap(a: &Rect, b: &Rect) -> bool {
    if a.bottom() <= b.top() {
        return false;
    }
    if a.top() >= b.bottom() {
        return false;
    }
    if a.right() <= b.left() {
        return false;
    }
    if a.left() >= b.right() {
        return false;
    }
    true
}

/// Check whether any box of `a` overlaps any box of `b`
pub fn composites_overlap(a: &[Rect], b: &[Rect]) -> bool {
    a.iter().any(|ra| b.iter().any(|rb| boxes_overlap(ra, rb)))
}

/// Check whether two circles overlap (touching circles do not)
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    let total_radius = a.radius as i64 + b.radius as i64;
    squared_distance(a.center, b.center) < total_radius * total_radius
}

/// Closest point on (or in) the box to `p`
pub fn clamp_to_box(p: IVec2, b: &Rect) -> IVec2 {
    let x = if p.x < b.left() {
        b.left()
    } else if p.x > b.right() {
        b.right()
    } else {
        p.x
    };

    let y = if p.y < b.top() {
        b.top()
    } else if p.y > b.bottom() {
        b.bottom()
    } else {
        p.y
    };

    IVec2::new(x, y)
}

/// Check whether a circle overlaps a box
///
/// Clamps the centre onto the box and compares the squared distance from
/// that point against the squared radius. A centre inside the box clamps to
/// itself (distance zero).
pub fn circle_overlaps_box(c: &Circle, b: &Rect) -> bool {
    let closest = clamp_to_box(c.center, b);
    let r = c.radius as i64;
    squared_distance(c.center, closest) < r * r
}
