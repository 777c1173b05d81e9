//! Collision shapes
//!
//! A shape is one box, an ordered list of boxes approximating a sprite
//! silhouette, or a circle. `overlaps` is the only place the variants are
//! matched against each other.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{
    Circle, Rect, boxes_overlap, circle_overlaps_box, circles_overlap, composites_overlap,
};

/// Row sizes (width, height) of the round dot silhouette, top to bottom
const DOT_SILHOUETTE: [(i32, i32); 11] = [
    (6, 1),
    (10, 1),
    (14, 1),
    (16, 2),
    (18, 2),
    (20, 6),
    (18, 2),
    (16, 2),
    (14, 1),
    (10, 1),
    (6, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionShape {
    Box(Rect),
    /// Rows of boxes, stacked top to bottom and centred horizontally
    Composite(Vec<Rect>),
    Circle(Circle),
}

impl CollisionShape {
    /// Box of the given size at the origin
    pub fn rect(w: i32, h: i32) -> Self {
        CollisionShape::Box(Rect::new(0, 0, w, h))
    }

    /// Circle of the given radius centred on the origin
    pub fn circle(radius: i32) -> Self {
        CollisionShape::Circle(Circle::new(0, 0, radius))
    }

    /// Composite built from (width, height) rows, laid out at the origin
    pub fn composite(rows: &[(i32, i32)]) -> Self {
        let mut shape =
            CollisionShape::Composite(rows.iter().map(|&(w, h)| Rect::new(0, 0, w, h)).collect());
        shape.shift_to(IVec2::ZERO);
        shape
    }

    /// The 20x20 round dot as an 11-row composite
    pub fn dot_silhouette() -> Self {
        Self::composite(&DOT_SILHOUETTE)
    }

    /// Bounding box of the shape in its current position
    pub fn bounds(&self) -> Rect {
        match self {
            CollisionShape::Box(rect) => *rect,
            CollisionShape::Circle(circle) => circle.bounds(),
            CollisionShape::Composite(rows) => {
                let mut iter = rows.iter();
                match iter.next() {
                    Some(first) => iter.fold(*first, |acc, r| acc.union(r)),
                    None => Rect::default(),
                }
            }
        }
    }

    /// Move the shape so it sits at an entity offset
    ///
    /// Boxes put their top-left corner at `origin`, circles put their centre
    /// there, and composites stack their rows downward from `origin.y`,
    /// each row centred within the widest one.
    pub fn shift_to(&mut self, origin: IVec2) {
        match self {
            CollisionShape::Box(rect) => {
                rect.x = origin.x;
                rect.y = origin.y;
            }
            CollisionShape::Circle(circle) => {
                circle.center = origin;
            }
            CollisionShape::Composite(rows) => {
                let width = rows.iter().map(|r| r.w).max().unwrap_or(0);
                let mut row_offset = 0;
                for row in rows.iter_mut() {
                    row.x = origin.x + (width - row.w) / 2;
                    row.y = origin.y + row_offset;
                    row_offset += row.h;
                }
            }
        }
    }

    /// Check whether this shape overlaps another
    pub fn overlaps(&self, other: &CollisionShape) -> bool {
        use CollisionShape as S;

        match (self, other) {
            (S::Box(a), S::Box(b)) => boxes_overlap(a, b),
            (S::Box(a), S::Composite(rows)) | (S::Composite(rows), S::Box(a)) => {
                rows.iter().any(|r| boxes_overlap(a, r))
            }
            (S::Composite(a), S::Composite(b)) => composites_overlap(a, b),
            (S::Circle(c), S::Box(b)) | (S::Box(b), S::Circle(c)) => circle_overlaps_box(c, b),
            (S::Circle(c), S::Composite(rows)) | (S::Composite(rows), S::Circle(c)) => {
                rows.iter().any(|r| circle_overlaps_box(c, r))
            }
            (S::Circle(a), S::Circle(b)) => circles_overlap(a, b),
        }
    }

    /// Check whether this shape overlaps a plain box
    pub fn overlaps_rect(&self, rect: &Rect) -> bool {
        match self {
            CollisionShape::Box(a) => boxes_overlap(a, rect),
            CollisionShape::Composite(rows) => rows.iter().any(|r| boxes_overlap(r, rect)),
            CollisionShape::Circle(c) => circle_overlaps_box(c, rect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_silhouette_layout() {
        let shape = CollisionShape::dot_silhouette();
        assert_eq!(shape.bounds(), Rect::new(0, 0, 20, 20));

        let CollisionShape::Composite(rows) = &shape else {
            panic!("expected composite");
        };
        assert_eq!(rows.len(), 11);
        // Top row is 6 wide, centred in 20
        assert_eq!(rows[0], Rect::new(7, 0, 6, 1));
        // Widest row starts at x=0 after 1+1+1+2+2 rows
        assert_eq!(rows[5], Rect::new(0, 7, 20, 6));
        assert_eq!(rows[10], Rect::new(7, 19, 6, 1));
    }

    #[test]
    fn test_shift_composite_follows_origin() {
        let mut shape = CollisionShape::dot_silhouette();
        shape.shift_to(IVec2::new(100, 50));
        assert_eq!(shape.bounds(), Rect::new(100, 50, 20, 20));
    }

    #[test]
    fn test_shift_circle_moves_centre() {
        let mut shape = CollisionShape::circle(10);
        shape.shift_to(IVec2::new(30, 40));
        assert_eq!(shape.bounds(), Rect::new(20, 30, 20, 20));
    }

    #[test]
    fn test_composite_corner_miss() {
        // The silhouette's corners are empty, so a box tucked into the
        // top-left corner misses it even though the bounds overlap.
        let dot = CollisionShape::dot_silhouette();
        let corner = CollisionShape::Box(Rect::new(0, 0, 3, 3));
        assert!(boxes_overlap(&dot.bounds(), &Rect::new(0, 0, 3, 3)));
        assert!(!dot.overlaps(&corner));
        assert!(!corner.overlaps(&dot));

        let centre = CollisionShape::Box(Rect::new(9, 9, 2, 2));
        assert!(dot.overlaps(&centre));
    }

    #[test]
    fn test_dispatch_is_symmetric_across_variants() {
        let mut circle = CollisionShape::circle(10);
        circle.shift_to(IVec2::new(25, 10));
        let rect = CollisionShape::Box(Rect::new(0, 0, 20, 20));
        let mut dot = CollisionShape::dot_silhouette();
        dot.shift_to(IVec2::new(10, 0));

        let shapes = [circle, rect, dot];
        for a in &shapes {
            for b in &shapes {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_circle_vs_circle_shape() {
        let mut a = CollisionShape::circle(10);
        let mut b = CollisionShape::circle(10);
        a.shift_to(IVec2::new(0, 0));
        b.shift_to(IVec2::new(19, 0));
        assert!(a.overlaps(&b));
        b.shift_to(IVec2::new(20, 0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_overlaps_rect() {
        let dot = CollisionShape::dot_silhouette();
        assert!(dot.overlaps_rect(&Rect::new(10, 10, 1, 1)));
        assert!(!dot.overlaps_rect(&Rect::new(20, 0, 10, 10)));
    }
}
