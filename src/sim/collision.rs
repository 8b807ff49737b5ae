//! Axis-aligned collision detection
//!
//! Everything in the game is an axis-aligned box, so the whole detector is
//! one pure overlap predicate. Bounds are logical units, independent of how
//! the renderer sizes things on screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + extent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Build a rect of the given square edge length centered on `pos`
    pub fn centered_square(pos: Vec2, size: f32) -> Self {
        Self {
            x: pos.x - size / 2.0,
            y: pos.y - size / 2.0,
            w: size,
            h: size,
        }
    }

    /// Standard AABB overlap test. Rectangles that merely touch along an
    /// edge (exact coordinate equality) do not count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Free-function form of [`Rect::overlaps`]
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_collide() {
        let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
        let b = Rect { x: 5.0, y: 5.0, w: 10.0, h: 10.0 };
        assert!(rects_overlap(&a, &b));
    }

    #[test]
    fn test_separated_rects_do_not_collide() {
        let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
        let b = Rect { x: 20.0, y: 0.0, w: 10.0, h: 10.0 };
        assert!(!rects_overlap(&a, &b));

        // Separated on y only
        let c = Rect { x: 0.0, y: 30.0, w: 10.0, h: 10.0 };
        assert!(!rects_overlap(&a, &c));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
        // Shares the x = 10 edge exactly
        let b = Rect { x: 10.0, y: 0.0, w: 10.0, h: 10.0 };
        assert!(!rects_overlap(&a, &b));

        // Shares the y = 10 edge exactly
        let c = Rect { x: 0.0, y: 10.0, w: 10.0, h: 10.0 };
        assert!(!rects_overlap(&a, &c));

        // Shares only a corner point
        let d = Rect { x: 10.0, y: 10.0, w: 10.0, h: 10.0 };
        assert!(!rects_overlap(&a, &d));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let cases = [
            (
                Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 },
                Rect { x: 5.0, y: 5.0, w: 10.0, h: 10.0 },
            ),
            (
                Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 },
                Rect { x: 10.0, y: 0.0, w: 10.0, h: 10.0 },
            ),
            (
                Rect { x: -3.0, y: 7.0, w: 2.0, h: 40.0 },
                Rect { x: 100.0, y: 0.0, w: 1.0, h: 1.0 },
            ),
            (
                Rect { x: 0.0, y: 0.0, w: 50.0, h: 50.0 },
                Rect { x: 10.0, y: 10.0, w: 5.0, h: 5.0 },
            ),
        ];
        for (a, b) in cases {
            assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a));
        }
    }

    #[test]
    fn test_contained_rect_collides() {
        let outer = Rect { x: 0.0, y: 0.0, w: 100.0, h: 100.0 };
        let inner = Rect { x: 40.0, y: 40.0, w: 10.0, h: 10.0 };
        assert!(rects_overlap(&outer, &inner));
        assert!(rects_overlap(&inner, &outer));
    }

    #[test]
    fn test_centered_square() {
        let r = Rect::centered_square(Vec2::new(100.0, 50.0), 48.0);
        assert_eq!(r.x, 76.0);
        assert_eq!(r.y, 26.0);
        assert_eq!(r.w, 48.0);
        assert_eq!(r.h, 48.0);
    }
}
