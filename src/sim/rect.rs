//! Axis-aligned integer rectangles
//!
//! A rectangle covers `min..max` on both axes (max is exclusive), so two
//! rectangles that merely share an edge do not overlap.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box with integer corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: IVec2,
    pub max: IVec2,
}

impl Rect {
    /// The canonical empty rectangle, returned for non-overlapping pairs
    pub const EMPTY: Rect = Rect {
        min: IVec2::ZERO,
        max: IVec2::ZERO,
    };

    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min: IVec2::new(min_x, min_y),
            max: IVec2::new(max_x, max_y),
        }
    }

    /// Rectangle of the given size with its top-left corner at `(x, y)`
    pub const fn from_origin(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        self.max - self.min
    }

    /// True when the rectangle has no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Overlap of two rectangles, or [`Rect::EMPTY`] when they do not intersect
    pub fn intersect(&self, other: &Rect) -> Rect {
        let overlap = Rect {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        };
        if overlap.is_empty() {
            Rect::EMPTY
        } else {
            overlap
        }
    }

    /// Copy of this rectangle moved by `offset`
    #[inline]
    pub fn translated(&self, offset: IVec2) -> Rect {
        Rect {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Move this rectangle in place by `offset`
    #[inline]
    pub fn translate(&mut self, offset: IVec2) {
        *self = self.translated(offset);
    }

    /// Integer center (truncated toward the min corner)
    #[inline]
    pub fn center(&self) -> IVec2 {
        self.min + self.size() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        let r = Rect::new(25, 488, 125, 500);
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 12);
        assert_eq!(r.center(), IVec2::new(75, 494));
    }

    #[test]
    fn test_intersect_overlapping() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 8, 20, 20);
        let overlap = a.intersect(&b);
        assert_eq!(overlap, Rect::new(5, 8, 10, 10));
        assert!(!overlap.is_empty());
    }

    #[test]
    fn test_intersect_touching_edges_is_empty() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 20, 10);
        assert!(a.intersect(&b).is_empty());
        assert_eq!(a.intersect(&b), Rect::EMPTY);
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(50, 50, 60, 60);
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn test_translate() {
        let mut r = Rect::from_origin(25, 25, 5, 5);
        r.translate(IVec2::new(3, -2));
        assert_eq!(r, Rect::new(28, 23, 33, 28));
        assert_eq!(r.translated(IVec2::new(-3, 2)), Rect::new(25, 25, 30, 30));
    }
}
