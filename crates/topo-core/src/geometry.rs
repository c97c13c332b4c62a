#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Two coordinate spaces meet here. Display space is floating point with an
//! arbitrary origin (in practice the primary display's top-left corner).
//! Pane space is integer pixels measured from the top-left corner of the
//! arrangement widget.

use serde::{Deserialize, Serialize};

/// A point in display space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(self, other: PointF) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<PanePoint> for PointF {
    fn from(point: PanePoint) -> Self {
        Self::new(f64::from(point.x), f64::from(point.y))
    }
}

/// A point in pane space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PanePoint {
    pub x: i32,
    pub y: i32,
}

impl PanePoint {
    /// Create a new pane point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rendered bounds of a block in pane space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PaneRect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PaneRect {
    /// Create a new pane rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> PanePoint {
        PanePoint::new(self.x, self.y)
    }
}

/// An axis-aligned rectangle stored by its four edges.
///
/// Both edges of each axis are kept explicitly. Deriving `right` as
/// `left + width` at different call sites is not guaranteed to produce the
/// same value, so adjacency checks compare stored edges only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectF {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectF {
    /// Create a new rectangle from its edges.
    #[inline]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from its top-left corner and size.
    #[inline]
    pub fn from_origin_size(origin: PointF, width: f64, height: f64) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Top-left corner.
    #[inline]
    pub const fn top_left(&self) -> PointF {
        PointF::new(self.left, self.top)
    }

    /// Bottom-right corner.
    #[inline]
    pub const fn bottom_right(&self) -> PointF {
        PointF::new(self.right, self.bottom)
    }

    /// True when every edge is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// The smallest rectangle that contains both.
    pub fn union(&self, other: &RectF) -> RectF {
        RectF::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Check whether the interiors overlap.
    ///
    /// Rectangles that only share an edge or a corner do not intersect.
    #[inline]
    pub fn intersects(&self, other: &RectF) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Compute the overlap with another rectangle, returning `None` if the
    /// interiors do not overlap.
    pub fn intersection_opt(&self, other: &RectF) -> Option<RectF> {
        if !self.intersects(other) {
            return None;
        }
        Some(RectF::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        ))
    }

    /// Same size, top-left corner moved to `origin`.
    pub fn offset_to(&self, origin: PointF) -> RectF {
        RectF::from_origin_size(origin, self.width(), self.height())
    }
}
