// Copyright 2026 the Vitrail contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integer geometry primitives: points, sizes, rectangles, and line segments.
//!
//! Rectangles use half-open extents: a `Rect` at origin `(x, y)` with size
//! `(w, h)` covers the pixel range `[x, x+w) × [y, y+h)`. This makes
//! adjacent rectangles tile without overlap and mirrors how native drawing
//! APIs address pixel grids.

/// The scalar coordinate type used for all on-screen geometry.
pub type Coord = i32;

/// A position on the coordinate grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The horizontal coordinate.
    pub x: Coord,
    /// The vertical coordinate.
    pub y: Coord,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a new point.
    #[inline]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

/// A two-dimensional extent (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width component.
    pub w: Coord,
    /// The height component.
    pub h: Coord,
}

impl Size {
    /// The empty size, `0 × 0`.
    pub const ZERO: Self = Self { w: 0, h: 0 };

    /// Creates a new size.
    #[inline]
    pub const fn new(w: Coord, h: Coord) -> Self {
        Self { w, h }
    }

    /// Returns `true` if either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// An axis-aligned rectangle described by its origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The top-left corner.
    pub origin: Point,
    /// The extent of the rectangle.
    pub size: Size,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Creates a rectangle from an origin and a size.
    #[inline]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from raw coordinates and dimensions.
    #[inline]
    pub const fn from_xywh(x: Coord, y: Coord, w: Coord, h: Coord) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    /// The left edge (inclusive).
    #[inline]
    pub const fn x1(&self) -> Coord {
        self.origin.x
    }

    /// The top edge (inclusive).
    #[inline]
    pub const fn y1(&self) -> Coord {
        self.origin.y
    }

    /// The right edge (exclusive), `x + w`.
    #[inline]
    pub const fn x2(&self) -> Coord {
        self.origin.x + self.size.w
    }

    /// The bottom edge (exclusive), `y + h`.
    #[inline]
    pub const fn y2(&self) -> Coord {
        self.origin.y + self.size.h
    }

    /// The width of the rectangle.
    #[inline]
    pub const fn w(&self) -> Coord {
        self.size.w
    }

    /// The height of the rectangle.
    #[inline]
    pub const fn h(&self) -> Coord {
        self.size.h
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Tests whether a point lies inside the half-open extent
    /// `[x1, x2) × [y1, y2)`.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x1() && pt.x < self.x2() && pt.y >= self.y1() && pt.y < self.y2()
    }

    /// Computes the intersection of two rectangles.
    ///
    /// Returns the zero-area [`Rect::ZERO`] when the extents do not overlap;
    /// rectangles that merely touch along an edge do not intersect.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let nx1 = self.x1().max(other.x1());
        let ny1 = self.y1().max(other.y1());
        let nx2 = self.x2().min(other.x2());
        let ny2 = self.y2().min(other.y2());

        if nx2 <= nx1 || ny2 <= ny1 {
            return Rect::ZERO;
        }

        Rect::from_xywh(nx1, ny1, nx2 - nx1, ny2 - ny1)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The first endpoint.
    pub a: Point,
    /// The second endpoint.
    pub b: Point,
}

impl Line {
    /// Creates a segment between two points.
    #[inline]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Tests whether a point lies on the segment.
    ///
    /// The point must be colinear with the endpoints (zero cross product)
    /// and inside the segment's bounding box; both endpoints are included.
    pub fn contains(&self, pt: Point) -> bool {
        let dx1 = self.b.x - self.a.x;
        let dy1 = self.b.y - self.a.y;
        let dx2 = pt.x - self.a.x;
        let dy2 = pt.y - self.a.y;

        if dx1 * dy2 != dx2 * dy1 {
            return false;
        }

        let min_x = self.a.x.min(self.b.x);
        let max_x = self.a.x.max(self.b.x);
        let min_y = self.a.y.min(self.b.y);
        let max_y = self.a.y.max(self.b.y);

        pt.x >= min_x && pt.x <= max_x && pt.y >= min_y && pt.y <= max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::from_xywh(10, 20, 30, 40);
        assert_eq!(r.x1(), 10);
        assert_eq!(r.y1(), 20);
        assert_eq!(r.x2(), 40);
        assert_eq!(r.y2(), 60);
        assert_eq!(r.w(), 30);
        assert_eq!(r.h(), 40);
    }

    #[test]
    fn test_rect_contains_half_open() {
        let r = Rect::from_xywh(0, 0, 10, 10);

        assert!(r.contains(Point::new(5, 5)));
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(9, 9)));

        // Right/bottom edges are exclusive.
        assert!(!r.contains(Point::new(10, 10)));
        assert!(!r.contains(Point::new(10, 5)));
        assert!(!r.contains(Point::new(5, 10)));
        assert!(!r.contains(Point::new(-1, 5)));
    }

    #[test]
    fn test_rect_intersect_overlapping() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let b = Rect::from_xywh(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Rect::from_xywh(5, 5, 5, 5));
        assert_eq!(b.intersect(&a), Rect::from_xywh(5, 5, 5, 5));
    }

    #[test]
    fn test_rect_intersect_disjoint_is_empty() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let b = Rect::from_xywh(20, 20, 5, 5);
        assert_eq!(a.intersect(&b), Rect::ZERO);
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn test_rect_intersect_touching_edge_is_empty() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let b = Rect::from_xywh(10, 0, 10, 10);
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn test_rect_intersect_contained() {
        let outer = Rect::from_xywh(0, 0, 100, 100);
        let inner = Rect::from_xywh(25, 25, 10, 10);
        assert_eq!(outer.intersect(&inner), inner);
    }

    #[test]
    fn test_line_contains_colinear_points() {
        let l = Line::new(Point::new(0, 0), Point::new(10, 10));

        assert!(l.contains(Point::new(5, 5)));
        assert!(l.contains(Point::new(0, 0)));
        assert!(l.contains(Point::new(10, 10)));

        // Colinear but outside the bounding box.
        assert!(!l.contains(Point::new(11, 11)));
        assert!(!l.contains(Point::new(-1, -1)));

        // Inside the bounding box but off the line.
        assert!(!l.contains(Point::new(5, 6)));
    }

    #[test]
    fn test_line_contains_horizontal() {
        let l = Line::new(Point::new(2, 3), Point::new(8, 3));
        assert!(l.contains(Point::new(4, 3)));
        assert!(!l.contains(Point::new(4, 4)));
        assert!(!l.contains(Point::new(9, 3)));
    }
}
