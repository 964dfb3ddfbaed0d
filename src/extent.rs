//! Axis-aligned bounding boxes over one or many primitives
//!
//! "No extent" is `None`, never a zero box, so folding with `union_extent`
//! treats it as the identity. Extents are computed on demand and never
//! cached on primitives: transforms mutate geometry in place.

use std::fmt;

use crate::primitive::Primitive;
use crate::types::Point;

/// Axis-aligned bounding box with `min.x <= max.x` and `min.y <= max.y`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    min: Point,
    max: Point,
}

impl Extent {
    /// Box spanning two opposite corners given in any order
    pub fn from_corners(a: Point, b: Point) -> Self {
        Extent {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Zero-area box at a single point
    pub fn from_point(p: Point) -> Self {
        Extent { min: p, max: p }
    }

    /// Smallest box containing every point; `None` for no points
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut ext = Extent::from_point(first);
        for p in points {
            ext.expand_point(p);
        }
        Some(ext)
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn union(self, other: Extent) -> Extent {
        Extent {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Get the center point
    pub fn center(&self) -> Point {
        Point {
            x: (self.min.x + self.max.x) / 2.0,
            y: (self.min.y + self.max.y) / 2.0,
        }
    }

    /// Closed box-box overlap (touching edges count).
    ///
    /// Separating-axis short-circuit: disjoint when either box lies wholly
    /// to one side of the other on some axis.
    pub fn overlaps(&self, other: &Extent) -> bool {
        !(self.min.x > other.max.x
            || self.max.x < other.min.x
            || self.min.y > other.max.y
            || self.max.y < other.min.y)
    }

    /// Both corners finite. A NaN corner would make `overlaps` true for everything.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// Extent of a single primitive; `None` when it has no selectable geometry
pub fn extent_of(primitive: &Primitive) -> Option<Extent> {
    primitive.extent()
}

/// Union treating a missing operand as the identity
pub fn union_extent(a: Option<Extent>, b: Option<Extent>) -> Option<Extent> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(b)),
        (Some(e), None) | (None, Some(e)) => Some(e),
        (None, None) => None,
    }
}

/// Fold of `extent_of` over `union_extent`. `None` for an empty sequence.
pub fn extent_of_all<'a>(primitives: impl IntoIterator<Item = &'a Primitive>) -> Option<Extent> {
    primitives
        .into_iter()
        .fold(None, |acc, p| union_extent(acc, extent_of(p)))
}

/// Center of an optional extent: `None` when there is nothing to center on
pub fn center_of(extent: Option<Extent>) -> Option<Point> {
    extent.map(|e| e.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{Circle, IdAllocator, Line, Text};

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn boxed(x0: f64, y0: f64, x1: f64, y1: f64) -> Extent {
        Extent::from_corners(pt(x0, y0), pt(x1, y1))
    }

    // ==================== Construction ====================

    #[test]
    fn from_corners_normalizes() {
        let a = boxed(10.0, 10.0, 2.0, 2.0);
        let b = boxed(2.0, 2.0, 10.0, 10.0);
        assert_eq!(a, b);
        assert_eq!(a.min(), pt(2.0, 2.0));
        assert_eq!(a.max(), pt(10.0, 10.0));

        let mixed = boxed(10.0, 2.0, 2.0, 10.0);
        assert_eq!(mixed, b);
    }

    #[test]
    fn from_points_empty_is_none() {
        assert_eq!(Extent::from_points(std::iter::empty()), None);
    }

    #[test]
    fn from_points_expands() {
        let ext = Extent::from_points([pt(1.0, 5.0), pt(-3.0, 2.0), pt(4.0, -1.0)]).unwrap();
        assert_eq!(ext.min(), pt(-3.0, -1.0));
        assert_eq!(ext.max(), pt(4.0, 5.0));
        assert_eq!(ext.width(), 7.0);
        assert_eq!(ext.height(), 6.0);
    }

    #[test]
    fn display_form() {
        insta::assert_snapshot!(boxed(-5.0, -5.0, 5.0, 5.0).to_string(), @"(-5, -5)..(5, 5)");
    }

    // ==================== Union ====================

    #[test]
    fn union_with_none_is_identity() {
        let e = boxed(0.0, 0.0, 1.0, 2.0);
        assert_eq!(union_extent(Some(e), None), Some(e));
        assert_eq!(union_extent(None, Some(e)), Some(e));
        assert_eq!(union_extent(None, None), None);
    }

    #[test]
    fn union_commutative_and_associative() {
        let boxes = [
            boxed(0.0, 0.0, 1.0, 1.0),
            boxed(-4.0, 3.0, -2.0, 8.0),
            boxed(5.0, -7.0, 6.0, -6.5),
            Extent::from_point(pt(0.5, 0.5)),
        ];
        for a in boxes {
            for b in boxes {
                assert_eq!(union_extent(Some(a), Some(b)), union_extent(Some(b), Some(a)));
                for c in boxes {
                    let left = union_extent(union_extent(Some(a), Some(b)), Some(c));
                    let right = union_extent(Some(a), union_extent(Some(b), Some(c)));
                    assert_eq!(left, right);
                }
            }
        }
    }

    // ==================== Aggregation ====================

    #[test]
    fn extent_of_all_empty_is_none() {
        let none: [Primitive; 0] = [];
        assert_eq!(extent_of_all(&none), None);
        assert_eq!(center_of(extent_of_all(&none)), None);
    }

    #[test]
    fn extent_of_all_mixes_kinds() {
        let mut ids = IdAllocator::new();
        let prims = [
            Primitive::new(ids.allocate(), Line::new(pt(0.0, 0.0), pt(10.0, 0.0)).unwrap()),
            Primitive::new(ids.allocate(), Circle::new(pt(20.0, 0.0), 5.0).unwrap()),
            Primitive::new(ids.allocate(), Text::new(pt(-3.0, 12.0), "note", 2.0).unwrap()),
        ];
        let ext = extent_of_all(&prims).unwrap();
        assert_eq!(ext.min(), pt(-3.0, -5.0));
        assert_eq!(ext.max(), pt(25.0, 12.0));
        assert_eq!(center_of(Some(ext)), Some(pt(11.0, 3.5)));
    }

    // ==================== Overlap ====================

    #[test]
    fn overlap_is_symmetric() {
        let boxes = [
            boxed(0.0, 0.0, 10.0, 10.0),
            boxed(6.0, 6.0, 10.0, 10.0),
            boxed(-5.0, -5.0, 5.0, 5.0),
            boxed(11.0, 0.0, 12.0, 1.0),
            Extent::from_point(pt(10.0, 10.0)),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn touching_edges_overlap() {
        assert!(boxed(0.0, 0.0, 1.0, 1.0).overlaps(&boxed(1.0, 0.0, 2.0, 1.0)));
        assert!(!boxed(0.0, 0.0, 1.0, 1.0).overlaps(&boxed(1.0001, 0.0, 2.0, 1.0)));
    }

    #[test]
    fn point_box_overlap() {
        let p = Extent::from_point(pt(4.0, 5.0));
        assert!(p.overlaps(&boxed(0.0, 0.0, 10.0, 10.0)));
        assert!(!p.overlaps(&boxed(5.0, 5.0, 10.0, 10.0)));
        assert!(boxed(0.0, 0.0, 10.0, 10.0).contains(pt(4.0, 5.0)));
    }
}
