//! Primitive types for technical drawings
//!
//! Each primitive kind is its own type that knows how to:
//! - Report its bounding extent
//! - Translate itself by an offset
//! - Rotate itself about a pivot
//!
//! `Shape` is the closed sum over all kinds. Dispatch is generated by
//! `enum_dispatch`, so adding a kind fails to compile until every
//! `Geometry` method handles it.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::errors::ConstructionError;
use crate::extent::Extent;
use crate::types::{Angle, Length, NumericError, Offset, Point};

/// Stable opaque handle for a primitive.
///
/// Identity is independent of geometry: two coincident lines are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveId(u64);

impl fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out unique `PrimitiveId`s. Ids are never reused.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> PrimitiveId {
        let id = PrimitiveId(self.next);
        self.next += 1;
        id
    }
}

/// The kind of a primitive, without its geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Line,
    Arc,
    Circle,
    Spline,
    Polyline,
    Text,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveKind::Line => "line",
            PrimitiveKind::Arc => "arc",
            PrimitiveKind::Circle => "circle",
            PrimitiveKind::Spline => "spline",
            PrimitiveKind::Polyline => "polyline",
            PrimitiveKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// Common behavior for all primitive kinds
#[enum_dispatch]
pub trait Geometry {
    fn kind(&self) -> PrimitiveKind;

    /// Axis-aligned bounding box. `None` means the primitive is not selectable.
    fn extent(&self) -> Option<Extent>;

    /// Move every coordinate-bearing field by `delta`
    fn translate(&mut self, delta: Offset);

    /// Rotate every coordinate about `pivot` by `radians` (CCW positive)
    fn rotate_about(&mut self, pivot: Point, radians: f64);

    /// Whether every coordinate and angle is finite
    fn is_finite(&self) -> bool;
}

fn finite_point(p: Point, what: &'static str) -> Result<Point, ConstructionError> {
    Point::try_new(p.x, p.y).map_err(ConstructionError::non_finite(what))
}

fn finite_points(
    kind: PrimitiveKind,
    points: Vec<Point>,
    what: &'static str,
) -> Result<Vec<Point>, ConstructionError> {
    if points.len() < 2 {
        return Err(ConstructionError::TooFewPoints {
            kind,
            count: points.len(),
        });
    }
    for p in &points {
        finite_point(*p, what)?;
    }
    Ok(points)
}

fn positive(value: f64, on_bad: fn(f64) -> ConstructionError) -> Result<Length, ConstructionError> {
    match Length::try_positive(value) {
        Ok(len) => Ok(len),
        Err(e @ (NumericError::NaN | NumericError::Infinite)) => {
            Err(ConstructionError::NonFinite { what: "length", source: e })
        }
        Err(NumericError::Zero | NumericError::Negative) => Err(on_bad(value)),
    }
}

fn finite_angle(angle: Angle, what: &'static str) -> Result<Angle, ConstructionError> {
    if angle.is_finite() {
        Ok(angle)
    } else {
        let source = if angle.0.is_nan() {
            NumericError::NaN
        } else {
            NumericError::Infinite
        };
        Err(ConstructionError::NonFinite { what, source })
    }
}

// ============================================================================
// Primitive Kinds
// ============================================================================

/// A straight segment between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Result<Self, ConstructionError> {
        Ok(Self {
            start: finite_point(start, "line start")?,
            end: finite_point(end, "line end")?,
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }
}

impl Geometry for Line {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Line
    }

    fn extent(&self) -> Option<Extent> {
        Extent::from_points([self.start, self.end])
    }

    fn translate(&mut self, delta: Offset) {
        self.start += delta;
        self.end += delta;
    }

    fn rotate_about(&mut self, pivot: Point, radians: f64) {
        self.start = self.start.rotated_about(pivot, radians);
        self.end = self.end.rotated_about(pivot, radians);
    }

    fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// A circular arc swept counter-clockwise from `start_angle` to `end_angle`.
///
/// `start_angle` may be numerically larger than `end_angle`; the sweep still
/// runs CCW and wraps through 0°.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point,
    radius: Length,
    start_angle: Angle,
    end_angle: Angle,
}

impl Arc {
    pub fn new(
        center: Point,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
    ) -> Result<Self, ConstructionError> {
        Ok(Self {
            center: finite_point(center, "arc center")?,
            radius: positive(radius, |value| ConstructionError::NonPositiveRadius { value })?,
            start_angle: finite_angle(start_angle, "arc start angle")?,
            end_angle: finite_angle(end_angle, "arc end angle")?,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius.raw()
    }

    pub fn start_angle(&self) -> Angle {
        self.start_angle
    }

    pub fn end_angle(&self) -> Angle {
        self.end_angle
    }

    /// CCW sweep in degrees, in `[0, 360]`. A non-zero multiple of 360 is a full turn.
    pub fn sweep(&self) -> Angle {
        let raw = self.end_angle.0 - self.start_angle.0;
        let wrapped = raw.rem_euclid(360.0);
        if wrapped == 0.0 && raw != 0.0 {
            Angle(360.0)
        } else {
            Angle(wrapped)
        }
    }

    fn point_at(&self, angle: Angle) -> Point {
        let (sin, cos) = angle.to_radians().sin_cos();
        let r = self.radius.raw();
        Point::new(self.center.x + r * cos, self.center.y + r * sin)
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle)
    }

    /// Exact bounding box: the endpoints plus every axis extremum
    /// (0°, 90°, 180°, 270°) the sweep passes through.
    ///
    /// Selection uses the looser endpoint box from `Geometry::extent`.
    pub fn swept_extent(&self) -> Option<Extent> {
        let sweep = self.sweep().0;
        let extrema = [0.0, 90.0, 180.0, 270.0]
            .into_iter()
            .filter(|a: &f64| (a - self.start_angle.0).rem_euclid(360.0) <= sweep)
            .map(|a| self.point_at(Angle(a)));
        Extent::from_points([self.start_point(), self.end_point()].into_iter().chain(extrema))
    }
}

impl Geometry for Arc {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Arc
    }

    // Endpoints only: an arc bulging past its chord is under-covered.
    // Selection behavior depends on this box, see `swept_extent` for the exact one.
    fn extent(&self) -> Option<Extent> {
        Extent::from_points([self.start_point(), self.end_point()])
    }

    fn translate(&mut self, delta: Offset) {
        self.center += delta;
    }

    fn rotate_about(&mut self, pivot: Point, radians: f64) {
        let sweep = self.sweep();
        self.center = self.center.rotated_about(pivot, radians);
        self.start_angle = (self.start_angle + Angle::from_radians(radians)).normalized();
        // Both angles land in [0, 360); a full turn keeps end one revolution past start
        self.end_angle = if sweep.0 >= 360.0 - 1e-9 {
            self.start_angle + sweep
        } else {
            (self.start_angle + sweep).normalized()
        };
    }

    fn is_finite(&self) -> bool {
        self.center.is_finite() && self.start_angle.is_finite() && self.end_angle.is_finite()
    }
}

/// A full circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: Length,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self, ConstructionError> {
        Ok(Self {
            center: finite_point(center, "circle center")?,
            radius: positive(radius, |value| ConstructionError::NonPositiveRadius { value })?,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius.raw()
    }
}

impl Geometry for Circle {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Circle
    }

    fn extent(&self) -> Option<Extent> {
        let r = Offset::new(self.radius.raw(), self.radius.raw());
        Some(Extent::from_corners(self.center - r, self.center + r))
    }

    fn translate(&mut self, delta: Offset) {
        self.center += delta;
    }

    fn rotate_about(&mut self, pivot: Point, radians: f64) {
        self.center = self.center.rotated_about(pivot, radians);
    }

    fn is_finite(&self) -> bool {
        self.center.is_finite()
    }
}

/// A spline given by its control points (at least 2)
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    control_points: Vec<Point>,
}

impl Spline {
    pub fn new(control_points: Vec<Point>) -> Result<Self, ConstructionError> {
        Ok(Self {
            control_points: finite_points(PrimitiveKind::Spline, control_points, "spline control point")?,
        })
    }

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }
}

impl Geometry for Spline {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Spline
    }

    // Control hull, not the evaluated curve: never smaller than the curve's box
    fn extent(&self) -> Option<Extent> {
        Extent::from_points(self.control_points.iter().copied())
    }

    fn translate(&mut self, delta: Offset) {
        for pt in self.control_points.iter_mut() {
            *pt += delta;
        }
    }

    fn rotate_about(&mut self, pivot: Point, radians: f64) {
        for pt in self.control_points.iter_mut() {
            *pt = pt.rotated_about(pivot, radians);
        }
    }

    fn is_finite(&self) -> bool {
        self.control_points.iter().all(|p| p.is_finite())
    }
}

/// An open or closed chain of straight segments (at least 2 vertices)
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    vertices: Vec<Point>,
    closed: bool,
}

impl Polyline {
    pub fn new(vertices: Vec<Point>, closed: bool) -> Result<Self, ConstructionError> {
        Ok(Self {
            vertices: finite_points(PrimitiveKind::Polyline, vertices, "polyline vertex")?,
            closed,
        })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Geometry for Polyline {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Polyline
    }

    fn extent(&self) -> Option<Extent> {
        Extent::from_points(self.vertices.iter().copied())
    }

    fn translate(&mut self, delta: Offset) {
        for pt in self.vertices.iter_mut() {
            *pt += delta;
        }
    }

    fn rotate_about(&mut self, pivot: Point, radians: f64) {
        for pt in self.vertices.iter_mut() {
            *pt = pt.rotated_about(pivot, radians);
        }
    }

    fn is_finite(&self) -> bool {
        self.vertices.iter().all(|p| p.is_finite())
    }
}

/// A text annotation anchored at a single point
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    anchor: Point,
    content: String,
    height: Length,
    rotation: Angle,
}

impl Text {
    pub fn new(anchor: Point, content: impl Into<String>, height: f64) -> Result<Self, ConstructionError> {
        Ok(Self {
            anchor: finite_point(anchor, "text anchor")?,
            content: content.into(),
            height: positive(height, |value| ConstructionError::NonPositiveHeight { value })?,
            rotation: Angle::ZERO,
        })
    }

    pub fn with_rotation(mut self, rotation: Angle) -> Result<Self, ConstructionError> {
        self.rotation = finite_angle(rotation, "text rotation")?.normalized();
        Ok(self)
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn height(&self) -> f64 {
        self.height.raw()
    }

    /// Baseline direction, CCW from the +x axis
    pub fn rotation(&self) -> Angle {
        self.rotation
    }
}

impl Geometry for Text {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Text
    }

    // Zero-area box at the anchor; glyph metrics belong to the renderer
    fn extent(&self) -> Option<Extent> {
        Some(Extent::from_point(self.anchor))
    }

    fn translate(&mut self, delta: Offset) {
        self.anchor += delta;
    }

    fn rotate_about(&mut self, pivot: Point, radians: f64) {
        self.anchor = self.anchor.rotated_about(pivot, radians);
        self.rotation = (self.rotation + Angle::from_radians(radians)).normalized();
    }

    fn is_finite(&self) -> bool {
        self.anchor.is_finite() && self.rotation.is_finite()
    }
}

// ============================================================================
// Shape and Primitive
// ============================================================================

/// Closed sum over every primitive kind
#[enum_dispatch(Geometry)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Arc(Arc),
    Circle(Circle),
    Spline(Spline),
    Polyline(Polyline),
    Text(Text),
}

impl Shape {
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Line(l) => write!(f, "line {} -> {}", l.start, l.end),
            Shape::Arc(a) => write!(
                f,
                "arc c={} r={} {}..{}",
                a.center, a.radius, a.start_angle, a.end_angle
            ),
            Shape::Circle(c) => write!(f, "circle c={} r={}", c.center, c.radius),
            Shape::Spline(s) => write!(f, "spline [{} control points]", s.control_points.len()),
            Shape::Polyline(p) => write!(
                f,
                "polyline [{} vertices{}]",
                p.vertices.len(),
                if p.closed { ", closed" } else { "" }
            ),
            Shape::Text(t) => write!(f, "text {:?} at {} h={}", t.content, t.anchor, t.height),
        }
    }
}

/// A shape with its stable identity.
///
/// Equality is by identity only, never by geometry.
#[derive(Debug, Clone)]
pub struct Primitive {
    id: PrimitiveId,
    shape: Shape,
}

impl Primitive {
    pub fn new(id: PrimitiveId, shape: impl Into<Shape>) -> Self {
        Self {
            id,
            shape: shape.into(),
        }
    }

    pub fn id(&self) -> PrimitiveId {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    pub(crate) fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }

    pub fn extent(&self) -> Option<Extent> {
        self.shape.extent()
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Primitive {}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    // ==================== Construction ====================

    #[test]
    fn spline_needs_two_points() {
        let err = Spline::new(vec![pt(0.0, 0.0)]).unwrap_err();
        assert_eq!(
            err,
            ConstructionError::TooFewPoints {
                kind: PrimitiveKind::Spline,
                count: 1
            }
        );
    }

    #[test]
    fn polyline_needs_two_points() {
        let err = Polyline::new(Vec::new(), true).unwrap_err();
        assert!(matches!(err, ConstructionError::TooFewPoints { count: 0, .. }));
    }

    #[test]
    fn circle_rejects_non_positive_radius() {
        assert_eq!(
            Circle::new(pt(0.0, 0.0), 0.0).unwrap_err(),
            ConstructionError::NonPositiveRadius { value: 0.0 }
        );
        assert_eq!(
            Circle::new(pt(0.0, 0.0), -2.0).unwrap_err(),
            ConstructionError::NonPositiveRadius { value: -2.0 }
        );
    }

    #[test]
    fn text_rejects_non_positive_height() {
        assert_eq!(
            Text::new(pt(0.0, 0.0), "x", -1.0).unwrap_err(),
            ConstructionError::NonPositiveHeight { value: -1.0 }
        );
    }

    #[test]
    fn non_finite_coordinates_rejected() {
        assert!(matches!(
            Line::new(pt(f64::NAN, 0.0), pt(1.0, 1.0)),
            Err(ConstructionError::NonFinite { what: "line start", .. })
        ));
        assert!(matches!(
            Arc::new(pt(0.0, 0.0), f64::INFINITY, Angle(0.0), Angle(90.0)),
            Err(ConstructionError::NonFinite { .. })
        ));
        assert!(matches!(
            Arc::new(pt(0.0, 0.0), 1.0, Angle(f64::NAN), Angle(90.0)),
            Err(ConstructionError::NonFinite { what: "arc start angle", .. })
        ));
    }

    #[test]
    fn construction_error_messages() {
        let err = Spline::new(vec![]).unwrap_err();
        assert_eq!(err.to_string(), "spline needs at least 2 points, got 0");
    }

    // ==================== Extents per kind ====================

    #[test]
    fn line_extent_is_endpoint_box() {
        let line = Line::new(pt(10.0, -2.0), pt(0.0, 4.0)).unwrap();
        let ext = line.extent().unwrap();
        assert_eq!(ext.min(), pt(0.0, -2.0));
        assert_eq!(ext.max(), pt(10.0, 4.0));
    }

    #[test]
    fn circle_extent_is_center_plus_minus_radius() {
        let c = Circle::new(pt(1.0, 2.0), 3.0).unwrap();
        let ext = c.extent().unwrap();
        assert_eq!(ext.min(), pt(-2.0, -1.0));
        assert_eq!(ext.max(), pt(4.0, 5.0));
    }

    #[test]
    fn arc_extent_uses_endpoints_only() {
        // Quarter arc from 0° to 90°: endpoints (1,0) and (0,1)
        let arc = Arc::new(pt(0.0, 0.0), 1.0, Angle(0.0), Angle(90.0)).unwrap();
        let ext = arc.extent().unwrap();
        assert!(close(ext.min(), pt(0.0, 0.0)));
        assert!(close(ext.max(), pt(1.0, 1.0)));

        // Half arc from 0° to 180°: endpoints only give a flat box,
        // the apex at (0,1) is outside it.
        let half = Arc::new(pt(0.0, 0.0), 1.0, Angle(0.0), Angle(180.0)).unwrap();
        let ext = half.extent().unwrap();
        assert!(ext.height().abs() < EPS);
    }

    #[test]
    fn arc_swept_extent_includes_crossed_extrema() {
        let half = Arc::new(pt(0.0, 0.0), 1.0, Angle(0.0), Angle(180.0)).unwrap();
        let ext = half.swept_extent().unwrap();
        assert!(close(ext.min(), pt(-1.0, 0.0)));
        assert!(close(ext.max(), pt(1.0, 1.0)));
    }

    #[test]
    fn arc_swept_extent_wrapping_through_zero() {
        // 270° -> 90° sweeps CCW through 0°, covering the right half
        let arc = Arc::new(pt(0.0, 0.0), 2.0, Angle(270.0), Angle(90.0)).unwrap();
        assert_eq!(arc.sweep(), Angle(180.0));
        let ext = arc.swept_extent().unwrap();
        assert!(close(ext.min(), pt(0.0, -2.0)));
        assert!(close(ext.max(), pt(2.0, 2.0)));
    }

    #[test]
    fn arc_sweep_full_turn() {
        let arc = Arc::new(pt(0.0, 0.0), 1.0, Angle(0.0), Angle(360.0)).unwrap();
        assert_eq!(arc.sweep(), Angle(360.0));
    }

    #[test]
    fn spline_extent_covers_control_hull() {
        let s = Spline::new(vec![pt(0.0, 0.0), pt(5.0, 10.0), pt(10.0, -3.0)]).unwrap();
        let ext = s.extent().unwrap();
        assert_eq!(ext.min(), pt(0.0, -3.0));
        assert_eq!(ext.max(), pt(10.0, 10.0));
    }

    #[test]
    fn text_extent_collapses_to_anchor() {
        let t = Text::new(pt(4.0, 5.0), "hello", 10.0).unwrap();
        let ext = t.extent().unwrap();
        assert_eq!(ext.min(), pt(4.0, 5.0));
        assert_eq!(ext.max(), pt(4.0, 5.0));
        assert_eq!(ext.center(), pt(4.0, 5.0));
    }

    // ==================== Transforms per kind ====================

    #[test]
    fn translate_moves_every_coordinate() {
        let mut poly: Shape = Polyline::new(vec![pt(0.0, 0.0), pt(1.0, 1.0)], false)
            .unwrap()
            .into();
        poly.translate(Offset::new(2.0, -1.0));
        let Shape::Polyline(p) = &poly else { panic!("kind changed") };
        assert_eq!(p.vertices(), &[pt(2.0, -1.0), pt(3.0, 0.0)]);
    }

    #[test]
    fn translate_leaves_arc_angles_alone() {
        let mut arc = Arc::new(pt(0.0, 0.0), 1.0, Angle(30.0), Angle(60.0)).unwrap();
        arc.translate(Offset::new(5.0, 5.0));
        assert_eq!(arc.center(), pt(5.0, 5.0));
        assert_eq!(arc.start_angle(), Angle(30.0));
        assert_eq!(arc.end_angle(), Angle(60.0));
    }

    #[test]
    fn rotate_arc_advances_angles_and_keeps_sweep() {
        let mut arc = Arc::new(pt(2.0, 0.0), 1.0, Angle(300.0), Angle(30.0)).unwrap();
        let before = arc.sweep();
        arc.rotate_about(pt(0.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!(close(arc.center(), pt(0.0, 2.0)));
        assert!((arc.start_angle().0 - 30.0).abs() < EPS);
        assert!((arc.end_angle().0 - 120.0).abs() < EPS);
        assert!((arc.sweep().0 - before.0).abs() < EPS);
        assert_eq!(arc.radius(), 1.0);
    }

    #[test]
    fn rotate_arc_wraps_both_angles() {
        let mut arc = Arc::new(pt(0.0, 0.0), 1.0, Angle(200.0), Angle(350.0)).unwrap();
        arc.rotate_about(pt(0.0, 0.0), 180f64.to_radians());
        for a in [arc.start_angle(), arc.end_angle()] {
            assert!((0.0..360.0).contains(&a.0), "{a} out of range");
        }
        assert!((arc.start_angle().0 - 20.0).abs() < EPS);
        assert!((arc.end_angle().0 - 170.0).abs() < EPS);
        assert!((arc.sweep().0 - 150.0).abs() < EPS);
    }

    #[test]
    fn rotate_full_turn_arc_stays_full() {
        let mut arc = Arc::new(pt(0.0, 0.0), 1.0, Angle(0.0), Angle(360.0)).unwrap();
        arc.rotate_about(pt(0.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!((arc.start_angle().0 - 90.0).abs() < EPS);
        assert!((arc.end_angle().0 - 450.0).abs() < EPS);
        assert!((arc.sweep().0 - 360.0).abs() < EPS);
    }

    #[test]
    fn rotate_circle_keeps_radius() {
        let mut c = Circle::new(pt(1.0, 0.0), 4.0).unwrap();
        c.rotate_about(pt(0.0, 0.0), std::f64::consts::PI);
        assert!(close(c.center(), pt(-1.0, 0.0)));
        assert_eq!(c.radius(), 4.0);
    }

    #[test]
    fn rotate_text_turns_baseline() {
        let mut t = Text::new(pt(1.0, 0.0), "A", 2.0).unwrap();
        t.rotate_about(pt(0.0, 0.0), -std::f64::consts::FRAC_PI_2);
        assert!(close(t.anchor(), pt(0.0, -1.0)));
        assert!((t.rotation().0 - 270.0).abs() < EPS);
    }

    // ==================== Identity ====================

    #[test]
    fn equality_is_by_identity_not_geometry() {
        let mut ids = IdAllocator::new();
        let line = Line::new(pt(0.0, 0.0), pt(1.0, 0.0)).unwrap();
        let a = Primitive::new(ids.allocate(), line.clone());
        let b = Primitive::new(ids.allocate(), line);
        assert_ne!(a, b);
        assert_eq!(a.shape(), b.shape());
        assert_eq!(a, a.clone());
    }

    #[test]
    fn allocator_never_repeats() {
        let mut ids = IdAllocator::new();
        let a = ids.allocate();
        let b = ids.allocate();
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn display_forms() {
        let mut ids = IdAllocator::new();
        let c = Primitive::new(ids.allocate(), Circle::new(pt(0.0, 0.0), 5.0).unwrap());
        insta::assert_snapshot!(c.to_string(), @"#0 circle c=(0, 0) r=5");
        let l = Primitive::new(ids.allocate(), Line::new(pt(0.0, 0.0), pt(10.0, 0.0)).unwrap());
        insta::assert_snapshot!(l.to_string(), @"#1 line (0, 0) -> (10, 0)");
    }
}
