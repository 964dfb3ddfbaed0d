//! Strongly-typed numeric primitives for world and view coordinates.
//!
//! - World points and view points are distinct types; only `Viewport` converts
//! - Radii and text heights are `Length`s, which are finite and strictly positive
//! - Angles stored on primitives are degrees; rotations are applied in radians

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// A strictly positive, finite length in world units (radius, text height)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Length(f64);

impl Length {
    /// Create a Length with validation (rejects NaN, infinite, zero, negative)
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        let val = check_finite(val)?;
        if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Length(val))
        }
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Angle in degrees, counter-clockwise positive
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const QUARTER_TURN: Angle = Angle(90.0);

    #[inline]
    pub fn degrees(val: f64) -> Angle {
        Angle(val)
    }

    #[inline]
    pub fn from_radians(rad: f64) -> Angle {
        Angle(rad.to_degrees())
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Wrap into `[0, 360)`
    #[inline]
    pub fn normalized(self) -> Angle {
        let wrapped = self.0.rem_euclid(360.0);
        // rem_euclid rounds tiny negatives up to exactly 360
        Angle(if wrapped >= 360.0 { 0.0 } else { wrapped })
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// A point in world space (the drawing's native coordinates)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Create a point with validation (rejects NaN/infinite coordinates)
    pub fn try_new(x: f64, y: f64) -> Result<Self, NumericError> {
        Ok(Point {
            x: check_finite(x)?,
            y: check_finite(y)?,
        })
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Calculate the midpoint between two points
    pub fn midpoint(self, other: Self) -> Self {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Rotate this point about `pivot` by `radians`, counter-clockwise positive
    pub fn rotated_about(self, pivot: Point, radians: f64) -> Point {
        let rel = DVec2::from(self) - DVec2::from(pivot);
        let turned = DVec2::from_angle(radians).rotate(rel);
        Point::from(DVec2::from(pivot) + turned)
    }

    /// Squared distance, for tolerance checks that don't need the root
    pub fn distance_squared(self, other: Point) -> f64 {
        DVec2::from(self).distance_squared(DVec2::from(other))
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> DVec2 {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Point {
        Point { x: v.x, y: v.y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A displacement vector (not an absolute position).
/// Point + Offset = Point; Point - Point = Offset
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Offset { dx, dy }
    }

    pub fn is_finite(self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

impl Mul<f64> for Offset {
    type Output = Offset;
    fn mul(self, rhs: f64) -> Offset {
        Offset {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
        }
    }
}

impl Neg for Offset {
    type Output = Offset;
    fn neg(self) -> Offset {
        Offset {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl Add<Offset> for Point {
    type Output = Point;
    fn add(self, rhs: Offset) -> Point {
        Point {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl Sub<Offset> for Point {
    type Output = Point;
    fn sub(self, rhs: Offset) -> Point {
        Point {
            x: self.x - rhs.dx,
            y: self.y - rhs.dy,
        }
    }
}

impl AddAssign<Offset> for Point {
    fn add_assign(&mut self, rhs: Offset) {
        self.x += rhs.dx;
        self.y += rhs.dy;
    }
}

impl SubAssign<Offset> for Point {
    fn sub_assign(&mut self, rhs: Offset) {
        self.x -= rhs.dx;
        self.y -= rhs.dy;
    }
}

impl Sub<Point> for Point {
    type Output = Offset;
    fn sub(self, rhs: Point) -> Offset {
        Offset {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

/// A point in view space (screen pixels after pan/zoom).
/// Only `Viewport` converts between this and `Point`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewPoint {
    pub fn new(x: f64, y: f64) -> Self {
        ViewPoint { x, y }
    }
}

impl fmt::Display for ViewPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view({}, {})", self.x, self.y)
    }
}
