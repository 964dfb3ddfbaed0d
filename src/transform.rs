//! Rigid transforms over a batch of primitives
//!
//! Both operations keep identity, kind and order. A batch is staged on
//! copies first and written back only if every result is finite, so a
//! failure leaves all targets untouched.

use crate::errors::TransformError;
use crate::extent::{center_of, extent_of_all};
use crate::log::{debug, warn};
use crate::primitive::{Geometry, Primitive, Shape};
use crate::types::{Offset, Point};

/// Discrete rotation commands. Positive is counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateStep {
    QuarterCcw,
    QuarterCw,
    FineCcw,
    FineCw,
}

/// Discrete nudge directions in world space (y up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nudge {
    Up,
    Down,
    Left,
    Right,
}

impl Nudge {
    pub fn offset(self, step: f64) -> Offset {
        match self {
            Nudge::Up => Offset::new(0.0, step),
            Nudge::Down => Offset::new(0.0, -step),
            Nudge::Left => Offset::new(-step, 0.0),
            Nudge::Right => Offset::new(step, 0.0),
        }
    }
}

fn apply_atomically<'a>(
    targets: impl IntoIterator<Item = &'a mut Primitive>,
    op: impl Fn(&mut Shape),
) -> Result<usize, TransformError> {
    let mut targets: Vec<&'a mut Primitive> = targets.into_iter().collect();

    let mut staged = Vec::with_capacity(targets.len());
    for primitive in &targets {
        let mut shape = primitive.shape().clone();
        op(&mut shape);
        if !shape.is_finite() {
            warn!(id = %primitive.id(), "transform rejected, result not finite");
            return Err(TransformError::NonFiniteResult { id: primitive.id() });
        }
        staged.push(shape);
    }

    for (primitive, shape) in targets.iter_mut().zip(staged) {
        primitive.set_shape(shape);
    }
    Ok(targets.len())
}

/// Add `delta` to every coordinate of every target. Returns how many were moved.
pub fn translate<'a>(
    targets: impl IntoIterator<Item = &'a mut Primitive>,
    delta: Offset,
) -> Result<usize, TransformError> {
    if !delta.is_finite() {
        return Err(TransformError::NonFiniteOffset {
            dx: delta.dx,
            dy: delta.dy,
        });
    }
    let count = apply_atomically(targets, |shape| shape.translate(delta))?;
    debug!(count, dx = delta.dx, dy = delta.dy, "translated");
    Ok(count)
}

/// Rotate every target about `pivot` by `radians` (CCW positive).
pub fn rotate<'a>(
    targets: impl IntoIterator<Item = &'a mut Primitive>,
    pivot: Point,
    radians: f64,
) -> Result<usize, TransformError> {
    if !radians.is_finite() {
        return Err(TransformError::NonFiniteAngle { radians });
    }
    if !pivot.is_finite() {
        return Err(TransformError::NonFinitePivot {
            x: pivot.x,
            y: pivot.y,
        });
    }
    let count = apply_atomically(targets, |shape| shape.rotate_about(pivot, radians))?;
    debug!(count, %pivot, radians, "rotated");
    Ok(count)
}

/// Rotate the targets about the center of their combined extent.
///
/// The pivot is taken once from the pre-transform geometry. Returns the pivot
/// used, or `None` when there was nothing to rotate.
pub fn rotate_about_center<'a>(
    targets: impl IntoIterator<Item = &'a mut Primitive>,
    radians: f64,
) -> Result<Option<Point>, TransformError> {
    let targets: Vec<&'a mut Primitive> = targets.into_iter().collect();
    let Some(pivot) = center_of(extent_of_all(targets.iter().map(|p| &**p))) else {
        return Ok(None);
    };
    rotate(targets, pivot, radians)?;
    Ok(Some(pivot))
}
