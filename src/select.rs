//! Rectangle selection
//!
//! Selection is coarse: a primitive is picked when its bounding box overlaps
//! the rectangle, even if the actual curve never enters it. A diagonal line
//! whose box clips a corner of the rectangle is selected.

use std::collections::BTreeSet;

use crate::extent::{Extent, extent_of};
use crate::log::{debug, trace};
use crate::primitive::{Primitive, PrimitiveId};
use crate::types::Point;

/// Normalize two drag corners into a selection rectangle, whatever the drag direction
pub fn normalize_rect(a: Point, b: Point) -> Extent {
    Extent::from_corners(a, b)
}

/// Identities of every primitive whose extent overlaps `rect`.
///
/// Primitives without an extent are skipped. The result is a set: input
/// order never changes membership. A rectangle with a non-finite corner
/// selects nothing.
pub fn select<'a>(
    primitives: impl IntoIterator<Item = &'a Primitive>,
    rect: &Extent,
) -> BTreeSet<PrimitiveId> {
    let mut selected = BTreeSet::new();
    if !rect.is_finite() {
        trace!(rect = %rect, "non-finite rectangle, nothing selected");
        return selected;
    }
    for primitive in primitives {
        let Some(extent) = extent_of(primitive) else {
            trace!(id = %primitive.id(), "no extent, not selectable");
            continue;
        };
        if rect.overlaps(&extent) {
            selected.insert(primitive.id());
        }
    }
    debug!(rect = %rect, count = selected.len(), "rectangle selection");
    selected
}

/// Pointer button reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
    Middle,
}

/// In-progress rubber-band drag.
///
/// A rectangle is only committed on release of the button that started it;
/// a drag that never completes leaves the selection untouched. Non-finite
/// pointer positions (pointer outside the drawing) are never recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RubberBand {
    #[default]
    Idle,
    Dragging { start: Point, current: Point },
}

impl RubberBand {
    /// Start a drag. A non-finite point leaves the band as it was.
    pub fn begin(&mut self, at: Point) {
        if at.is_finite() {
            *self = RubberBand::Dragging { start: at, current: at };
        }
    }

    /// Track the pointer; ignored when no drag is active or `at` is not finite
    pub fn update(&mut self, at: Point) {
        if !at.is_finite() {
            return;
        }
        if let RubberBand::Dragging { current, .. } = self {
            *current = at;
        }
    }

    /// End the drag at `at`, returning the normalized rectangle to commit.
    ///
    /// Releasing at a non-finite point abandons the drag.
    pub fn finish(&mut self, at: Point) -> Option<Extent> {
        match std::mem::take(self) {
            RubberBand::Dragging { start, .. } if at.is_finite() => Some(normalize_rect(start, at)),
            RubberBand::Dragging { .. } | RubberBand::Idle => None,
        }
    }

    /// Abandon the drag without producing a rectangle
    pub fn cancel(&mut self) {
        *self = RubberBand::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RubberBand::Dragging { .. })
    }

    /// The live rectangle for preview drawing
    pub fn preview(&self) -> Option<Extent> {
        match self {
            RubberBand::Dragging { start, current } => Some(normalize_rect(*start, *current)),
            RubberBand::Idle => None,
        }
    }
}
