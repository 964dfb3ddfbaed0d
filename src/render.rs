//! Boundary to the drawing surface.

use std::collections::BTreeSet;

use crate::extent::Extent;
use crate::primitive::{Primitive, PrimitiveId};
use crate::viewport::Viewport;

/// Draws a scene. Implementations must not mutate kernel state and should
/// give selected primitives a visibly distinct style (e.g. highlighted stroke).
pub trait Renderer {
    fn draw(&mut self, primitives: &[Primitive], selected: &BTreeSet<PrimitiveId>, viewport: &Viewport);

    /// Overlay for an in-progress rubber-band drag (world space)
    fn draw_rubber_band(&mut self, _rect: &Extent, _viewport: &Viewport) {}
}
