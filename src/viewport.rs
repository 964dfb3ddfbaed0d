//! Camera mapping between world space and view space
//!
//! `view = (world - origin) * scale`. The rendering layer owns the viewport;
//! the kernel only reads it to turn a view-space drag into a world rectangle.

use crate::errors::ViewportError;
use crate::extent::Extent;
use crate::select::normalize_rect;
use crate::types::{Offset, Point, ViewPoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    origin: Point,
    scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            origin: Point::ORIGIN,
            scale: 1.0,
        }
    }
}

fn check_scale(scale: f64) -> Result<f64, ViewportError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(ViewportError::InvalidScale { value: scale })
    }
}

impl Viewport {
    pub fn new(origin: Point, scale: f64) -> Result<Self, ViewportError> {
        if !origin.is_finite() {
            return Err(ViewportError::InvalidOrigin {
                x: origin.x,
                y: origin.y,
            });
        }
        Ok(Viewport {
            origin,
            scale: check_scale(scale)?,
        })
    }

    /// World point shown at view (0, 0)
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// View units per world unit
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn world_to_view(&self, p: Point) -> ViewPoint {
        let d = p - self.origin;
        ViewPoint::new(d.dx * self.scale, d.dy * self.scale)
    }

    pub fn view_to_world(&self, v: ViewPoint) -> Point {
        self.origin + Offset::new(v.x / self.scale, v.y / self.scale)
    }

    /// World-space selection rectangle for a drag between two view points
    pub fn view_rect_to_world(&self, a: ViewPoint, b: ViewPoint) -> Extent {
        normalize_rect(self.view_to_world(a), self.view_to_world(b))
    }

    /// Multiply the scale by `factor`, keeping `anchor` at the same view position
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> Result<(), ViewportError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(ViewportError::InvalidZoom { factor });
        }
        let scale = check_scale(self.scale * factor)?;
        // anchor - origin' = (anchor - origin) / factor
        self.origin = anchor - (anchor - self.origin) * (1.0 / factor);
        self.scale = scale;
        Ok(())
    }

    /// Shift the visible region by a world-space offset
    pub fn pan(&mut self, delta: Offset) -> Result<(), ViewportError> {
        if !delta.is_finite() {
            return Err(ViewportError::InvalidPan {
                dx: delta.dx,
                dy: delta.dy,
            });
        }
        self.origin += delta;
        Ok(())
    }
}
