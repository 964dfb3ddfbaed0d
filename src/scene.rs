//! Scene: the ordered primitives of one drawing plus the current selection
//!
//! Every public method leaves the scene consistent on return: the selection
//! only ever names primitives that are present, and deletion removes from
//! both in one step.

use std::cell::Cell;
use std::collections::BTreeSet;
use std::path::Path;

use crate::document::{DocumentError, DocumentStore};
use crate::errors::{ConstructionError, TransformError};
use crate::extent::{Extent, center_of, extent_of_all};
use crate::log::debug;
use crate::primitive::{IdAllocator, Primitive, PrimitiveId, Shape, Text};
use crate::render::Renderer;
use crate::select::select;
use crate::transform;
use crate::types::{Offset, Point};
use crate::viewport::Viewport;

#[derive(Debug, Default)]
pub struct Scene {
    /// Display order: later primitives draw on top
    primitives: Vec<Primitive>,
    selection: BTreeSet<PrimitiveId>,
    ids: IdAllocator,
    /// Center of the selection extent, recomputed after any change
    pivot: Cell<Option<Point>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from shapes in display order, assigning fresh identities
    pub fn from_shapes(shapes: impl IntoIterator<Item = Shape>) -> Self {
        let mut scene = Scene::new();
        for shape in shapes {
            scene.add_primitive(shape);
        }
        scene
    }

    /// Replace the contents with a drawing from `store`.
    ///
    /// On error the scene is left as it was.
    pub fn load(&mut self, store: &mut dyn DocumentStore, path: &Path) -> Result<usize, DocumentError> {
        let shapes = store.load(path)?;
        self.primitives.clear();
        self.selection.clear();
        self.invalidate_pivot();
        for shape in shapes {
            self.add_primitive(shape);
        }
        debug!(count = self.primitives.len(), path = %path.display(), "loaded drawing");
        Ok(self.primitives.len())
    }

    pub fn save(&self, store: &mut dyn DocumentStore, path: &Path) -> Result<(), DocumentError> {
        store.save(&self.primitives, path)
    }

    // ------------------------------------------------------------------
    // Contents
    // ------------------------------------------------------------------

    /// Append a primitive on top of the display order
    pub fn add_primitive(&mut self, shape: impl Into<Shape>) -> PrimitiveId {
        let id = self.ids.allocate();
        self.primitives.push(Primitive::new(id, shape));
        id
    }

    /// Place a text annotation
    pub fn add_text(
        &mut self,
        anchor: Point,
        content: impl Into<String>,
        height: f64,
    ) -> Result<PrimitiveId, ConstructionError> {
        let text = Text::new(anchor, content, height)?;
        let id = self.add_primitive(text);
        debug!(%id, %anchor, "added text");
        Ok(id)
    }

    /// Replace the content of a text primitive. Unknown or non-text ids are ignored.
    pub fn edit_text(&mut self, id: PrimitiveId, content: impl Into<String>) -> bool {
        let Some(text) = self
            .primitives
            .iter_mut()
            .find(|p| p.id() == id)
            .and_then(|p| p.shape_mut().as_text_mut())
        else {
            return false;
        };
        text.set_content(content);
        true
    }

    /// Topmost text whose anchor lies within `tolerance` of `at`
    pub fn text_at(&self, at: Point, tolerance: f64) -> Option<PrimitiveId> {
        let limit = tolerance * tolerance;
        self.primitives
            .iter()
            .rev()
            .find(|p| {
                p.shape()
                    .as_text()
                    .is_some_and(|t| t.anchor().distance_squared(at) <= limit)
            })
            .map(Primitive::id)
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: PrimitiveId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Extent of the whole drawing
    pub fn extent(&self) -> Option<Extent> {
        extent_of_all(&self.primitives)
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn selection(&self) -> &BTreeSet<PrimitiveId> {
        &self.selection
    }

    pub fn is_selected(&self, id: PrimitiveId) -> bool {
        self.selection.contains(&id)
    }

    /// Selected primitives in display order
    pub fn selected(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(|p| self.selection.contains(&p.id()))
    }

    fn selected_mut(&mut self) -> impl Iterator<Item = &mut Primitive> {
        let selection = &self.selection;
        self.primitives
            .iter_mut()
            .filter(move |p| selection.contains(&p.id()))
    }

    /// Replace the selection. Ids not in the scene are dropped silently.
    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = PrimitiveId>) {
        let present: BTreeSet<PrimitiveId> = self.primitives.iter().map(Primitive::id).collect();
        self.selection = ids.into_iter().filter(|id| present.contains(id)).collect();
        self.invalidate_pivot();
    }

    /// Replace the selection with everything whose extent overlaps `rect`.
    ///
    /// A rectangle with a non-finite corner is dropped and the selection kept.
    pub fn select_in_rect(&mut self, rect: &Extent) -> &BTreeSet<PrimitiveId> {
        if !rect.is_finite() {
            debug!(rect = %rect, "ignored non-finite selection rectangle");
            return &self.selection;
        }
        self.selection = select(&self.primitives, rect);
        self.invalidate_pivot();
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.invalidate_pivot();
    }

    /// Remove every selected primitive and clear the selection.
    /// Remaining primitives keep their identities and order.
    pub fn remove_selected(&mut self) -> Vec<Primitive> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        let (removed, kept): (Vec<Primitive>, Vec<Primitive>) = std::mem::take(&mut self.primitives)
            .into_iter()
            .partition(|p| self.selection.contains(&p.id()));
        self.primitives = kept;
        self.selection.clear();
        self.invalidate_pivot();
        debug!(count = removed.len(), "deleted selection");
        removed
    }

    // ------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------

    fn invalidate_pivot(&self) {
        self.pivot.set(None);
    }

    pub fn selection_extent(&self) -> Option<Extent> {
        extent_of_all(self.selected())
    }

    /// Center of the selection's extent; `None` for an empty selection
    pub fn pivot(&self) -> Option<Point> {
        if let Some(p) = self.pivot.get() {
            return Some(p);
        }
        let p = center_of(self.selection_extent())?;
        self.pivot.set(Some(p));
        Some(p)
    }

    /// Move the selection. An empty selection is a no-op.
    pub fn translate_selection(&mut self, delta: Offset) -> Result<usize, TransformError> {
        let count = transform::translate(self.selected_mut(), delta)?;
        self.invalidate_pivot();
        Ok(count)
    }

    /// Rotate the selection about its own extent center.
    ///
    /// The pivot is derived fresh for each call and held fixed for it.
    /// Returns the pivot used, `None` for an empty selection.
    pub fn rotate_selection(&mut self, radians: f64) -> Result<Option<Point>, TransformError> {
        let Some(pivot) = self.pivot() else {
            return Ok(None);
        };
        transform::rotate(self.selected_mut(), pivot, radians)?;
        self.invalidate_pivot();
        Ok(Some(pivot))
    }

    /// Rotate the selection about an explicit pivot
    pub fn rotate_selection_about(&mut self, pivot: Point, radians: f64) -> Result<usize, TransformError> {
        let count = transform::rotate(self.selected_mut(), pivot, radians)?;
        self.invalidate_pivot();
        Ok(count)
    }

    pub fn render(&self, renderer: &mut dyn Renderer, viewport: &Viewport) {
        renderer.draw(&self.primitives, &self.selection, viewport);
    }
}
