//! Boundary to the drawing file format.
//!
//! The kernel is format-agnostic: a `DocumentStore` turns a file into shapes
//! and primitives back into a file. Identities are assigned by the `Scene`
//! on load and are not persisted.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use crate::primitive::{Primitive, Shape};

/// Errors reported by a document store. The kernel propagates them unchanged.
#[derive(Error, Diagnostic, Debug)]
pub enum DocumentError {
    #[error("failed to parse {}: {message}", .path.display())]
    #[diagnostic(code(planview::document::parse))]
    Parse { path: PathBuf, message: String },

    #[error("i/o error on {}", .path.display())]
    #[diagnostic(code(planview::document::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads and saves drawings in some concrete format
pub trait DocumentStore {
    /// Read every shape in the drawing, in display order. An empty drawing is valid.
    fn load(&mut self, path: &Path) -> Result<Vec<Shape>, DocumentError>;

    /// Write primitives in display order
    fn save(&mut self, primitives: &[Primitive], path: &Path) -> Result<(), DocumentError>;
}
