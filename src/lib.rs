//! Geometric kernel for a 2D technical drawing editor.
//!
//! A [`Scene`] holds the primitives of one drawing in display order together
//! with the current selection. Rectangle selection, translation and rotation
//! of the selection, and deletion all go through the scene. File formats and
//! drawing surfaces stay outside the kernel behind [`DocumentStore`] and
//! [`Renderer`].
//!
//! ```
//! use planview::{Circle, Line, Offset, Point, Scene, normalize_rect};
//!
//! let mut scene = Scene::new();
//! let line = scene.add_primitive(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap());
//! scene.add_primitive(Circle::new(Point::new(50.0, 50.0), 5.0).unwrap());
//!
//! scene.select_in_rect(&normalize_rect(Point::new(-1.0, -1.0), Point::new(11.0, 1.0)));
//! assert!(scene.is_selected(line));
//!
//! scene.translate_selection(Offset::new(0.0, 5.0)).unwrap();
//! assert_eq!(scene.selection_extent().unwrap().min(), Point::new(0.0, 5.0));
//! ```

pub mod config;
pub mod defaults;
pub mod document;
pub mod errors;
pub mod extent;
pub mod log;
pub mod primitive;
pub mod render;
pub mod scene;
pub mod select;
pub mod session;
pub mod transform;
pub mod types;
pub mod viewport;

pub use config::{Command, EditorConfig, Key, Keymap};
pub use document::{DocumentError, DocumentStore};
pub use errors::{ConfigError, ConstructionError, TransformError, ViewportError};
pub use extent::{Extent, center_of, extent_of, extent_of_all, union_extent};
pub use primitive::{
    Arc, Circle, Geometry, Line, Polyline, Primitive, PrimitiveId, PrimitiveKind, Shape, Spline,
    Text,
};
pub use render::Renderer;
pub use scene::Scene;
pub use select::{Button, RubberBand, normalize_rect, select};
pub use session::{InputEvent, Response, ScrollDirection, Session};
pub use transform::{Nudge, RotateStep};
pub use types::{Angle, Length, NumericError, Offset, Point, ViewPoint};
pub use viewport::Viewport;
