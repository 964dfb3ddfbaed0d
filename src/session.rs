//! Interactive editing session
//!
//! Turns the host's normalized input events (already in world space) into
//! scene operations. The session tracks the selection and text modes and
//! the in-progress rubber band. It never touches the viewport; zoom requests
//! are handed back to the host.

use crate::config::{Command, EditorConfig, Key};
use crate::errors::{ConfigError, ConstructionError, TransformError};
use crate::extent::Extent;
use crate::log::debug;
use crate::primitive::PrimitiveId;
use crate::render::Renderer;
use crate::scene::Scene;
use crate::select::{Button, RubberBand};
use crate::types::Point;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Input forwarded by the viewport controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { at: Point, button: Button },
    PointerMove { at: Point },
    PointerUp { at: Point, button: Button },
    Scroll { direction: ScrollDirection, anchor: Point },
    Key(Key),
    Command(Command),
}

/// What the host should do after an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// Nothing changed
    Ignored,
    /// Only transient overlay state changed (rubber band, cleared selection)
    Redraw,
    /// The selection was replaced
    SelectionChanged { count: usize },
    /// Selected primitives were moved or rotated
    Transformed { count: usize },
    /// Selected primitives were removed
    Deleted { count: usize },
    /// Ask the user for text to place at this point, then call `place_text`
    TextRequested { at: Point },
    /// Apply `Viewport::zoom_at(anchor, factor)`
    Zoom { anchor: Point, factor: f64 },
}

#[derive(Debug)]
pub struct Session {
    scene: Scene,
    config: EditorConfig,
    selecting: bool,
    text_mode: bool,
    band: RubberBand,
}

impl Session {
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        Self::with_scene(Scene::new(), config)
    }

    pub fn with_scene(scene: Scene, config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            scene,
            config,
            selecting: false,
            text_mode: false,
            band: RubberBand::default(),
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn is_text_mode(&self) -> bool {
        self.text_mode
    }

    /// Flip selection mode. Leaving it clears the selection and drops any drag.
    pub fn toggle_selection_mode(&mut self) -> bool {
        self.selecting = !self.selecting;
        if !self.selecting {
            self.band.cancel();
            self.scene.clear_selection();
        }
        self.selecting
    }

    pub fn toggle_text_mode(&mut self) -> bool {
        self.text_mode = !self.text_mode;
        self.text_mode
    }

    /// Live rectangle of an unfinished drag
    pub fn rubber_band(&self) -> Option<Extent> {
        self.band.preview()
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<Response, TransformError> {
        let response = match event {
            InputEvent::PointerDown { at, button } => self.pointer_down(at, button),
            InputEvent::PointerMove { at } => {
                if self.band.is_active() && at.is_finite() {
                    self.band.update(at);
                    Response::Redraw
                } else {
                    Response::Ignored
                }
            }
            InputEvent::PointerUp { at, button } => self.pointer_up(at, button),
            InputEvent::Scroll { direction, anchor } => {
                let factor = match direction {
                    ScrollDirection::Up => self.config.zoom_factor,
                    ScrollDirection::Down => 1.0 / self.config.zoom_factor,
                };
                Response::Zoom { anchor, factor }
            }
            InputEvent::Key(key) => match self.config.keymap.lookup(key) {
                Some(command) => self.execute(command)?,
                None => Response::Ignored,
            },
            InputEvent::Command(command) => self.execute(command)?,
        };
        Ok(response)
    }

    fn pointer_down(&mut self, at: Point, button: Button) -> Response {
        if button != Button::Primary || !at.is_finite() {
            return Response::Ignored;
        }
        if self.text_mode {
            return Response::TextRequested { at };
        }
        if self.selecting {
            self.band.begin(at);
            return Response::Redraw;
        }
        Response::Ignored
    }

    fn pointer_up(&mut self, at: Point, button: Button) -> Response {
        if !self.band.is_active() {
            return Response::Ignored;
        }
        if button != Button::Primary {
            self.band.cancel();
            return Response::Redraw;
        }
        match self.band.finish(at) {
            Some(rect) => {
                let count = self.scene.select_in_rect(&rect).len();
                Response::SelectionChanged { count }
            }
            // Released outside the drawing: the drag is abandoned
            None => Response::Redraw,
        }
    }

    /// Run an editing command against the current selection
    pub fn execute(&mut self, command: Command) -> Result<Response, TransformError> {
        debug!(?command, selected = self.scene.selection().len(), "command");
        let response = match command {
            Command::Rotate(step) => {
                let radians = self.config.rotation_radians(step);
                match self.scene.rotate_selection(radians)? {
                    Some(_) => Response::Transformed {
                        count: self.scene.selection().len(),
                    },
                    None => Response::Ignored,
                }
            }
            Command::Nudge(direction) => {
                match self.scene.translate_selection(direction.offset(self.config.nudge_step))? {
                    0 => Response::Ignored,
                    count => Response::Transformed { count },
                }
            }
            Command::Delete => match self.scene.remove_selected().len() {
                0 => Response::Ignored,
                count => Response::Deleted { count },
            },
            Command::CancelSelection => {
                self.band.cancel();
                self.scene.clear_selection();
                Response::Redraw
            }
        };
        Ok(response)
    }

    /// Place text requested by `Response::TextRequested`. Empty content places nothing.
    pub fn place_text(
        &mut self,
        at: Point,
        content: &str,
    ) -> Result<Option<PrimitiveId>, ConstructionError> {
        if content.is_empty() {
            return Ok(None);
        }
        let id = self.scene.add_text(at, content, self.config.text_height)?;
        Ok(Some(id))
    }

    /// Replace the content of the text under `at`, if any
    pub fn edit_text_at(&mut self, at: Point, content: &str) -> Option<PrimitiveId> {
        let id = self.scene.text_at(at, self.config.text_pick_tolerance)?;
        self.scene.edit_text(id, content).then_some(id)
    }

    pub fn render(&self, renderer: &mut dyn Renderer, viewport: &Viewport) {
        self.scene.render(renderer, viewport);
        if let Some(rect) = self.band.preview() {
            renderer.draw_rubber_band(&rect, viewport);
        }
    }
}
