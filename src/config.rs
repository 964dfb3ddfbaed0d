//! Editor configuration: step sizes, zoom factor and key bindings

use std::collections::HashMap;

use crate::defaults;
use crate::errors::ConfigError;
use crate::transform::{Nudge, RotateStep};
use crate::types::Angle;

/// Keys the host may report. Letters are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Delete,
    Backspace,
    Escape,
}

impl Key {
    fn normalized(self) -> Key {
        match self {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }
}

/// Editing commands a key can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Rotate(RotateStep),
    Nudge(Nudge),
    Delete,
    CancelSelection,
}

/// Key → command table
#[derive(Debug, Clone, PartialEq)]
pub struct Keymap {
    bindings: HashMap<Key, Command>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut map = Keymap::empty();
        // Default bindings mirror the classic drafting layout:
        // R/E quarter turns, W/Q single degrees, arrows or F/S/A/D to nudge
        macro_rules! bind {
            ($($key:expr => $cmd:expr),* $(,)?) => {
                $( map.bind($key, $cmd); )*
            };
        }
        bind! {
            Key::Char('r') => Command::Rotate(RotateStep::QuarterCcw),
            Key::Char('e') => Command::Rotate(RotateStep::QuarterCw),
            Key::Char('w') => Command::Rotate(RotateStep::FineCcw),
            Key::Char('q') => Command::Rotate(RotateStep::FineCw),
            Key::ArrowUp => Command::Nudge(Nudge::Up),
            Key::Char('f') => Command::Nudge(Nudge::Up),
            Key::ArrowDown => Command::Nudge(Nudge::Down),
            Key::Char('s') => Command::Nudge(Nudge::Down),
            Key::ArrowLeft => Command::Nudge(Nudge::Left),
            Key::Char('a') => Command::Nudge(Nudge::Left),
            Key::ArrowRight => Command::Nudge(Nudge::Right),
            Key::Char('d') => Command::Nudge(Nudge::Right),
            Key::Delete => Command::Delete,
            Key::Backspace => Command::Delete,
            Key::Escape => Command::CancelSelection,
        }
        map
    }
}

impl Keymap {
    pub fn empty() -> Self {
        Keymap {
            bindings: HashMap::new(),
        }
    }

    /// Bind a key, replacing any previous binding for it
    pub fn bind(&mut self, key: Key, command: Command) -> Option<Command> {
        self.bindings.insert(key.normalized(), command)
    }

    pub fn unbind(&mut self, key: Key) -> Option<Command> {
        self.bindings.remove(&key.normalized())
    }

    pub fn lookup(&self, key: Key) -> Option<Command> {
        self.bindings.get(&key.normalized()).copied()
    }
}

/// Tunable editor behavior
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub nudge_step: f64,
    pub fine_rotation: Angle,
    pub quarter_rotation: Angle,
    pub zoom_factor: f64,
    pub text_height: f64,
    pub text_pick_tolerance: f64,
    pub keymap: Keymap,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            nudge_step: defaults::NUDGE_STEP,
            fine_rotation: defaults::FINE_ROTATION,
            quarter_rotation: defaults::QUARTER_ROTATION,
            zoom_factor: defaults::ZOOM_FACTOR,
            text_height: defaults::TEXT_HEIGHT,
            text_pick_tolerance: defaults::TEXT_PICK_TOLERANCE,
            keymap: Keymap::default(),
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nudge_step(mut self, step: f64) -> Self {
        self.nudge_step = step;
        self
    }

    pub fn with_fine_rotation(mut self, angle: Angle) -> Self {
        self.fine_rotation = angle;
        self
    }

    pub fn with_quarter_rotation(mut self, angle: Angle) -> Self {
        self.quarter_rotation = angle;
        self
    }

    pub fn with_zoom_factor(mut self, factor: f64) -> Self {
        self.zoom_factor = factor;
        self
    }

    pub fn with_text_height(mut self, height: f64) -> Self {
        self.text_height = height;
        self
    }

    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Check every numeric setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.nudge_step.is_finite() && self.nudge_step > 0.0) {
            return Err(ConfigError::InvalidNudgeStep {
                value: self.nudge_step,
            });
        }
        for step in [self.fine_rotation, self.quarter_rotation] {
            if !step.is_finite() || step.0 == 0.0 {
                return Err(ConfigError::InvalidRotationStep { value: step.0 });
            }
        }
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 1.0) {
            return Err(ConfigError::InvalidZoomFactor {
                value: self.zoom_factor,
            });
        }
        if !(self.text_height.is_finite() && self.text_height > 0.0) {
            return Err(ConfigError::InvalidTextHeight {
                value: self.text_height,
            });
        }
        Ok(())
    }

    /// Signed rotation for a step, in radians (CCW positive)
    pub fn rotation_radians(&self, step: RotateStep) -> f64 {
        let angle = match step {
            RotateStep::QuarterCcw => self.quarter_rotation,
            RotateStep::QuarterCw => -self.quarter_rotation,
            RotateStep::FineCcw => self.fine_rotation,
            RotateStep::FineCw => -self.fine_rotation,
        };
        angle.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(EditorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_keymap_bindings() {
        let keys = Keymap::default();
        assert_eq!(keys.lookup(Key::Char('r')), Some(Command::Rotate(RotateStep::QuarterCcw)));
        assert_eq!(keys.lookup(Key::Char('E')), Some(Command::Rotate(RotateStep::QuarterCw)));
        assert_eq!(keys.lookup(Key::Char('q')), Some(Command::Rotate(RotateStep::FineCw)));
        assert_eq!(keys.lookup(Key::ArrowLeft), Some(Command::Nudge(Nudge::Left)));
        assert_eq!(keys.lookup(Key::Char('F')), Some(Command::Nudge(Nudge::Up)));
        assert_eq!(keys.lookup(Key::Escape), Some(Command::CancelSelection));
        assert_eq!(keys.lookup(Key::Char('z')), None);
    }

    #[test]
    fn rebinding_replaces() {
        let mut keys = Keymap::default();
        let old = keys.bind(Key::Char('R'), Command::Delete);
        assert_eq!(old, Some(Command::Rotate(RotateStep::QuarterCcw)));
        assert_eq!(keys.lookup(Key::Char('r')), Some(Command::Delete));
        keys.unbind(Key::Char('r'));
        assert_eq!(keys.lookup(Key::Char('r')), None);
    }

    #[test]
    fn rotation_steps_are_signed() {
        let cfg = EditorConfig::default();
        let fine = cfg.rotation_radians(RotateStep::FineCcw);
        assert!((fine - 0.0174533).abs() < 1e-6);
        assert_eq!(cfg.rotation_radians(RotateStep::FineCw), -fine);
        assert!((cfg.rotation_radians(RotateStep::QuarterCw) + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert_eq!(
            EditorConfig::default().with_nudge_step(0.0).validate(),
            Err(ConfigError::InvalidNudgeStep { value: 0.0 })
        );
        assert_eq!(
            EditorConfig::default().with_zoom_factor(1.0).validate(),
            Err(ConfigError::InvalidZoomFactor { value: 1.0 })
        );
        assert_eq!(
            EditorConfig::default().with_text_height(-3.0).validate(),
            Err(ConfigError::InvalidTextHeight { value: -3.0 })
        );
        assert!(matches!(
            EditorConfig::default().with_fine_rotation(Angle(f64::NAN)).validate(),
            Err(ConfigError::InvalidRotationStep { .. })
        ));
    }
}
