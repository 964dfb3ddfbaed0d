//! Default steps and sizes (world units unless noted)

use crate::types::Angle;

/// Distance moved by one nudge key press
pub const NUDGE_STEP: f64 = 1.0;
/// Fine rotation per key press
pub const FINE_ROTATION: Angle = Angle(1.0);
/// Quarter-turn rotation per key press
pub const QUARTER_ROTATION: Angle = Angle::QUARTER_TURN;
/// Scale multiplier per scroll notch
pub const ZOOM_FACTOR: f64 = 1.2;
/// Height given to text placed in text mode
pub const TEXT_HEIGHT: f64 = 10.0;
/// Anchor hit radius for picking text to edit
pub const TEXT_PICK_TOLERANCE: f64 = 1.0;
