//! Error types with diagnostic codes using miette
//!
//! Construction errors stop malformed primitives at the boundary so they
//! never enter a `Scene`. Transform errors reject a whole batch.

use miette::Diagnostic;
use thiserror::Error;

use crate::primitive::{PrimitiveId, PrimitiveKind};
use crate::types::NumericError;

// ============================================================================
// Construction Errors
// ============================================================================

/// Errors raised when building a primitive from raw geometry
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    #[error("{kind} needs at least 2 points, got {count}")]
    #[diagnostic(code(planview::construct::too_few_points))]
    TooFewPoints { kind: PrimitiveKind, count: usize },

    #[error("radius must be positive, got {value}")]
    #[diagnostic(code(planview::construct::non_positive_radius))]
    NonPositiveRadius { value: f64 },

    #[error("text height must be positive, got {value}")]
    #[diagnostic(code(planview::construct::non_positive_height))]
    NonPositiveHeight { value: f64 },

    #[error("{what} is not a finite number: {source}")]
    #[diagnostic(
        code(planview::construct::non_finite),
        help("coordinates and angles must not be NaN or infinite")
    )]
    NonFinite {
        what: &'static str,
        source: NumericError,
    },
}

impl ConstructionError {
    pub(crate) fn non_finite(what: &'static str) -> impl FnOnce(NumericError) -> Self {
        move |source| ConstructionError::NonFinite { what, source }
    }
}

// ============================================================================
// Transform Errors
// ============================================================================

/// Errors that reject a translate/rotate batch before anything is written
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("translation offset is not finite: ({dx}, {dy})")]
    #[diagnostic(code(planview::transform::non_finite_offset))]
    NonFiniteOffset { dx: f64, dy: f64 },

    #[error("rotation angle is not finite: {radians}")]
    #[diagnostic(code(planview::transform::non_finite_angle))]
    NonFiniteAngle { radians: f64 },

    #[error("rotation pivot is not finite: ({x}, {y})")]
    #[diagnostic(code(planview::transform::non_finite_pivot))]
    NonFinitePivot { x: f64, y: f64 },

    #[error("transform would leave {id} with non-finite geometry")]
    #[diagnostic(
        code(planview::transform::non_finite_result),
        help("no primitive in the batch was modified")
    )]
    NonFiniteResult { id: PrimitiveId },
}

// ============================================================================
// Viewport Errors
// ============================================================================

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ViewportError {
    #[error("invalid scale: {value}")]
    #[diagnostic(
        code(planview::viewport::invalid_scale),
        help("scale must be finite and greater than zero")
    )]
    InvalidScale { value: f64 },

    #[error("invalid zoom factor: {factor}")]
    #[diagnostic(code(planview::viewport::invalid_zoom))]
    InvalidZoom { factor: f64 },

    #[error("invalid origin: ({x}, {y})")]
    #[diagnostic(code(planview::viewport::invalid_origin))]
    InvalidOrigin { x: f64, y: f64 },

    #[error("invalid pan offset: ({dx}, {dy})")]
    #[diagnostic(code(planview::viewport::invalid_pan))]
    InvalidPan { dx: f64, dy: f64 },
}

// ============================================================================
// Configuration Errors
// ============================================================================

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("nudge step must be positive, got {value}")]
    #[diagnostic(code(planview::config::nudge_step))]
    InvalidNudgeStep { value: f64 },

    #[error("rotation step must be a non-zero finite angle, got {value}")]
    #[diagnostic(code(planview::config::rotation_step))]
    InvalidRotationStep { value: f64 },

    #[error("zoom factor must be greater than 1, got {value}")]
    #[diagnostic(
        code(planview::config::zoom_factor),
        help("scrolling divides or multiplies the scale by this factor")
    )]
    InvalidZoomFactor { value: f64 },

    #[error("default text height must be positive, got {value}")]
    #[diagnostic(code(planview::config::text_height))]
    InvalidTextHeight { value: f64 },
}
