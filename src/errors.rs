//! Error types with diagnostics using miette
//!
//! Every error is a synchronous hard stop: nothing in this crate retries or
//! recovers on the caller's behalf.

use miette::Diagnostic;
use thiserror::Error;

use crate::shapes::{AnchorCount, ShapeKind};

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised when a merged option set violates a range or ordering rule.
///
/// The coordinate system keeps its previous configuration when one of these
/// is returned.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("option {option} {value} is out of range -90-90")]
    #[diagnostic(code(geosvg::config::latitude_out_of_range))]
    LatitudeOutOfRange { option: &'static str, value: f64 },

    #[error("option {option} {value} is out of range -180-180")]
    #[diagnostic(code(geosvg::config::longitude_out_of_range))]
    LongitudeOutOfRange { option: &'static str, value: f64 },

    #[error("options latitudeBegin {begin} and latitudeEnd {end} are not a valid range")]
    #[diagnostic(
        code(geosvg::config::latitude_range),
        help("latitudeBegin is the north edge and must be greater than latitudeEnd")
    )]
    LatitudeRange { begin: f64, end: f64 },

    #[error("options longitudeBegin {begin} and longitudeEnd {end} are not a valid range")]
    #[diagnostic(
        code(geosvg::config::longitude_range),
        help("longitudeBegin is the west edge and must be less than longitudeEnd")
    )]
    LongitudeRange { begin: f64, end: f64 },

    #[error("option viewWidth {0} is invalid")]
    #[diagnostic(code(geosvg::config::view_width), help("the view width must be positive"))]
    ViewWidth(f64),

    #[error("option viewHeight {0} is invalid")]
    #[diagnostic(code(geosvg::config::view_height), help("the view height must be positive"))]
    ViewHeight(f64),

    #[error("option coordDegreePrecision must be at least 1")]
    #[diagnostic(code(geosvg::config::precision))]
    Precision,
}

// ============================================================================
// Range Errors
// ============================================================================

/// Errors raised when a coordinate lies outside the configured bounds.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("X {x} out of range 0-{width}")]
    #[diagnostic(code(geosvg::range::view_x))]
    ViewX { x: f64, width: f64 },

    #[error("Y {y} out of range 0-{height}")]
    #[diagnostic(code(geosvg::range::view_y))]
    ViewY { y: f64, height: f64 },

    #[error("latitude {latitude} out of range {begin}-{end}")]
    #[diagnostic(code(geosvg::range::latitude))]
    Latitude { latitude: f64, begin: f64, end: f64 },

    #[error("longitude {longitude} out of range {begin}-{end}")]
    #[diagnostic(code(geosvg::range::longitude))]
    Longitude { longitude: f64, begin: f64, end: f64 },
}

// ============================================================================
// Shape Errors
// ============================================================================

/// Errors raised while turning a shape request into view-space attributes.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("shape '{name}' not supported")]
    #[diagnostic(
        code(geosvg::shape::unsupported),
        help("supported shapes: line, circle, ellipse, rect, text, image, foreignObject, polygon, polyline")
    )]
    Unsupported { name: String },

    #[error("shape '{kind}' needs {expected} anchor(s), got {found}")]
    #[diagnostic(code(geosvg::shape::anchor_count))]
    AnchorCount {
        kind: ShapeKind,
        expected: AnchorCount,
        found: usize,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Range(#[from] RangeError),
}

// ============================================================================
// Canvas Errors
// ============================================================================

/// Errors raised by [`MapCanvas`](crate::MapCanvas) operations.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum CanvasError {
    #[error("map not rendered to a viewport")]
    #[diagnostic(
        code(geosvg::canvas::not_rendered),
        help("call `render_to` with a viewport before centering the map")
    )]
    NotRendered,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Event(#[from] EventError),
}

// ============================================================================
// Event Errors
// ============================================================================

/// Errors raised by the [`EventManager`](crate::EventManager).
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum EventError {
    #[error("unknown event name '{name}', available event names: {available}")]
    #[diagnostic(code(geosvg::event::unknown))]
    UnknownEvent { name: String, available: String },
}

// ============================================================================
// Animation Errors
// ============================================================================

/// Errors raised while generating `<animate>` elements.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum AnimationError {
    #[error("option repeating_key_splines can only be used with key_times")]
    #[diagnostic(code(geosvg::animation::splines_without_key_times))]
    SplinesWithoutKeyTimes,

    #[error("element <{element}> has no numeric '{attribute}' attribute")]
    #[diagnostic(
        code(geosvg::animation::missing_attribute),
        help("only lines created with x1, y1, x2 and y2 can be animated")
    )]
    MissingAttribute { element: String, attribute: &'static str },
}
