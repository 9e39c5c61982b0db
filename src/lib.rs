//! Map geographic coordinates onto an SVG canvas.
//!
//! The core is [`CoordinateSystem`], an equirectangular mapping between a
//! latitude/longitude rectangle and a pixel rectangle, and [`ShapeMapper`],
//! which turns shapes anchored at geographic coordinates into view-space
//! SVG attribute sets. [`MapCanvas`] collects the resulting shapes into a
//! document with append events, a scrollable [`Viewport`] and `<animate>`
//! support.
//!
//! ```
//! use geosvg::{Attributes, CanvasOptions, GeoCoordinate, MapCanvas};
//!
//! let mut canvas = MapCanvas::new(&CanvasOptions::new().size(1200.0, 600.0))?;
//! canvas.append_circle(
//!     GeoCoordinate::new(20.0, 20.0),
//!     10.0,
//!     None,
//!     Attributes::new().with("fill", "red"),
//! )?;
//!
//! let circle = canvas.shapes()[0].attributes();
//! assert_eq!(circle.number("cx"), Some(667.0));
//! assert_eq!(circle.number("cy"), Some(233.0));
//! # Ok::<(), geosvg::CanvasError>(())
//! ```

pub mod animation;
pub mod canvas;
pub mod coords;
pub mod defaults;
pub mod errors;
pub(crate) mod log;
pub mod path;
pub mod shapes;
pub mod types;

pub use animation::{AnimationFactory, AnimationOptions, CalcMode, RepeatCount, Restart};
pub use canvas::{
    CanvasEvent, CanvasOptions, EventManager, ListenerId, MapCanvas, SvgElement, Viewport,
};
pub use coords::{
    Configuration, CoordinateOptions, CoordinateSystem, center_of, geo_distance, offset_by_meters,
    view_distance,
};
pub use errors::{AnimationError, CanvasError, ConfigError, EventError, RangeError, ShapeError};
pub use path::{ArcFlags, PathBuilder, PathCommand};
pub use shapes::{
    AttrValue, Attributes, ImageOptions, LengthAdjust, RectOptions, ShapeKind, ShapeMapper,
    ShapeRequest, ShapeResult, TextOptions,
};
pub use types::{GeoCoordinate, Meters, ViewCoordinate};
