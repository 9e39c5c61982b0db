//! Shape kinds and the mapping from geographic shape requests to view-space
//! attribute sets.
//!
//! The set of supported kinds is closed: [`ShapeKind`] enumerates them and
//! every kind resolves to one positional rule. The string entry point
//! ([`ShapeMapper::create_shape_named`], or `str::parse::<ShapeKind>`)
//! still rejects unknown names with [`ShapeError::Unsupported`].

mod attrs;
mod convenience;
mod geometry;

pub use attrs::{AttrValue, Attributes};
pub use convenience::{ImageOptions, LengthAdjust, RectOptions, TextOptions};
pub use geometry::AnchorCount;

use geometry::{Center, Endpoints, Geometry, Origin, PointList, PositionalGeometry};

use std::fmt;
use std::str::FromStr;

use crate::coords::CoordinateSystem;
use crate::errors::ShapeError;
use crate::types::{GeoCoordinate, ViewCoordinate};

/// The supported SVG shape elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Circle,
    Ellipse,
    Rect,
    Text,
    Image,
    ForeignObject,
    Polygon,
    Polyline,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Rect,
        ShapeKind::Text,
        ShapeKind::Image,
        ShapeKind::ForeignObject,
        ShapeKind::Polygon,
        ShapeKind::Polyline,
    ];

    /// The SVG element name, e.g. `foreignObject`.
    pub fn element_name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Rect => "rect",
            ShapeKind::Text => "text",
            ShapeKind::Image => "image",
            ShapeKind::ForeignObject => "foreignObject",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Polyline => "polyline",
        }
    }

    /// The positional rule this kind uses.
    pub(crate) fn geometry(self) -> Geometry {
        match self {
            ShapeKind::Line => Endpoints.into(),
            ShapeKind::Circle | ShapeKind::Ellipse => Center.into(),
            ShapeKind::Rect | ShapeKind::Text | ShapeKind::Image | ShapeKind::ForeignObject => {
                Origin.into()
            }
            ShapeKind::Polygon | ShapeKind::Polyline => PointList.into(),
        }
    }

    pub fn anchor_count(self) -> AnchorCount {
        self.geometry().anchor_count()
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Element names are matched case-sensitively, as SVG does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.element_name() == s)
            .ok_or_else(|| ShapeError::Unsupported { name: s.to_string() })
    }
}

/// A shape kind, its geographic anchors and caller attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRequest {
    pub kind: ShapeKind,
    pub anchors: Vec<GeoCoordinate>,
    pub attributes: Attributes,
}

impl ShapeRequest {
    pub fn new(kind: ShapeKind, anchors: impl Into<Vec<GeoCoordinate>>) -> Self {
        Self {
            kind,
            anchors: anchors.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// A shape kind with its complete view-space attribute set.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeResult {
    pub kind: ShapeKind,
    pub attributes: Attributes,
}

/// Turns shape requests into [`ShapeResult`]s using a borrowed
/// [`CoordinateSystem`].
///
/// The mapper holds no state of its own; it is a cheap view that can be
/// copied and shared freely.
#[derive(Debug, Clone, Copy)]
pub struct ShapeMapper<'a> {
    coords: &'a CoordinateSystem,
}

impl<'a> ShapeMapper<'a> {
    pub fn new(coords: &'a CoordinateSystem) -> Self {
        Self { coords }
    }

    pub fn coordinate_system(&self) -> &'a CoordinateSystem {
        self.coords
    }

    /// Project `anchors` and merge the kind's positional attributes over
    /// `attributes`.
    ///
    /// Fails with [`ShapeError::AnchorCount`] before projecting anything if
    /// the anchor count does not fit the kind, and with
    /// [`ShapeError::Range`] if any anchor lies outside the configured
    /// bounds.
    pub fn create_shape(
        &self,
        kind: ShapeKind,
        attributes: Attributes,
        anchors: &[GeoCoordinate],
    ) -> Result<ShapeResult, ShapeError> {
        let geometry = kind.geometry();
        let expected = geometry.anchor_count();
        if !expected.accepts(anchors.len()) {
            return Err(ShapeError::AnchorCount {
                kind,
                expected,
                found: anchors.len(),
            });
        }

        let points = anchors
            .iter()
            .map(|&geo| self.coords.map_geo_to_view(geo))
            .collect::<Result<Vec<ViewCoordinate>, _>>()?;

        Ok(ShapeResult {
            kind,
            attributes: attributes.merged(geometry.positional_attributes(&points)),
        })
    }

    /// [`create_shape`](Self::create_shape) with the kind given by element
    /// name.
    pub fn create_shape_named(
        &self,
        name: &str,
        attributes: Attributes,
        anchors: &[GeoCoordinate],
    ) -> Result<ShapeResult, ShapeError> {
        self.create_shape(name.parse()?, attributes, anchors)
    }

    pub fn create(&self, request: &ShapeRequest) -> Result<ShapeResult, ShapeError> {
        self.create_shape(request.kind, request.attributes.clone(), &request.anchors)
    }
}
