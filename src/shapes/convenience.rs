//! Per-kind constructors on top of [`ShapeMapper::create_shape`].
//!
//! Each constructor turns its parameters into attributes, applies them over
//! the caller attributes and leaves positional attributes to the mapper.
//! Optional parameters that are `None` never show up as attributes.

use std::fmt;

use super::{Attributes, ShapeKind, ShapeMapper, ShapeResult};
use crate::errors::ShapeError;
use crate::types::GeoCoordinate;

/// Corner radii and path length of a `<rect>`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RectOptions {
    pub corner_radius_x: Option<f64>,
    pub corner_radius_y: Option<f64>,
    pub path_length: Option<f64>,
}

impl RectOptions {
    /// Same radius on both axes.
    pub fn rounded(radius: f64) -> Self {
        Self {
            corner_radius_x: Some(radius),
            corner_radius_y: Some(radius),
            path_length: None,
        }
    }
}

/// Value of the `lengthAdjust` text attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthAdjust {
    Spacing,
    SpacingAndGlyphs,
}

impl fmt::Display for LengthAdjust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LengthAdjust::Spacing => "spacing",
            LengthAdjust::SpacingAndGlyphs => "spacingAndGlyphs",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextOptions {
    pub rotate: Option<f64>,
    pub length_adjust: Option<LengthAdjust>,
    pub text_length: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// e.g. `xMidYMid meet` or `none`
    pub preserve_aspect_ratio: Option<String>,
}

impl ImageOptions {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            preserve_aspect_ratio: None,
        }
    }
}

impl ShapeMapper<'_> {
    pub fn create_line(
        &self,
        from: GeoCoordinate,
        to: GeoCoordinate,
        path_length: Option<f64>,
        attributes: Attributes,
    ) -> Result<ShapeResult, ShapeError> {
        let attributes = attributes.with_opt("pathLength", path_length);
        self.create_shape(ShapeKind::Line, attributes, &[from, to])
    }

    pub fn create_circle(
        &self,
        center: GeoCoordinate,
        radius: f64,
        path_length: Option<f64>,
        attributes: Attributes,
    ) -> Result<ShapeResult, ShapeError> {
        let attributes = attributes
            .with("r", radius)
            .with_opt("pathLength", path_length);
        self.create_shape(ShapeKind::Circle, attributes, &[center])
    }

    pub fn create_ellipse(
        &self,
        center: GeoCoordinate,
        radius_x: f64,
        radius_y: f64,
        path_length: Option<f64>,
        attributes: Attributes,
    ) -> Result<ShapeResult, ShapeError> {
        let attributes = attributes
            .with("rx", radius_x)
            .with("ry", radius_y)
            .with_opt("pathLength", path_length);
        self.create_shape(ShapeKind::Ellipse, attributes, &[center])
    }

    pub fn create_rect(
        &self,
        at: GeoCoordinate,
        width: f64,
        height: f64,
        options: RectOptions,
        attributes: Attributes,
    ) -> Result<ShapeResult, ShapeError> {
        let attributes = attributes
            .with("width", width)
            .with("height", height)
            .with_opt("rx", options.corner_radius_x)
            .with_opt("ry", options.corner_radius_y)
            .with_opt("pathLength", options.path_length);
        self.create_shape(ShapeKind::Rect, attributes, &[at])
    }

    /// The text content itself is not an attribute; the canvas adds it.
    pub fn create_text(
        &self,
        at: GeoCoordinate,
        options: TextOptions,
        attributes: Attributes,
    ) -> Result<ShapeResult, ShapeError> {
        let attributes = attributes
            .with_opt("rotate", options.rotate)
            .with_opt("lengthAdjust", options.length_adjust.map(|v| v.to_string()))
            .with_opt("textLength", options.text_length);
        self.create_shape(ShapeKind::Text, attributes, &[at])
    }

    pub fn create_image(
        &self,
        at: GeoCoordinate,
        href: &str,
        options: ImageOptions,
        attributes: Attributes,
    ) -> Result<ShapeResult, ShapeError> {
        let attributes = attributes
            .with("href", href)
            .with_opt("width", options.width)
            .with_opt("height", options.height)
            .with_opt("preserveAspectRatio", options.preserve_aspect_ratio);
        self.create_shape(ShapeKind::Image, attributes, &[at])
    }

    pub fn create_foreign_object(
        &self,
        at: GeoCoordinate,
        width: f64,
        height: f64,
        attributes: Attributes,
    ) -> Result<ShapeResult, ShapeError> {
        let attributes = attributes.with("width", width).with("height", height);
        self.create_shape(ShapeKind::ForeignObject, attributes, &[at])
    }

    pub fn create_polygon(
        &self,
        points: &[GeoCoordinate],
        path_length: Option<f64>,
        attributes: Attributes,
    ) -> Result<ShapeResult, ShapeError> {
        let attributes = attributes.with_opt("pathLength", path_length);
        self.create_shape(ShapeKind::Polygon, attributes, points)
    }

    pub fn create_polyline(
        &self,
        points: &[GeoCoordinate],
        path_length: Option<f64>,
        attributes: Attributes,
    ) -> Result<ShapeResult, ShapeError> {
        let attributes = attributes.with_opt("pathLength", path_length);
        self.create_shape(ShapeKind::Polyline, attributes, points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CoordinateOptions, CoordinateSystem};

    fn coords() -> CoordinateSystem {
        CoordinateSystem::with_options(&CoordinateOptions::new().view_size(360.0, 180.0)).unwrap()
    }

    fn geo(latitude: f64, longitude: f64) -> GeoCoordinate {
        GeoCoordinate::new(latitude, longitude)
    }

    #[test]
    fn circle_with_radius_and_no_path_length() {
        let cs = coords();
        let circle = ShapeMapper::new(&cs)
            .create_circle(geo(0.0, 0.0), 12.0, None, Attributes::new().with("fill", "red"))
            .unwrap();
        insta::assert_snapshot!(circle.attributes, @r#"cx="180" cy="90" fill="red" r="12""#);
    }

    #[test]
    fn parameters_win_over_caller_attributes() {
        let cs = coords();
        let ellipse = ShapeMapper::new(&cs)
            .create_ellipse(
                geo(10.0, 10.0),
                3.0,
                2.0,
                Some(100.0),
                Attributes::new().with("rx", 99.0),
            )
            .unwrap();
        insta::assert_snapshot!(
            ellipse.attributes,
            @r#"cx="190" cy="80" pathLength="100" rx="3" ry="2""#
        );
    }

    #[test]
    fn rect_omits_absent_corner_radii() {
        let cs = coords();
        let mapper = ShapeMapper::new(&cs);

        let plain = mapper
            .create_rect(geo(45.0, -90.0), 20.0, 10.0, RectOptions::default(), Attributes::new())
            .unwrap();
        insta::assert_snapshot!(plain.attributes, @r#"height="10" width="20" x="90" y="45""#);

        let rounded = mapper
            .create_rect(geo(45.0, -90.0), 20.0, 10.0, RectOptions::rounded(2.0), Attributes::new())
            .unwrap();
        assert_eq!(rounded.attributes.number("rx"), Some(2.0));
        assert_eq!(rounded.attributes.number("ry"), Some(2.0));
    }

    #[test]
    fn text_options() {
        let cs = coords();
        let text = ShapeMapper::new(&cs)
            .create_text(
                geo(0.0, 0.0),
                TextOptions {
                    rotate: Some(45.0),
                    length_adjust: Some(LengthAdjust::SpacingAndGlyphs),
                    text_length: None,
                },
                Attributes::new(),
            )
            .unwrap();
        insta::assert_snapshot!(
            text.attributes,
            @r#"lengthAdjust="spacingAndGlyphs" rotate="45" x="180" y="90""#
        );
    }

    #[test]
    fn image_with_href() {
        let cs = coords();
        let image = ShapeMapper::new(&cs)
            .create_image(
                geo(90.0, -180.0),
                "pin.png",
                ImageOptions::sized(16.0, 16.0),
                Attributes::new(),
            )
            .unwrap();
        insta::assert_snapshot!(
            image.attributes,
            @r#"height="16" href="pin.png" width="16" x="0" y="0""#
        );
    }

    #[test]
    fn foreign_object_size() {
        let cs = coords();
        let fo = ShapeMapper::new(&cs)
            .create_foreign_object(geo(0.0, 0.0), 100.0, 40.0, Attributes::new())
            .unwrap();
        assert_eq!(fo.kind, ShapeKind::ForeignObject);
        assert_eq!(fo.attributes.number("width"), Some(100.0));
        assert_eq!(fo.attributes.number("x"), Some(180.0));
    }

    #[test]
    fn line_and_point_lists() {
        let cs = coords();
        let mapper = ShapeMapper::new(&cs);

        let line = mapper
            .create_line(geo(0.0, 0.0), geo(10.0, 10.0), Some(1.0), Attributes::new())
            .unwrap();
        insta::assert_snapshot!(
            line.attributes,
            @r#"pathLength="1" x1="180" x2="190" y1="90" y2="80""#
        );

        let route = [geo(0.0, 0.0), geo(0.0, 10.0), geo(10.0, 10.0)];
        let polyline = mapper.create_polyline(&route, None, Attributes::new()).unwrap();
        let polygon = mapper.create_polygon(&route, None, Attributes::new()).unwrap();
        assert_eq!(polyline.kind, ShapeKind::Polyline);
        assert_eq!(polygon.kind, ShapeKind::Polygon);
        assert_eq!(polyline.attributes, polygon.attributes);
        insta::assert_snapshot!(polygon.attributes, @r#"points="180,90 190,90 190,80""#);
    }

    #[test]
    fn out_of_range_propagates() {
        let cs = coords();
        let err = ShapeMapper::new(&cs)
            .create_circle(geo(999.0, 0.0), 1.0, None, Attributes::new())
            .unwrap_err();
        assert!(matches!(err, ShapeError::Range(_)));
    }
}
