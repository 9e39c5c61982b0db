//! The map canvas: an SVG document whose children are placed by geographic
//! coordinates.
//!
//! [`MapCanvas`] owns a [`CoordinateSystem`] sized to the canvas, a list of
//! appended shapes, an [`EventManager`] raising
//! [`CanvasEvent::BeforeAppendShape`] and [`CanvasEvent::AfterAppendShape`]
//! around every append, and an optional [`Viewport`] standing in for the
//! scrollable container the canvas is rendered into.

mod element;
mod events;

pub use element::SvgElement;
pub use events::{CanvasEvent, EventManager, Listener, ListenerId};

use std::time::{Duration, Instant};

use svg::Document;

use crate::animation::AnimationFactory;
use crate::coords::{CoordinateOptions, CoordinateSystem};
use crate::defaults;
use crate::errors::{CanvasError, EventError};
use crate::log::{debug, warn};
use crate::path::PathBuilder;
use crate::shapes::{Attributes, ImageOptions, RectOptions, ShapeMapper, TextOptions};
use crate::types::{GeoCoordinate, ViewCoordinate};

/// Canvas options. Every field is optional; `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Initial scroll offset applied when the canvas is rendered.
    pub start: Option<ViewCoordinate>,
    /// Background image URL.
    pub image_source: Option<String>,
    pub coordinates: Option<CoordinateOptions>,
}

impl CanvasOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The options a fresh canvas starts from.
    pub fn defaults() -> Self {
        Self {
            width: Some(defaults::CANVAS_WIDTH),
            height: Some(defaults::CANVAS_HEIGHT),
            ..Self::default()
        }
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn start(mut self, x: f64, y: f64) -> Self {
        self.start = Some(ViewCoordinate::new(x, y));
        self
    }

    pub fn image_source(mut self, src: impl Into<String>) -> Self {
        self.image_source = Some(src.into());
        self
    }

    pub fn coordinates(mut self, options: CoordinateOptions) -> Self {
        self.coordinates = Some(options);
        self
    }
}

/// The visible window onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Scroll offset of the top-left corner.
    pub scroll: ViewCoordinate,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll: ViewCoordinate::ZERO,
        }
    }

    pub fn scroll_by(&mut self, delta: ViewCoordinate) {
        self.scroll = self.scroll + delta;
    }

    pub fn scroll_to(&mut self, position: ViewCoordinate) {
        self.scroll = position;
    }
}

pub struct MapCanvas {
    coords: CoordinateSystem,
    image_source: Option<String>,
    start: ViewCoordinate,
    viewport: Option<Viewport>,
    shapes: Vec<SvgElement>,
    events: EventManager<CanvasEvent, SvgElement>,
    created: Instant,
}

impl Default for MapCanvas {
    fn default() -> Self {
        let mut canvas = Self::blank();
        // The default size is always valid.
        canvas.coords = CoordinateSystem::with_options(
            &CoordinateOptions::new().view_size(defaults::CANVAS_WIDTH, defaults::CANVAS_HEIGHT),
        )
        .unwrap_or_default();
        canvas
    }
}

impl MapCanvas {
    /// Start from [`CanvasOptions::defaults`] and apply `options` over them.
    pub fn new(options: &CanvasOptions) -> Result<Self, CanvasError> {
        let mut canvas = Self::default();
        canvas.configure(options)?;
        Ok(canvas)
    }

    fn blank() -> Self {
        Self {
            coords: CoordinateSystem::new(),
            image_source: None,
            start: ViewCoordinate::ZERO,
            viewport: None,
            shapes: Vec::new(),
            events: EventManager::new(CanvasEvent::ALL),
            created: Instant::now(),
        }
    }

    /// Apply coordinate options, then size, then image source, then start
    /// offset.
    ///
    /// Coordinate options and size are validated together; if they fail,
    /// nothing changes.
    pub fn configure(&mut self, options: &CanvasOptions) -> Result<(), CanvasError> {
        let mut coordinates = options.coordinates.unwrap_or_default();
        if let Some(width) = options.width {
            coordinates.view_width = Some(width);
        }
        if let Some(height) = options.height {
            coordinates.view_height = Some(height);
        }
        if !coordinates.is_empty() {
            self.coords.configure(&coordinates)?;
            debug!(
                width = self.coords.view_width(),
                height = self.coords.view_height(),
                "canvas configured"
            );
        }

        if let Some(src) = &options.image_source {
            self.set_image_source(src.as_str());
        }
        if let Some(start) = options.start {
            self.start = start;
        }
        Ok(())
    }

    /// Change the canvas size. Does nothing when both are `None`.
    pub fn resize(&mut self, width: Option<f64>, height: Option<f64>) -> Result<(), CanvasError> {
        if width.is_none() && height.is_none() {
            return Ok(());
        }
        self.configure(&CanvasOptions {
            width,
            height,
            ..CanvasOptions::default()
        })
    }

    pub fn set_image_source(&mut self, src: impl Into<String>) {
        self.image_source = Some(src.into());
    }

    pub fn image_source(&self) -> Option<&str> {
        self.image_source.as_deref()
    }

    pub fn width(&self) -> f64 {
        self.coords.view_width()
    }

    pub fn height(&self) -> f64 {
        self.coords.view_height()
    }

    /// Attach the canvas to `viewport`, scrolling it by the start offset.
    pub fn render_to(&mut self, mut viewport: Viewport) {
        if self.start != ViewCoordinate::ZERO {
            viewport.scroll_by(self.start);
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            scroll = %viewport.scroll,
            "canvas rendered to viewport"
        );
        self.viewport = Some(viewport);
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Scroll the viewport so that `geo` sits in its middle.
    pub fn center(&mut self, geo: GeoCoordinate) -> Result<ViewCoordinate, CanvasError> {
        let Some(viewport) = self.viewport.as_mut() else {
            warn!(%geo, "center requested before the canvas was rendered");
            return Err(CanvasError::NotRendered);
        };
        let offset = self.coords.center_offset(geo, viewport.width, viewport.height)?;
        viewport.scroll_to(offset);
        debug!(%geo, scroll = %offset, "canvas centered");
        Ok(offset)
    }

    pub fn coordinate_system(&self) -> &CoordinateSystem {
        &self.coords
    }

    pub fn shape_mapper(&self) -> ShapeMapper<'_> {
        ShapeMapper::new(&self.coords)
    }

    pub fn shapes(&self) -> &[SvgElement] {
        &self.shapes
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut SvgElement> {
        self.shapes.get_mut(index)
    }

    /// Append `shape` as the last child and return its index.
    pub fn append_shape(&mut self, shape: SvgElement) -> Result<usize, CanvasError> {
        self.events.raise_event(&CanvasEvent::BeforeAppendShape, &shape)?;
        let index = self.shapes.len();
        self.shapes.push(shape);
        self.events
            .raise_event(&CanvasEvent::AfterAppendShape, &self.shapes[index])?;
        debug!(index, name = self.shapes[index].name(), "shape appended");
        Ok(index)
    }

    /// Create a shape by element name and append it.
    pub fn append_new_shape(
        &mut self,
        name: &str,
        attributes: Attributes,
        anchors: &[GeoCoordinate],
    ) -> Result<usize, CanvasError> {
        let shape = self.shape_mapper().create_shape_named(name, attributes, anchors)?;
        self.append_shape(shape.into())
    }

    pub fn append_line(
        &mut self,
        from: GeoCoordinate,
        to: GeoCoordinate,
        path_length: Option<f64>,
        attributes: Attributes,
    ) -> Result<usize, CanvasError> {
        let shape = self.shape_mapper().create_line(from, to, path_length, attributes)?;
        self.append_shape(shape.into())
    }

    pub fn append_circle(
        &mut self,
        center: GeoCoordinate,
        radius: f64,
        path_length: Option<f64>,
        attributes: Attributes,
    ) -> Result<usize, CanvasError> {
        let shape = self.shape_mapper().create_circle(center, radius, path_length, attributes)?;
        self.append_shape(shape.into())
    }

    pub fn append_ellipse(
        &mut self,
        center: GeoCoordinate,
        radius_x: f64,
        radius_y: f64,
        path_length: Option<f64>,
        attributes: Attributes,
    ) -> Result<usize, CanvasError> {
        let shape = self
            .shape_mapper()
            .create_ellipse(center, radius_x, radius_y, path_length, attributes)?;
        self.append_shape(shape.into())
    }

    pub fn append_rect(
        &mut self,
        at: GeoCoordinate,
        width: f64,
        height: f64,
        options: RectOptions,
        attributes: Attributes,
    ) -> Result<usize, CanvasError> {
        let shape = self
            .shape_mapper()
            .create_rect(at, width, height, options, attributes)?;
        self.append_shape(shape.into())
    }

    pub fn append_text(
        &mut self,
        at: GeoCoordinate,
        text: &str,
        options: TextOptions,
        attributes: Attributes,
    ) -> Result<usize, CanvasError> {
        let shape = self.shape_mapper().create_text(at, options, attributes)?;
        self.append_shape(SvgElement::from(shape).with_text(text))
    }

    pub fn append_image(
        &mut self,
        at: GeoCoordinate,
        href: &str,
        options: ImageOptions,
        attributes: Attributes,
    ) -> Result<usize, CanvasError> {
        let shape = self.shape_mapper().create_image(at, href, options, attributes)?;
        self.append_shape(shape.into())
    }

    pub fn append_foreign_object(
        &mut self,
        at: GeoCoordinate,
        width: f64,
        height: f64,
        content: SvgElement,
        attributes: Attributes,
    ) -> Result<usize, CanvasError> {
        let shape = self
            .shape_mapper()
            .create_foreign_object(at, width, height, attributes)?;
        self.append_shape(SvgElement::from(shape).with_child(content))
    }

    pub fn append_polygon(
        &mut self,
        points: &[GeoCoordinate],
        path_length: Option<f64>,
        attributes: Attributes,
    ) -> Result<usize, CanvasError> {
        let shape = self.shape_mapper().create_polygon(points, path_length, attributes)?;
        self.append_shape(shape.into())
    }

    pub fn append_polyline(
        &mut self,
        points: &[GeoCoordinate],
        path_length: Option<f64>,
        attributes: Attributes,
    ) -> Result<usize, CanvasError> {
        let shape = self.shape_mapper().create_polyline(points, path_length, attributes)?;
        self.append_shape(shape.into())
    }

    /// Append a `<path>` built in view coordinates.
    pub fn append_path(
        &mut self,
        path: &PathBuilder,
        attributes: Attributes,
    ) -> Result<usize, CanvasError> {
        let element =
            SvgElement::new("path").with_attributes(attributes.with("d", path.to_string()));
        self.append_shape(element)
    }

    /// Remove every appended shape.
    pub fn clear(&mut self) {
        debug!(count = self.shapes.len(), "canvas cleared");
        self.shapes.clear();
    }

    pub fn add_event_listener(
        &mut self,
        event: CanvasEvent,
        listener: impl Fn(&SvgElement) + Send + Sync + 'static,
    ) -> Result<ListenerId, EventError> {
        self.events.add_event_listener(event, listener)
    }

    /// [`add_event_listener`](Self::add_event_listener) with the event
    /// given by name, e.g. `beforeappendshape`.
    pub fn add_event_listener_named(
        &mut self,
        event: &str,
        listener: impl Fn(&SvgElement) + Send + Sync + 'static,
    ) -> Result<ListenerId, EventError> {
        self.events.add_event_listener(event.parse()?, listener)
    }

    pub fn remove_event_listener(
        &mut self,
        event: CanvasEvent,
        id: ListenerId,
    ) -> Result<bool, EventError> {
        self.events.remove_event_listener(&event, id)
    }

    /// Time since the canvas was created.
    pub fn current_time(&self) -> Duration {
        self.created.elapsed()
    }

    pub fn create_animation_factory(&self) -> AnimationFactory {
        AnimationFactory::new(self.current_time())
    }

    fn style(&self) -> String {
        let mut style = format!(
            "background: top left / contain no-repeat; padding: 0px; margin: 0px; width: {}px; height: {}px",
            self.width(),
            self.height()
        );
        if let Some(src) = &self.image_source {
            // a bare quote would end the CSS string early
            let src = src.replace('\'', "%27");
            style.push_str(&format!("; background-image: url('{}')", src));
        }
        style
    }

    /// The canvas as an `svg` crate document.
    pub fn to_document(&self) -> Document {
        let root = Document::new()
            .set("version", defaults::SVG_VERSION)
            .set("width", self.width())
            .set("height", self.height())
            .set("style", self.style());
        self.shapes
            .iter()
            .fold(root, |doc, shape| doc.add(shape.to_node()))
    }

    pub fn to_svg(&self) -> String {
        self.to_document().to_string()
    }
}

impl std::fmt::Debug for MapCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapCanvas")
            .field("coords", &self.coords)
            .field("image_source", &self.image_source)
            .field("viewport", &self.viewport)
            .field("shapes", &self.shapes.len())
            .field("events", &self.events)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn geo(latitude: f64, longitude: f64) -> GeoCoordinate {
        GeoCoordinate::new(latitude, longitude)
    }

    #[test]
    fn default_canvas_size() {
        let canvas = MapCanvas::default();
        assert_eq!(canvas.width(), 2048.0);
        assert_eq!(canvas.height(), 1024.0);
        assert!(canvas.shapes().is_empty());
        assert!(canvas.viewport().is_none());
    }

    #[test]
    fn size_overrides_coordinate_view_size() {
        let canvas = MapCanvas::new(
            &CanvasOptions::new()
                .coordinates(CoordinateOptions::new().view_size(10.0, 10.0).latitudes(60.0, 30.0))
                .size(600.0, 300.0),
        )
        .unwrap();
        assert_eq!(canvas.coordinate_system().view_width(), 600.0);
        assert_eq!(canvas.coordinate_system().configuration().latitude_begin, 60.0);
    }

    #[test]
    fn failed_configure_leaves_canvas_unchanged() {
        let mut canvas = MapCanvas::default();
        let err = canvas
            .configure(
                &CanvasOptions::new()
                    .coordinates(CoordinateOptions::new().latitude_begin(95.0))
                    .size(10.0, 10.0)
                    .image_source("world.png"),
            )
            .unwrap_err();
        assert!(matches!(err, CanvasError::Config(_)));
        assert_eq!(canvas.width(), 2048.0);
        assert_eq!(canvas.image_source(), None);
    }

    #[test]
    fn resize_forwards_to_coordinates() {
        let mut canvas = MapCanvas::default();
        canvas.resize(None, None).unwrap();
        assert_eq!(canvas.width(), 2048.0);

        canvas.resize(Some(1000.0), None).unwrap();
        assert_eq!(canvas.width(), 1000.0);
        assert_eq!(canvas.height(), 1024.0);

        assert!(canvas.resize(None, Some(-5.0)).is_err());
        assert_eq!(canvas.height(), 1024.0);
    }

    #[test]
    fn center_requires_viewport() {
        let mut canvas = MapCanvas::default();
        assert_eq!(canvas.center(geo(0.0, 0.0)), Err(CanvasError::NotRendered));
    }

    #[test]
    fn center_scrolls_viewport() {
        let mut canvas = MapCanvas::new(&CanvasOptions::new().size(1000.0, 500.0)).unwrap();
        canvas.render_to(Viewport::new(200.0, 100.0));
        let offset = canvas.center(geo(0.0, 0.0)).unwrap();
        assert_eq!(offset, ViewCoordinate::new(400.0, 200.0));
        assert_eq!(canvas.viewport().map(|v| v.scroll), Some(offset));

        assert!(matches!(canvas.center(geo(100.0, 0.0)), Err(CanvasError::Range(_))));
    }

    #[test]
    fn render_to_applies_start_offset() {
        let mut canvas = MapCanvas::new(&CanvasOptions::new().start(30.0, 40.0)).unwrap();
        canvas.render_to(Viewport::new(100.0, 100.0));
        assert_eq!(canvas.viewport().map(|v| v.scroll), Some(ViewCoordinate::new(30.0, 40.0)));
    }

    #[test]
    fn append_raises_events_in_order() {
        let mut canvas = MapCanvas::new(&CanvasOptions::new().size(360.0, 180.0)).unwrap();
        let log = Arc::new(Mutex::new(Vec::new()));

        let before = log.clone();
        canvas
            .add_event_listener(CanvasEvent::BeforeAppendShape, move |shape| {
                before.lock().unwrap().push(format!("before {}", shape.name()))
            })
            .unwrap();
        let after = log.clone();
        canvas
            .add_event_listener_named("afterappendshape", move |shape| {
                after.lock().unwrap().push(format!("after {}", shape.name()))
            })
            .unwrap();

        let index = canvas
            .append_circle(geo(0.0, 0.0), 5.0, None, Attributes::new())
            .unwrap();
        assert_eq!(index, 0);
        assert_eq!(*log.lock().unwrap(), vec!["before circle", "after circle"]);
    }

    #[test]
    fn removed_listener_no_longer_fires() {
        let mut canvas = MapCanvas::default();
        let calls = Arc::new(Mutex::new(0));
        let sink = calls.clone();
        let id = canvas
            .add_event_listener(CanvasEvent::AfterAppendShape, move |_| *sink.lock().unwrap() += 1)
            .unwrap();

        canvas.append_shape(SvgElement::new("g")).unwrap();
        assert_eq!(canvas.remove_event_listener(CanvasEvent::AfterAppendShape, id), Ok(true));
        canvas.append_shape(SvgElement::new("g")).unwrap();

        assert_eq!(*calls.lock().unwrap(), 1);
        assert_eq!(canvas.shapes().len(), 2);
    }

    #[test]
    fn unknown_event_name_is_rejected() {
        let mut canvas = MapCanvas::default();
        assert!(matches!(
            canvas.add_event_listener_named("click", |_| {}),
            Err(EventError::UnknownEvent { .. })
        ));
    }

    #[test]
    fn failed_shape_is_not_appended() {
        let mut canvas = MapCanvas::default();
        let err = canvas
            .append_new_shape("triangle", Attributes::new(), &[geo(0.0, 0.0)])
            .unwrap_err();
        assert!(matches!(err, CanvasError::Shape(_)));
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn text_and_foreign_object_content() {
        let mut canvas = MapCanvas::new(&CanvasOptions::new().size(360.0, 180.0)).unwrap();
        let text = canvas
            .append_text(geo(52.0, 13.0), "Berlin", TextOptions::default(), Attributes::new())
            .unwrap();
        let fo = canvas
            .append_foreign_object(
                geo(0.0, 0.0),
                80.0,
                20.0,
                SvgElement::new("div"),
                Attributes::new(),
            )
            .unwrap();

        assert_eq!(canvas.shapes()[text].text(), Some("Berlin"));
        assert_eq!(canvas.shapes()[fo].children()[0].name(), "div");
    }

    #[test]
    fn append_path_sets_d() {
        let mut canvas = MapCanvas::default();
        let path = PathBuilder::with_separator(" ").move_to(0.0, 0.0).line_to(5.0, 5.0);
        let index = canvas.append_path(&path, Attributes::new().with("fill", "none")).unwrap();
        let d = canvas.shapes()[index].attributes().get("d").map(ToString::to_string);
        assert_eq!(d.as_deref(), Some("M 0,0 L 5,5"));
    }

    #[test]
    fn clear_removes_all_shapes() {
        let mut canvas = MapCanvas::default();
        canvas.append_shape(SvgElement::new("g")).unwrap();
        canvas.clear();
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn style_includes_size_and_background() {
        let mut canvas = MapCanvas::new(&CanvasOptions::new().size(400.0, 200.0)).unwrap();
        assert!(!canvas.style().contains("background-image"));
        canvas.set_image_source("maps/world.jpg");
        insta::assert_snapshot!(
            canvas.style(),
            @"background: top left / contain no-repeat; padding: 0px; margin: 0px; width: 400px; height: 200px; background-image: url('maps/world.jpg')"
        );
    }

    #[test]
    fn style_percent_encodes_quotes_in_image_source() {
        let mut canvas = MapCanvas::new(&CanvasOptions::new().size(10.0, 10.0)).unwrap();
        canvas.set_image_source("maps/it's here.png");
        assert!(canvas.style().ends_with("url('maps/it%27s here.png')"));
        assert_eq!(canvas.image_source(), Some("maps/it's here.png"));
    }

    #[test]
    fn to_svg_contains_children() {
        let mut canvas = MapCanvas::new(&CanvasOptions::new().size(360.0, 180.0)).unwrap();
        canvas
            .append_line(
                geo(0.0, 0.0),
                geo(10.0, 10.0),
                None,
                Attributes::new().with("stroke", "red"),
            )
            .unwrap();
        let svg = canvas.to_svg();
        assert!(svg.contains("<svg"), "{}", svg);
        assert!(svg.contains(r#"version="1.1""#), "{}", svg);
        assert!(svg.contains(r#"width="360""#), "{}", svg);
        assert!(svg.contains("<line"), "{}", svg);
        assert!(svg.contains(r#"x2="190""#), "{}", svg);
        assert!(svg.contains(r#"stroke="red""#), "{}", svg);
    }
}
