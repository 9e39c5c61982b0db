//! End-to-end checks of the mapping and shape properties through the public API.

use geosvg::{
    Attributes, ConfigError, CoordinateOptions, CoordinateSystem, GeoCoordinate, Meters, RangeError,
    ShapeError, ShapeKind, ShapeMapper, ViewCoordinate, geo_distance, view_distance,
};

fn system(options: CoordinateOptions) -> CoordinateSystem {
    CoordinateSystem::with_options(&options).unwrap()
}

#[test]
fn center_of_world_view() {
    let cs = system(CoordinateOptions::new().view_size(1000.0, 500.0));
    let center = cs.map_view_to_geo(ViewCoordinate::new(500.0, 250.0)).unwrap();
    assert_eq!(center, GeoCoordinate::new(0.0, 0.0));
}

#[test]
fn view_corners_map_to_configured_bounds() {
    let cs = system(
        CoordinateOptions::new()
            .view_size(800.0, 600.0)
            .latitudes(55.1, 47.2)
            .longitudes(5.8, 15.1),
    );
    assert_eq!(cs.map_view_to_geo(ViewCoordinate::ZERO).unwrap(), GeoCoordinate::new(55.1, 5.8));
    assert_eq!(
        cs.map_view_to_geo(ViewCoordinate::new(800.0, 600.0)).unwrap(),
        GeoCoordinate::new(47.2, 15.1)
    );
}

#[test]
fn configuration_is_atomic() {
    let mut cs = system(CoordinateOptions::new().view_size(1200.0, 600.0));
    let probe = GeoCoordinate::new(20.0, 20.0);
    let before = cs.map_geo_to_view(probe).unwrap();

    let err = cs
        .configure(&CoordinateOptions::new().latitude_begin(95.0))
        .unwrap_err();
    assert_eq!(err, ConfigError::LatitudeOutOfRange { option: "latitudeBegin", value: 95.0 });
    assert_eq!(cs.map_geo_to_view(probe).unwrap(), before);

    let err = cs
        .configure(&CoordinateOptions::new().view_width(0.0).latitudes(10.0, 0.0))
        .unwrap_err();
    assert_eq!(err, ConfigError::ViewWidth(0.0));
    assert_eq!(cs.map_geo_to_view(probe).unwrap(), before);
}

#[test]
fn out_of_range_inputs() {
    let cs = system(CoordinateOptions::new().view_size(100.0, 100.0));
    assert_eq!(
        cs.map_view_to_geo(ViewCoordinate::new(-1.0, 0.0)),
        Err(RangeError::ViewX { x: -1.0, width: 100.0 })
    );
    assert_eq!(
        cs.map_geo_to_view(GeoCoordinate::new(999.0, 0.0)),
        Err(RangeError::Latitude { latitude: 999.0, begin: 90.0, end: -90.0 })
    );
}

#[test]
fn error_messages_name_value_and_range() {
    let cs = system(CoordinateOptions::new().view_size(100.0, 100.0));
    let err = cs.map_view_to_geo(ViewCoordinate::new(-1.0, 0.0)).unwrap_err();
    assert_eq!(err.to_string(), "X -1 out of range 0-100");
    let err = cs.map_geo_to_view(GeoCoordinate::new(0.0, 181.0)).unwrap_err();
    assert_eq!(err.to_string(), "longitude 181 out of range -180-180");
}

#[test]
fn distances() {
    let a = GeoCoordinate::new(48.8566, 2.3522);
    let b = GeoCoordinate::new(51.5074, -0.1278);
    assert_eq!(geo_distance(a, b), geo_distance(b, a));
    assert_eq!(geo_distance(a, a), Meters::ZERO);
    // Paris to London, roughly 344 km
    let d = geo_distance(a, b).raw();
    assert!((340_000.0..350_000.0).contains(&d), "{}", d);

    assert_eq!(view_distance(ViewCoordinate::new(0.0, 0.0), ViewCoordinate::new(3.0, 4.0)), 5.0);
}

#[test]
fn circle_derivation() {
    let cs = system(CoordinateOptions::new().view_size(1200.0, 600.0));
    let circle = ShapeMapper::new(&cs)
        .create_shape_named(
            "circle",
            Attributes::new().with("r", 10),
            &[GeoCoordinate::new(20.0, 20.0)],
        )
        .unwrap();
    assert_eq!(circle.kind, ShapeKind::Circle);
    assert_eq!(circle.attributes.number("r"), Some(10.0));
    assert_eq!(circle.attributes.number("cx"), Some(667.0));
    assert_eq!(circle.attributes.number("cy"), Some(233.0));
}

#[test]
fn unsupported_shape() {
    let cs = CoordinateSystem::new();
    let err = ShapeMapper::new(&cs)
        .create_shape_named("triangle", Attributes::new(), &[GeoCoordinate::new(0.0, 0.0)])
        .unwrap_err();
    assert_eq!(err, ShapeError::Unsupported { name: "triangle".into() });
}

#[test]
fn every_kind_maps_with_its_minimum_anchor_count() {
    let cs = system(CoordinateOptions::new().view_size(360.0, 180.0));
    let mapper = ShapeMapper::new(&cs);
    let anchor = GeoCoordinate::new(0.0, 0.0);
    for kind in ShapeKind::ALL {
        let anchors = match kind {
            ShapeKind::Line => vec![anchor, anchor],
            _ => vec![anchor],
        };
        let shape = mapper.create_shape(kind, Attributes::new(), &anchors).unwrap();
        assert_eq!(shape.kind, kind);
        assert!(!shape.attributes.is_empty(), "{}", kind);
    }
}
