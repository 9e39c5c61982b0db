//! Draw an animated flight route and report its length.

use geosvg::{
    AnimationOptions, Attributes, CanvasOptions, CoordinateOptions, GeoCoordinate, MapCanvas,
    Meters, RepeatCount, center_of, geo_distance, offset_by_meters,
};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let berlin = GeoCoordinate::new(52.52, 13.405);
    let new_york = GeoCoordinate::new(40.7128, -74.006);

    // North Atlantic only
    let mut canvas = MapCanvas::new(
        &CanvasOptions::new()
            .size(1200.0, 600.0)
            .coordinates(CoordinateOptions::new().latitudes(70.0, 20.0).longitudes(-90.0, 30.0)),
    )?;

    let distance = geo_distance(berlin, new_york);
    tracing::info!(km = distance.raw() / 1000.0, "Berlin to New York");

    let route = canvas.append_line(
        berlin,
        new_york,
        None,
        Attributes::new()
            .with("stroke", "navy")
            .with("stroke-width", 2),
    )?;
    let animations = canvas.create_animation_factory();
    if let Some(line) = canvas.shape_mut(route) {
        animations.animate_line(line, 5.0)?;
    }

    // Pulse a marker over the midpoint.
    let midpoint = center_of(berlin, new_york);
    let marker =
        canvas.append_circle(midpoint, 4.0, None, Attributes::new().with("fill", "orange"))?;
    let pulse = animations.create(&AnimationOptions {
        values: Some(vec![4.0, 10.0, 4.0]),
        dur: Some(2.0),
        repeat_count: Some(RepeatCount::Indefinite),
        ..AnimationOptions::new("r")
    })?;
    if let Some(circle) = canvas.shape_mut(marker) {
        circle.push_child(pulse);
    }

    // A 200 km wide box around Berlin.
    let half = Meters(100_000.0);
    let north_west = offset_by_meters(berlin, -half, half);
    let south_east = offset_by_meters(berlin, half, -half);
    let nw = canvas.coordinate_system().map_geo_to_view(north_west)?;
    let se = canvas.coordinate_system().map_geo_to_view(south_east)?;
    canvas.append_rect(
        north_west,
        se.x - nw.x,
        se.y - nw.y,
        Default::default(),
        Attributes::new().with("fill", "none").with("stroke", "gray"),
    )?;

    println!("{}", canvas.to_svg());
    Ok(())
}
