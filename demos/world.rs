//! Plot a few cities on a world map and print the SVG.
//!
//! Run with `RUST_LOG=debug cargo run --example world --features tracing`
//! to see what the canvas is doing.

use geosvg::{
    ArcFlags, Attributes, CanvasOptions, GeoCoordinate, MapCanvas, PathBuilder, TextOptions,
    Viewport,
};

const CITIES: &[(&str, f64, f64)] = &[
    ("Berlin", 52.52, 13.405),
    ("New York", 40.7128, -74.006),
    ("Sydney", -33.8688, 151.2093),
    ("Nairobi", -1.2921, 36.8219),
    ("Lima", -12.0464, -77.0428),
];

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut canvas = MapCanvas::new(
        &CanvasOptions::defaults()
            .image_source("https://upload.wikimedia.org/wikipedia/commons/8/83/Equirectangular_projection_SW.jpg")
            .start(512.0, 128.0),
    )?;

    canvas.add_event_listener_named("afterappendshape", |shape| {
        tracing::info!(element = shape.name(), "appended");
    })?;

    // graticule every 30 degrees
    let mut grid = PathBuilder::with_separator(" ");
    for lon in (-180..=180).step_by(30) {
        let top = canvas
            .coordinate_system()
            .map_geo_to_view(GeoCoordinate::new(90.0, f64::from(lon)))?;
        grid = grid.move_to(top.x, top.y).vertical_line_to(canvas.height());
    }
    for lat in (-90..=90).step_by(30) {
        let left = canvas
            .coordinate_system()
            .map_geo_to_view(GeoCoordinate::new(f64::from(lat), -180.0))?;
        grid = grid.move_to(left.x, left.y).horizontal_line_to(canvas.width());
    }
    canvas.append_path(
        &grid,
        Attributes::new()
            .with("stroke", "#8888")
            .with("fill", "none"),
    )?;

    for &(name, latitude, longitude) in CITIES {
        let at = GeoCoordinate::new(latitude, longitude);
        canvas.append_circle(at, 6.0, None, Attributes::new().with("fill", "crimson"))?;
        canvas.append_text(
            at,
            name,
            TextOptions::default(),
            Attributes::new()
                .with("dx", 8)
                .with("font-family", "sans-serif")
                .with("font-size", 14),
        )?;
    }

    // a little compass rose in view coordinates
    let rose = PathBuilder::new()
        .move_to(60.0, 40.0)
        .arc_to(60.0, 80.0, 20.0, 20.0, ArcFlags::default())
        .arc_to(60.0, 40.0, 20.0, 20.0, ArcFlags::default())
        .close_path();
    canvas.append_path(&rose, Attributes::new().with("stroke", "black").with("fill", "white"))?;

    canvas.render_to(Viewport::new(1024.0, 512.0));
    let scroll = canvas.center(GeoCoordinate::new(52.52, 13.405))?;
    tracing::info!(%scroll, "centered on Berlin");

    println!("{}", canvas.to_svg());
    Ok(())
}
