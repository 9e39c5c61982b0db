//! Default option values

pub const LATITUDE_BEGIN: f64 = 90.0;
pub const LATITUDE_END: f64 = -90.0;
pub const LONGITUDE_BEGIN: f64 = -180.0;
pub const LONGITUDE_END: f64 = 180.0;
pub const COORD_DEGREE_PRECISION: u32 = 1_000_000;
pub const VIEW_WIDTH: f64 = 1.0;
pub const VIEW_HEIGHT: f64 = 1.0;

pub const CANVAS_WIDTH: f64 = 2048.0;
pub const CANVAS_HEIGHT: f64 = 1024.0;
pub const SVG_VERSION: &str = "1.1";

/// WGS84 equatorial radius, used as the sphere radius for all distance math.
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

pub const PATH_COMMAND_SEPARATOR: &str = "\n";
