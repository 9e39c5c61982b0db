//! Conversion between geographic and view coordinates.
//!
//! The mapping is equirectangular: latitude and longitude are interpolated
//! linearly across the view rectangle. The north-west corner
//! (`latitude_begin`, `longitude_begin`) sits at view `(0, 0)` and the
//! south-east corner (`latitude_end`, `longitude_end`) at
//! `(view_width, view_height)`.
//!
//! # Concurrency
//!
//! [`CoordinateSystem::configure`] takes `&mut self` and every mapping takes
//! `&self`, so readers can never observe a half-applied configuration. Share
//! an instance across threads behind a lock if it must be reconfigured while
//! other threads map coordinates.

mod options;
mod sphere;

pub use options::{Configuration, CoordinateOptions};
pub use sphere::{
    center_of, degrees_from_radians, geo_distance, offset_by_meters, radians_from_degrees,
    view_distance,
};

use crate::errors::{ConfigError, RangeError};
use crate::types::{GeoCoordinate, ViewCoordinate};

/// Spans and per-pixel factors derived from a [`Configuration`].
#[derive(Clone, Copy, Debug, PartialEq)]
struct Scale {
    /// Negative: latitude decreases from top to bottom.
    total_latitude: f64,
    total_longitude: f64,
    degrees_per_pixel_x: f64,
    degrees_per_pixel_y: f64,
}

impl Scale {
    fn new(config: &Configuration) -> Self {
        let total_latitude = -config.latitude_begin + config.latitude_end;
        let total_longitude = -config.longitude_begin + config.longitude_end;
        Self {
            total_latitude,
            total_longitude,
            degrees_per_pixel_x: total_longitude / config.view_width,
            degrees_per_pixel_y: total_latitude / config.view_height,
        }
    }
}

/// Owns the active [`Configuration`] and performs bounds-checked conversions.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateSystem {
    config: Configuration,
    scale: Scale,
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateSystem {
    /// A coordinate system covering the whole globe on a 1×1 view.
    pub fn new() -> Self {
        let config = Configuration::DEFAULT;
        Self {
            scale: Scale::new(&config),
            config,
        }
    }

    /// Start from the defaults and apply `options`.
    pub fn with_options(options: &CoordinateOptions) -> Result<Self, ConfigError> {
        let mut system = Self::new();
        system.configure(options)?;
        Ok(system)
    }

    /// Merge `options` over the current configuration and commit the result
    /// if it is valid.
    ///
    /// On error nothing changes: the previous configuration stays active.
    pub fn configure(&mut self, options: &CoordinateOptions) -> Result<(), ConfigError> {
        let merged = self.config.merged(options);
        merged.validate()?;
        self.scale = Scale::new(&merged);
        self.config = merged;
        Ok(())
    }

    /// The active configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// The active configuration as a fully populated option set.
    pub fn options(&self) -> CoordinateOptions {
        CoordinateOptions::from(self.config)
    }

    pub fn view_width(&self) -> f64 {
        self.config.view_width
    }

    pub fn view_height(&self) -> f64 {
        self.config.view_height
    }

    /// Convert a view coordinate to a geographic one.
    ///
    /// Both components are rounded half away from zero to
    /// `1 / coord_degree_precision` degrees.
    pub fn map_view_to_geo(&self, view: ViewCoordinate) -> Result<GeoCoordinate, RangeError> {
        self.check_view(view)?;

        let precision = f64::from(self.config.coord_degree_precision);
        let latitude = self.config.latitude_begin + self.scale.degrees_per_pixel_y * view.y;
        let longitude = self.config.longitude_begin + self.scale.degrees_per_pixel_x * view.x;

        Ok(GeoCoordinate {
            latitude: round_to(latitude, precision),
            longitude: round_to(longitude, precision),
        })
    }

    /// Convert a geographic coordinate to a view coordinate in whole pixels.
    pub fn map_geo_to_view(&self, geo: GeoCoordinate) -> Result<ViewCoordinate, RangeError> {
        self.check_geo(geo)?;

        let x = (geo.longitude - self.config.longitude_begin) / self.scale.total_longitude
            * self.config.view_width;
        let y = (geo.latitude - self.config.latitude_begin) / self.scale.total_latitude
            * self.config.view_height;

        Ok(ViewCoordinate {
            x: positive_zero(x.round()),
            y: positive_zero(y.round()),
        })
    }

    /// Scroll offset that puts `geo` in the middle of a `width`×`height`
    /// viewport.
    pub fn center_offset(
        &self,
        geo: GeoCoordinate,
        width: f64,
        height: f64,
    ) -> Result<ViewCoordinate, RangeError> {
        let view = self.map_geo_to_view(geo)?;
        Ok(view - ViewCoordinate::new((width / 2.0).round(), (height / 2.0).round()))
    }

    /// True when `geo` lies within the configured bounds (edges included).
    pub fn contains_geo(&self, geo: GeoCoordinate) -> bool {
        self.check_geo(geo).is_ok()
    }

    /// True when `view` lies within the view rectangle (edges included).
    pub fn contains_view(&self, view: ViewCoordinate) -> bool {
        self.check_view(view).is_ok()
    }

    fn check_view(&self, view: ViewCoordinate) -> Result<(), RangeError> {
        let width = self.config.view_width;
        let height = self.config.view_height;
        if !(0.0..=width).contains(&view.x) {
            return Err(RangeError::ViewX { x: view.x, width });
        }
        if !(0.0..=height).contains(&view.y) {
            return Err(RangeError::ViewY { y: view.y, height });
        }
        Ok(())
    }

    fn check_geo(&self, geo: GeoCoordinate) -> Result<(), RangeError> {
        let c = &self.config;
        if !(c.latitude_end..=c.latitude_begin).contains(&geo.latitude) {
            return Err(RangeError::Latitude {
                latitude: geo.latitude,
                begin: c.latitude_begin,
                end: c.latitude_end,
            });
        }
        if !(c.longitude_begin..=c.longitude_end).contains(&geo.longitude) {
            return Err(RangeError::Longitude {
                longitude: geo.longitude,
                begin: c.longitude_begin,
                end: c.longitude_end,
            });
        }
        Ok(())
    }
}

fn round_to(value: f64, precision: f64) -> f64 {
    positive_zero((value * precision).round() / precision)
}

/// Maps `-0.0` to `0.0` so results never print as `-0`.
fn positive_zero(value: f64) -> f64 {
    value + 0.0
}
