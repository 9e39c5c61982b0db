//! Coordinate system options and the validated configuration they merge into.

use crate::defaults;
use crate::errors::ConfigError;

/// A partial set of coordinate options.
///
/// Every field is optional; `None` keeps whatever the coordinate system is
/// currently using. Build one with the setter methods:
///
/// ```
/// use geosvg::CoordinateOptions;
///
/// let options = CoordinateOptions::new()
///     .view_size(1200.0, 600.0)
///     .latitudes(60.0, 30.0);
/// assert_eq!(options.view_width, Some(1200.0));
/// assert_eq!(options.longitude_begin, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoordinateOptions {
    pub latitude_begin: Option<f64>,
    pub latitude_end: Option<f64>,
    pub longitude_begin: Option<f64>,
    pub longitude_end: Option<f64>,
    pub coord_degree_precision: Option<u32>,
    pub view_width: Option<f64>,
    pub view_height: Option<f64>,
}

impl CoordinateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latitude_begin(mut self, value: f64) -> Self {
        self.latitude_begin = Some(value);
        self
    }

    pub fn latitude_end(mut self, value: f64) -> Self {
        self.latitude_end = Some(value);
        self
    }

    pub fn longitude_begin(mut self, value: f64) -> Self {
        self.longitude_begin = Some(value);
        self
    }

    pub fn longitude_end(mut self, value: f64) -> Self {
        self.longitude_end = Some(value);
        self
    }

    pub fn coord_degree_precision(mut self, value: u32) -> Self {
        self.coord_degree_precision = Some(value);
        self
    }

    pub fn view_width(mut self, value: f64) -> Self {
        self.view_width = Some(value);
        self
    }

    pub fn view_height(mut self, value: f64) -> Self {
        self.view_height = Some(value);
        self
    }

    /// Set the north (`begin`) and south (`end`) edges.
    pub fn latitudes(self, begin: f64, end: f64) -> Self {
        self.latitude_begin(begin).latitude_end(end)
    }

    /// Set the west (`begin`) and east (`end`) edges.
    pub fn longitudes(self, begin: f64, end: f64) -> Self {
        self.longitude_begin(begin).longitude_end(end)
    }

    pub fn view_size(self, width: f64, height: f64) -> Self {
        self.view_width(width).view_height(height)
    }

    /// True when no option is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<Configuration> for CoordinateOptions {
    fn from(c: Configuration) -> Self {
        Self {
            latitude_begin: Some(c.latitude_begin),
            latitude_end: Some(c.latitude_end),
            longitude_begin: Some(c.longitude_begin),
            longitude_end: Some(c.longitude_end),
            coord_degree_precision: Some(c.coord_degree_precision),
            view_width: Some(c.view_width),
            view_height: Some(c.view_height),
        }
    }
}

/// A complete set of coordinate options.
///
/// A [`CoordinateSystem`](super::CoordinateSystem) only ever holds a
/// configuration that passed [`Configuration::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Configuration {
    pub latitude_begin: f64,
    pub latitude_end: f64,
    pub longitude_begin: f64,
    pub longitude_end: f64,
    pub coord_degree_precision: u32,
    pub view_width: f64,
    pub view_height: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Configuration {
    pub const DEFAULT: Configuration = Configuration {
        latitude_begin: defaults::LATITUDE_BEGIN,
        latitude_end: defaults::LATITUDE_END,
        longitude_begin: defaults::LONGITUDE_BEGIN,
        longitude_end: defaults::LONGITUDE_END,
        coord_degree_precision: defaults::COORD_DEGREE_PRECISION,
        view_width: defaults::VIEW_WIDTH,
        view_height: defaults::VIEW_HEIGHT,
    };

    /// Overlay `options` on this configuration. The result is not validated.
    pub fn merged(&self, options: &CoordinateOptions) -> Configuration {
        Configuration {
            latitude_begin: options.latitude_begin.unwrap_or(self.latitude_begin),
            latitude_end: options.latitude_end.unwrap_or(self.latitude_end),
            longitude_begin: options.longitude_begin.unwrap_or(self.longitude_begin),
            longitude_end: options.longitude_end.unwrap_or(self.longitude_end),
            coord_degree_precision: options
                .coord_degree_precision
                .unwrap_or(self.coord_degree_precision),
            view_width: options.view_width.unwrap_or(self.view_width),
            view_height: options.view_height.unwrap_or(self.view_height),
        }
    }

    /// Check every range and ordering rule, reporting the first violation.
    ///
    /// NaN never satisfies a range check, so non-finite bounds are rejected
    /// here as well.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_latitude("latitudeBegin", self.latitude_begin)?;
        check_latitude("latitudeEnd", self.latitude_end)?;
        check_longitude("longitudeBegin", self.longitude_begin)?;
        check_longitude("longitudeEnd", self.longitude_end)?;

        if !(self.latitude_begin > self.latitude_end) {
            return Err(ConfigError::LatitudeRange {
                begin: self.latitude_begin,
                end: self.latitude_end,
            });
        }
        if !(self.longitude_begin < self.longitude_end) {
            return Err(ConfigError::LongitudeRange {
                begin: self.longitude_begin,
                end: self.longitude_end,
            });
        }
        if !(self.view_width > 0.0) || self.view_width.is_infinite() {
            return Err(ConfigError::ViewWidth(self.view_width));
        }
        if !(self.view_height > 0.0) || self.view_height.is_infinite() {
            return Err(ConfigError::ViewHeight(self.view_height));
        }
        if self.coord_degree_precision == 0 {
            return Err(ConfigError::Precision);
        }
        Ok(())
    }
}

fn check_latitude(option: &'static str, value: f64) -> Result<(), ConfigError> {
    if (-90.0..=90.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::LatitudeOutOfRange { option, value })
    }
}

fn check_longitude(option: &'static str, value: f64) -> Result<(), ConfigError> {
    if (-180.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::LongitudeOutOfRange { option, value })
    }
}
