//! Coordinate and distance value types.
//!
//! These are plain `Copy` values created and consumed per call. Geographic
//! coordinates are in degrees unless a function says otherwise; view
//! coordinates are in pixels with the origin at the top-left corner.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::DVec2;

/// A point on the mapped region, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Both components converted from degrees to radians.
    pub fn to_radians(self) -> GeoCoordinate {
        GeoCoordinate {
            latitude: crate::coords::radians_from_degrees(self.latitude),
            longitude: crate::coords::radians_from_degrees(self.longitude),
        }
    }

    /// Both components converted from radians back to degrees.
    pub fn from_radians(radians: GeoCoordinate) -> GeoCoordinate {
        GeoCoordinate {
            latitude: crate::coords::degrees_from_radians(radians.latitude),
            longitude: crate::coords::degrees_from_radians(radians.longitude),
        }
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// A point on the rendering surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewCoordinate {
    pub x: f64,
    pub y: f64,
}

impl ViewCoordinate {
    pub const ZERO: ViewCoordinate = ViewCoordinate { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for ViewCoordinate {
    /// Formats as an SVG point pair, e.g. `667,233`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<ViewCoordinate> for DVec2 {
    fn from(v: ViewCoordinate) -> DVec2 {
        DVec2::new(v.x, v.y)
    }
}

impl From<DVec2> for ViewCoordinate {
    fn from(v: DVec2) -> ViewCoordinate {
        ViewCoordinate { x: v.x, y: v.y }
    }
}

impl Sub for ViewCoordinate {
    type Output = ViewCoordinate;
    fn sub(self, rhs: ViewCoordinate) -> ViewCoordinate {
        (DVec2::from(self) - DVec2::from(rhs)).into()
    }
}

impl Add for ViewCoordinate {
    type Output = ViewCoordinate;
    fn add(self, rhs: ViewCoordinate) -> ViewCoordinate {
        (DVec2::from(self) + DVec2::from(rhs)).into()
    }
}

/// Distance on the earth's surface in meters.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Meters(pub f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.0);

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn round(self) -> Meters {
        Meters(self.0.round())
    }

    #[inline]
    pub fn abs(self) -> Meters {
        Meters(self.0.abs())
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters { Meters(self.0 + rhs.0) }
}
impl Sub for Meters {
    type Output = Meters;
    fn sub(self, rhs: Meters) -> Meters { Meters(self.0 - rhs.0) }
}
impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters { Meters(self.0 * rhs) }
}
impl Div<f64> for Meters {
    type Output = Meters;
    fn div(self, rhs: f64) -> Meters { Meters(self.0 / rhs) }
}
impl Neg for Meters {
    type Output = Meters;
    fn neg(self) -> Meters { Meters(-self.0) }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}
