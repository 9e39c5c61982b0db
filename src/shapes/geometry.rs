//! Positional attribute rules, one per family of shape kinds.
//!
//! Each rule knows how many anchors it consumes and which view-space
//! attributes it derives from them. [`Geometry`] dispatches to the rules
//! statically through `enum_dispatch`.

use std::fmt;

use enum_dispatch::enum_dispatch;

use super::attrs::Attributes;
use crate::types::ViewCoordinate;

/// How many anchors a shape kind takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorCount {
    Exactly(usize),
    AtLeast(usize),
}

impl AnchorCount {
    pub fn accepts(self, n: usize) -> bool {
        match self {
            AnchorCount::Exactly(k) => n == k,
            AnchorCount::AtLeast(k) => n >= k,
        }
    }
}

impl fmt::Display for AnchorCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorCount::Exactly(k) => write!(f, "exactly {}", k),
            AnchorCount::AtLeast(k) => write!(f, "at least {}", k),
        }
    }
}

/// Derives positional attributes from projected anchors.
#[enum_dispatch]
pub(crate) trait PositionalGeometry {
    fn anchor_count(&self) -> AnchorCount;

    /// `points` always satisfies [`anchor_count`](Self::anchor_count).
    fn positional_attributes(&self, points: &[ViewCoordinate]) -> Attributes;
}

/// `x1,y1` and `x2,y2` from two anchors (line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Endpoints;

impl PositionalGeometry for Endpoints {
    fn anchor_count(&self) -> AnchorCount {
        AnchorCount::Exactly(2)
    }

    fn positional_attributes(&self, points: &[ViewCoordinate]) -> Attributes {
        let (start, end) = (points[0], points[1]);
        Attributes::new()
            .with("x1", start.x)
            .with("y1", start.y)
            .with("x2", end.x)
            .with("y2", end.y)
    }
}

/// `cx,cy` from one anchor (circle, ellipse).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Center;

impl PositionalGeometry for Center {
    fn anchor_count(&self) -> AnchorCount {
        AnchorCount::Exactly(1)
    }

    fn positional_attributes(&self, points: &[ViewCoordinate]) -> Attributes {
        Attributes::new().with("cx", points[0].x).with("cy", points[0].y)
    }
}

/// `x,y` from one anchor (rect, text, image, foreignObject).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Origin;

impl PositionalGeometry for Origin {
    fn anchor_count(&self) -> AnchorCount {
        AnchorCount::Exactly(1)
    }

    fn positional_attributes(&self, points: &[ViewCoordinate]) -> Attributes {
        Attributes::new().with("x", points[0].x).with("y", points[0].y)
    }
}

/// `points` as space separated `x,y` pairs (polygon, polyline).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PointList;

impl PositionalGeometry for PointList {
    fn anchor_count(&self) -> AnchorCount {
        AnchorCount::AtLeast(1)
    }

    fn positional_attributes(&self, points: &[ViewCoordinate]) -> Attributes {
        let joined = points
            .iter()
            .map(ViewCoordinate::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Attributes::new().with("points", joined)
    }
}

#[enum_dispatch(PositionalGeometry)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Geometry {
    Endpoints(Endpoints),
    Center(Center),
    Origin(Origin),
    PointList(PointList),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<ViewCoordinate> {
        coords.iter().map(|&(x, y)| ViewCoordinate::new(x, y)).collect()
    }

    #[test]
    fn anchor_count_acceptance() {
        assert!(AnchorCount::Exactly(2).accepts(2));
        assert!(!AnchorCount::Exactly(2).accepts(3));
        assert!(AnchorCount::AtLeast(1).accepts(5));
        assert!(!AnchorCount::AtLeast(1).accepts(0));
        assert_eq!(AnchorCount::Exactly(2).to_string(), "exactly 2");
        assert_eq!(AnchorCount::AtLeast(1).to_string(), "at least 1");
    }

    #[test]
    fn endpoints_from_two_anchors() {
        let attrs =
            Geometry::from(Endpoints).positional_attributes(&pts(&[(1.0, 2.0), (3.0, 4.0)]));
        insta::assert_snapshot!(attrs, @r#"x1="1" x2="3" y1="2" y2="4""#);
    }

    #[test]
    fn center_and_origin() {
        let p = pts(&[(10.0, 20.0)]);
        assert_eq!(Geometry::from(Center).positional_attributes(&p).number("cx"), Some(10.0));
        assert_eq!(Geometry::from(Origin).positional_attributes(&p).number("y"), Some(20.0));
    }

    #[test]
    fn point_list_keeps_input_order() {
        let points = pts(&[(5.0, 5.0), (0.0, 10.0), (10.0, 0.0)]);
        let attrs = Geometry::from(PointList).positional_attributes(&points);
        insta::assert_snapshot!(attrs, @r#"points="5,5 0,10 10,0""#);
    }

    #[test]
    fn dispatch_reports_anchor_counts() {
        assert_eq!(Geometry::from(Endpoints).anchor_count(), AnchorCount::Exactly(2));
        assert_eq!(Geometry::from(PointList).anchor_count(), AnchorCount::AtLeast(1));
    }
}
