//! Builder for SVG path data (`d` attribute) in view coordinates.

use std::fmt;

use crate::defaults::PATH_COMMAND_SEPARATOR;

/// One path command, absolute coordinates only.
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    HorizontalLineTo { x: f64 },
    VerticalLineTo { y: f64 },
    CurveTo { cx1: f64, cy1: f64, cx2: f64, cy2: f64, x: f64, y: f64 },
    SmoothCurveTo { cx: f64, cy: f64, x: f64, y: f64 },
    QuadraticCurveTo { cx: f64, cy: f64, x: f64, y: f64 },
    SmoothQuadraticCurveTo { x: f64, y: f64 },
    ArcTo { rx: f64, ry: f64, angle: f64, large_arc: bool, sweep: bool, x: f64, y: f64 },
    ClosePath,
    /// Taken verbatim from a parsed path string.
    Raw(String),
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo { x, y } => write!(f, "M {},{}", x, y),
            PathCommand::LineTo { x, y } => write!(f, "L {},{}", x, y),
            PathCommand::HorizontalLineTo { x } => write!(f, "H {}", x),
            PathCommand::VerticalLineTo { y } => write!(f, "V {}", y),
            PathCommand::CurveTo { cx1, cy1, cx2, cy2, x, y } => {
                write!(f, "C {},{} {},{} {},{}", cx1, cy1, cx2, cy2, x, y)
            }
            PathCommand::SmoothCurveTo { cx, cy, x, y } => write!(f, "S {},{} {},{}", cx, cy, x, y),
            PathCommand::QuadraticCurveTo { cx, cy, x, y } => {
                write!(f, "Q {},{} {},{}", cx, cy, x, y)
            }
            PathCommand::SmoothQuadraticCurveTo { x, y } => write!(f, "T {},{}", x, y),
            PathCommand::ArcTo { rx, ry, angle, large_arc, sweep, x, y } => write!(
                f,
                "A {} {} {} {} {} {},{}",
                rx,
                ry,
                angle,
                u8::from(*large_arc),
                u8::from(*sweep),
                x,
                y
            ),
            PathCommand::ClosePath => f.write_str("Z"),
            PathCommand::Raw(s) => f.write_str(s),
        }
    }
}

/// Accumulates path commands and joins them with a separator.
///
/// ```
/// use geosvg::PathBuilder;
///
/// let path = PathBuilder::new().move_to(0.0, 0.0).line_to(10.0, 5.0).close_path();
/// assert_eq!(path.to_string(), "M 0,0\nL 10,5\nZ");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    separator: String,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::with_separator(PATH_COMMAND_SEPARATOR)
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            commands: Vec::new(),
            separator: separator.into(),
        }
    }

    /// Split an existing path on `separator`. Pieces are kept verbatim.
    pub fn parse(path: &str, separator: impl Into<String>) -> Self {
        let mut builder = Self::with_separator(separator);
        builder.commands = path
            .split(builder.separator.as_str())
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(|piece| PathCommand::Raw(piece.to_string()))
            .collect();
        builder
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn move_to(self, x: f64, y: f64) -> Self {
        self.then(PathCommand::MoveTo { x, y })
    }

    pub fn line_to(self, x: f64, y: f64) -> Self {
        self.then(PathCommand::LineTo { x, y })
    }

    pub fn horizontal_line_to(self, x: f64) -> Self {
        self.then(PathCommand::HorizontalLineTo { x })
    }

    pub fn vertical_line_to(self, y: f64) -> Self {
        self.then(PathCommand::VerticalLineTo { y })
    }

    /// Cubic Bézier to `(x, y)` with control points `(cx1, cy1)` and `(cx2, cy2)`.
    pub fn curve_to(self, x: f64, y: f64, cx1: f64, cy1: f64, cx2: f64, cy2: f64) -> Self {
        self.then(PathCommand::CurveTo { cx1, cy1, cx2, cy2, x, y })
    }

    pub fn smooth_curve_to(self, x: f64, y: f64, cx: f64, cy: f64) -> Self {
        self.then(PathCommand::SmoothCurveTo { cx, cy, x, y })
    }

    pub fn quadratic_curve_to(self, x: f64, y: f64, cx: f64, cy: f64) -> Self {
        self.then(PathCommand::QuadraticCurveTo { cx, cy, x, y })
    }

    /// The control point is reflected from the previous command.
    pub fn smooth_quadratic_curve_to(self, x: f64, y: f64) -> Self {
        self.then(PathCommand::SmoothQuadraticCurveTo { x, y })
    }

    pub fn arc_to(self, x: f64, y: f64, rx: f64, ry: f64, arc: ArcFlags) -> Self {
        self.then(PathCommand::ArcTo {
            rx,
            ry,
            angle: arc.angle,
            large_arc: arc.large_arc,
            sweep: arc.sweep,
            x,
            y,
        })
    }

    pub fn close_path(self) -> Self {
        self.then(PathCommand::ClosePath)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Append all commands of `other`, keeping this builder's separator.
    pub fn append(&mut self, other: &PathBuilder) {
        self.commands.extend(other.commands.iter().cloned());
    }

    fn then(mut self, command: PathCommand) -> Self {
        self.commands.push(command);
        self
    }
}

/// Rotation and flags of an elliptical arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcFlags {
    /// x-axis rotation in degrees
    pub angle: f64,
    pub large_arc: bool,
    /// clockwise
    pub sweep: bool,
}

impl Default for ArcFlags {
    fn default() -> Self {
        Self {
            angle: 0.0,
            large_arc: false,
            sweep: true,
        }
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.separator)?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command() {
        let path = PathBuilder::with_separator(" ")
            .move_to(1.0, 2.0)
            .line_to(3.0, 4.0)
            .horizontal_line_to(5.0)
            .vertical_line_to(6.0)
            .curve_to(7.0, 8.0, 1.0, 1.0, 2.0, 2.0)
            .smooth_curve_to(9.0, 9.5, 3.0, 3.0)
            .quadratic_curve_to(10.0, 10.0, 4.0, 4.0)
            .smooth_quadratic_curve_to(11.0, 11.0)
            .close_path();
        insta::assert_snapshot!(
            path,
            @"M 1,2 L 3,4 H 5 V 6 C 1,1 2,2 7,8 S 3,3 9,9.5 Q 4,4 10,10 T 11,11 Z"
        );
    }

    #[test]
    fn arc_flags() {
        let default = PathBuilder::new().arc_to(50.0, 25.0, 10.0, 5.0, ArcFlags::default());
        assert_eq!(default.to_string(), "A 10 5 0 0 1 50,25");

        let large = PathBuilder::new().arc_to(
            0.0,
            0.0,
            3.0,
            3.0,
            ArcFlags { angle: 45.0, large_arc: true, sweep: false },
        );
        assert_eq!(large.to_string(), "A 3 3 45 1 0 0,0");
    }

    #[test]
    fn default_separator_is_newline() {
        let path = PathBuilder::new().move_to(0.0, 0.0).line_to(1.5, -2.0);
        assert_eq!(path.to_string(), "M 0,0\nL 1.5,-2");
        assert_eq!(path.separator(), "\n");
    }

    #[test]
    fn parse_then_extend() {
        let mut path = PathBuilder::parse("M 0,0;L 10,10;", ";");
        assert_eq!(path.commands().len(), 2);
        path = path.close_path();
        assert_eq!(path.to_string(), "M 0,0;L 10,10;Z");
    }

    #[test]
    fn append_and_clear() {
        let mut outline = PathBuilder::new().move_to(0.0, 0.0);
        let tail = PathBuilder::with_separator(",").line_to(1.0, 1.0).line_to(2.0, 0.0);

        outline.append(&tail);
        assert_eq!(outline.commands().len(), 3);
        assert_eq!(outline.to_string(), "M 0,0\nL 1,1\nL 2,0");

        outline.clear();
        assert!(outline.is_empty());
        assert_eq!(outline.to_string(), "");
    }
}
