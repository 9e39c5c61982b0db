//! `<animate>` element generation.
//!
//! An [`AnimationFactory`] carries a clock that starts at the owning
//! canvas' document time, so animations created without an explicit
//! `begin` start just before "now" on the document timeline.

use std::fmt;
use std::time::{Duration, Instant};

use crate::canvas::SvgElement;
use crate::errors::AnimationError;
use crate::shapes::Attributes;

/// Value of the `restart` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Restart {
    Always,
    WhenNotActive,
    Never,
}

impl fmt::Display for Restart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Restart::Always => "always",
            Restart::WhenNotActive => "whenNotActive",
            Restart::Never => "never",
        })
    }
}

/// Value of the `calcMode` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcMode {
    Discrete,
    Linear,
    Paced,
    Spline,
}

impl fmt::Display for CalcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CalcMode::Discrete => "discrete",
            CalcMode::Linear => "linear",
            CalcMode::Paced => "paced",
            CalcMode::Spline => "spline",
        })
    }
}

/// Value of the `repeatCount` attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RepeatCount {
    Times(f64),
    Indefinite,
}

impl fmt::Display for RepeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatCount::Times(n) => write!(f, "{}", n),
            RepeatCount::Indefinite => f.write_str("indefinite"),
        }
    }
}

/// Cubic Bézier control points `x1 y1 x2 y2` for one `keySplines` interval.
pub type KeySpline = [f64; 4];

/// Options of one `<animate>` element. Times are in seconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationOptions {
    pub attribute_name: String,
    /// Defaults to the factory clock when absent.
    pub begin: Option<f64>,
    pub end: Option<f64>,
    pub dur: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub restart: Option<Restart>,
    pub repeat_count: Option<RepeatCount>,
    pub repeat_dur: Option<f64>,
    pub calc_mode: Option<CalcMode>,
    pub values: Option<Vec<f64>>,
    pub key_times: Option<Vec<f64>>,
    pub key_splines: Option<Vec<KeySpline>>,
    /// One spline used for every `key_times` interval; overrides
    /// `key_splines`.
    pub repeating_key_splines: Option<KeySpline>,
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub by: Option<f64>,
}

impl AnimationOptions {
    pub fn new(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            ..Self::default()
        }
    }

    /// Attribute set of the `<animate>` element, `begin` falling back to
    /// `elapsed` on the document clock.
    pub fn attributes(&self, elapsed: Duration) -> Result<Attributes, AnimationError> {
        let key_splines = match (&self.repeating_key_splines, &self.key_times) {
            (Some(_), None) => return Err(AnimationError::SplinesWithoutKeyTimes),
            (Some(spline), Some(times)) => {
                let intervals = times.len().saturating_sub(1);
                Some(vec![join_spline(spline); intervals].join(";"))
            }
            (None, _) => self
                .key_splines
                .as_ref()
                .map(|splines| splines.iter().map(join_spline).collect::<Vec<_>>().join(";")),
        };

        let begin = self.begin.unwrap_or_else(|| default_begin(elapsed));

        Ok(Attributes::new()
            .with("attributeName", self.attribute_name.as_str())
            .with("begin", seconds(begin))
            .with_opt("end", self.end.map(seconds))
            .with_opt("dur", self.dur.map(seconds))
            .with_opt("min", self.min.map(seconds))
            .with_opt("max", self.max.map(seconds))
            .with_opt("restart", self.restart.map(|r| r.to_string()))
            .with_opt("repeatCount", self.repeat_count.map(|r| r.to_string()))
            .with_opt("repeatDur", self.repeat_dur.map(seconds))
            .with_opt("calcMode", self.calc_mode.map(|m| m.to_string()))
            .with_opt("values", self.values.as_deref().map(join_values))
            .with_opt("keyTimes", self.key_times.as_deref().map(join_values))
            .with_opt("keySplines", key_splines.filter(|s| !s.is_empty()))
            .with_opt("from", self.from)
            .with_opt("to", self.to)
            .with_opt("by", self.by))
    }
}

/// Tenths of a second elapsed, minus a 0.2 s lead so the animation is
/// already running when the element is attached.
fn default_begin(elapsed: Duration) -> f64 {
    let tenths = (elapsed.as_millis() / 100) as f64;
    (tenths - 2.0) / 10.0
}

fn seconds(value: f64) -> String {
    format!("{}s", value)
}

fn join_values(values: &[f64]) -> String {
    values.iter().map(f64::to_string).collect::<Vec<_>>().join(";")
}

fn join_spline(spline: &KeySpline) -> String {
    spline.map(|n| n.to_string()).join(" ")
}

/// Creates `<animate>` elements against a clock.
#[derive(Clone, Copy, Debug)]
pub struct AnimationFactory {
    started: Instant,
}

impl AnimationFactory {
    /// A factory whose clock reads `document_time` right now.
    pub fn new(document_time: Duration) -> Self {
        let now = Instant::now();
        Self {
            started: now.checked_sub(document_time).unwrap_or(now),
        }
    }

    /// Time elapsed on the document clock.
    pub fn current_time(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn create(&self, options: &AnimationOptions) -> Result<SvgElement, AnimationError> {
        let attributes = options.attributes(self.current_time())?;
        Ok(SvgElement::new("animate").with_attributes(attributes))
    }

    /// Grow `line` from its start point: `x2` animates from `x1` and `y2`
    /// from `y1` over `duration` seconds.
    pub fn animate_line(&self, line: &mut SvgElement, duration: f64) -> Result<(), AnimationError> {
        let attrs = line.attributes();
        let coord = |attribute: &'static str| {
            attrs.number(attribute).ok_or_else(|| AnimationError::MissingAttribute {
                element: line.name().to_string(),
                attribute,
            })
        };
        let (x1, y1, x2, y2) = (coord("x1")?, coord("y1")?, coord("x2")?, coord("y2")?);

        let grow_x = AnimationOptions {
            from: Some(x1),
            to: Some(x2),
            dur: Some(duration),
            ..AnimationOptions::new("x2")
        };
        let grow_y = AnimationOptions {
            from: Some(y1),
            to: Some(y2),
            dur: Some(duration),
            ..AnimationOptions::new("y2")
        };
        let animations = [self.create(&grow_x)?, self.create(&grow_y)?];
        for animation in animations {
            line.push_child(animation);
        }
        Ok(())
    }
}
