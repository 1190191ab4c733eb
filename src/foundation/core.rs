use crate::foundation::error::{ArboraError, ArboraResult};

pub use kurbo::{Point, Vec2};

/// Identifier of a node in a [`crate::Tree`] arena (index into the node table).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

/// Identifier of an edge in a [`crate::Tree`] arena (index into the edge table).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EdgeId(pub u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Polar placement of a node: angle in degrees, radius from the layout center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PolarPos {
    /// Angle in degrees, measured from the positive x axis.
    pub angle_deg: f64,
    /// Distance from the fixed layout center.
    pub radius: f64,
}

impl PolarPos {
    /// Polar placement of the layout origin itself.
    pub const ORIGIN: Self = Self {
        angle_deg: 0.0,
        radius: 0.0,
    };

    /// Convert to a Cartesian point around the fixed center at the origin.
    pub fn to_point(self) -> Point {
        let rad = self.angle_deg.to_radians();
        Point::new(self.radius * rad.cos(), self.radius * rad.sin())
    }
}

/// Half-open time interval in seconds: `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeWindow {
    /// Start of the window in seconds.
    pub start: f64,
    /// End of the window in seconds (exclusive).
    pub end: f64,
}

impl TimeWindow {
    /// Build a window, rejecting `start > end` and non-finite bounds.
    pub fn new(start: f64, end: f64) -> ArboraResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ArboraError::validation("TimeWindow bounds must be finite"));
        }
        if start > end {
            return Err(ArboraError::validation("TimeWindow start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Window length in seconds.
    pub fn len_secs(self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Whether the window has zero length.
    pub fn is_empty(self) -> bool {
        self.end <= self.start
    }

    /// Whether `t` falls inside the half-open interval.
    pub fn contains(self, t: f64) -> bool {
        self.start <= t && t < self.end
    }

    /// Project the window into percent-of-total space given a positive `max_time`.
    ///
    /// Both bounds map to `v / max_time * 100`; with every window inside
    /// `[0, max_time]` the result lies in `[0, 100]`.
    pub fn to_percent(self, max_time: f64) -> PercentWindow {
        debug_assert!(max_time > 0.0);
        PercentWindow {
            start: self.start / max_time * 100.0,
            end: self.end / max_time * 100.0,
        }
    }
}

/// A [`TimeWindow`] normalized to percent of the scene's total duration.
///
/// This is the unit consumed by scene sinks: the host drives one master
/// progress parameter from 0 to 100 over `max_time` seconds and evaluates
/// each object's visibility against its percent window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PercentWindow {
    /// Start as a percentage of total scene duration.
    pub start: f64,
    /// End as a percentage of total scene duration.
    pub end: f64,
}
