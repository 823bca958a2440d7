// Imports
use crate::ext::AabbExt;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename = "line")]
/// A line segment.
pub struct Line {
    #[serde(rename = "start")]
    /// Start coordinate.
    pub start: na::Vector2<f64>,
    #[serde(rename = "end")]
    /// End coordinate.
    pub end: na::Vector2<f64>,
}

impl Line {
    /// A new line.
    pub fn new(start: na::Vector2<f64>, end: na::Vector2<f64>) -> Self {
        Self { start, end }
    }

    /// The bounds of the line.
    pub fn bounds(&self) -> Aabb {
        AabbExt::new_positive(self.start.into(), self.end.into())
    }

    /// The euclidean distance from the given point to the closest point on the
    /// (bounded) segment.
    ///
    /// A zero-length segment degenerates to the distance to its start point.
    pub fn distance_to_point(&self, point: na::Vector2<f64>) -> f64 {
        let segment = self.end - self.start;
        let norm_sq = segment.norm_squared();

        let t = if norm_sq == 0.0 {
            0.0
        } else {
            ((point - self.start).dot(&segment) / norm_sq).clamp(0.0, 1.0)
        };

        (point - (self.start + segment * t)).norm()
    }
}
