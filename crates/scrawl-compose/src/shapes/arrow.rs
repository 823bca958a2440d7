// Imports
use super::Line;
use crate::point_utils;
use serde::{Deserialize, Serialize};

/// The derived geometry of an arrow shape, in shape-local coordinates.
///
/// All doc-comments of this file rely on the following graphic:
///
/// ```text
///         tip
///         /|\
///        / | \
///       /  |  \
///    lwing |  rwing
///          |
///          |
///          |
///        start
/// ```
///
/// It is recomputed from the owning shape's extent on every query and never
/// cached, so it can not go stale when the shape is resized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(default, rename = "arrow_geometry")]
pub struct ArrowGeometry {
    /// Start of the shaft, always the local origin.
    pub start: na::Vector2<f64>,
    /// Tip of the arrow, the shape's extent vector.
    pub tip: na::Vector2<f64>,
    /// End point of the left arrowhead wing.
    pub lwing: na::Vector2<f64>,
    /// End point of the right arrowhead wing.
    pub rwing: na::Vector2<f64>,
}

impl ArrowGeometry {
    /// The wing length of a full-size arrowhead. Arrows shorter than twice
    /// this get a proportionally smaller arrowhead.
    pub const WING_MAX_LENGTH: f64 = 30.0;

    /// The angle between each wing and the shaft.
    pub const WING_STEM_ANGLE: f64 = (20.0 / 180.0) * std::f64::consts::PI;

    /// Derive the arrow geometry from the owning shape's signed extent.
    ///
    /// A zero-length arrow collapses both wings onto the tip, yielding no
    /// arrowhead rather than non-finite coordinates.
    pub fn from_extent(extent: na::Vector2<f64>) -> Self {
        let start = na::Vector2::zeros();
        let tip = extent;
        let distance = tip.norm();
        let wing_length = Self::WING_MAX_LENGTH.min(distance * 0.5);

        let wing_base = if distance == 0.0 {
            tracing::debug!("deriving geometry of a zero-length arrow, collapsing the arrowhead");
            tip
        } else {
            tip - (tip / distance) * wing_length
        };

        Self {
            start,
            tip,
            lwing: point_utils::rotate_point(wing_base, tip, -Self::WING_STEM_ANGLE),
            rwing: point_utils::rotate_point(wing_base, tip, Self::WING_STEM_ANGLE),
        }
    }

    /// The segments the arrow decomposes into for hit-testing: the left wing,
    /// the shaft and the right wing, each ending at the tip.
    pub fn segments(&self) -> [Line; 3] {
        [
            Line::new(self.lwing, self.tip),
            Line::new(self.start, self.tip),
            Line::new(self.rwing, self.tip),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wing_length_of_long_arrow() {
        let geometry = ArrowGeometry::from_extent(na::vector![100.0, 0.0]);

        assert_relative_eq!((geometry.tip - geometry.lwing).norm(), 30.0);
        assert_relative_eq!((geometry.tip - geometry.rwing).norm(), 30.0);
    }

    #[test]
    fn wing_length_shrinks_for_short_arrow() {
        let extent = na::vector![3.0, 4.0];
        let geometry = ArrowGeometry::from_extent(extent);

        // half the shaft length for arrows shorter than 60 units
        assert_relative_eq!((geometry.tip - geometry.lwing).norm(), 2.5, epsilon = 1e-12);
        assert_relative_eq!((geometry.tip - geometry.rwing).norm(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn wings_are_symmetric_about_the_shaft() {
        let geometry = ArrowGeometry::from_extent(na::vector![80.0, 0.0]);

        assert_relative_eq!(geometry.lwing[0], geometry.rwing[0], epsilon = 1e-12);
        assert_relative_eq!(geometry.lwing[1], -geometry.rwing[1], epsilon = 1e-12);
    }

    #[test]
    fn zero_length_arrow_stays_finite() {
        let geometry = ArrowGeometry::from_extent(na::Vector2::zeros());

        assert_eq!(geometry.start, na::Vector2::zeros());
        assert_eq!(geometry.tip, na::Vector2::zeros());
        assert!(geometry.lwing[0].is_finite() && geometry.lwing[1].is_finite());
        assert!(geometry.rwing[0].is_finite() && geometry.rwing[1].is_finite());
    }
}
