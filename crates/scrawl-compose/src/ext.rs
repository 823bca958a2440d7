// Imports
use p2d::bounding_volume::Aabb;

/// Extension trait for [`na::Vector2<f64>`].
pub trait Vector2Ext
where
    Self: Sized,
{
    /// a new vector by taking the mins of each x and y values
    fn mins(&self, other: &Self) -> Self;
    /// a new vector by taking the maxs of each x and y values
    fn maxs(&self, other: &Self) -> Self;
    /// Approximate equality
    fn approx_eq(&self, other: &Self) -> bool;
}

impl Vector2Ext for na::Vector2<f64> {
    fn mins(&self, other: &Self) -> Self {
        na::vector![self[0].min(other[0]), self[1].min(other[1])]
    }

    fn maxs(&self, other: &Self) -> Self {
        na::vector![self[0].max(other[0]), self[1].max(other[1])]
    }

    fn approx_eq(&self, other: &Self) -> bool {
        approx::relative_eq!(self[0], other[0]) && approx::relative_eq!(self[1], other[1])
    }
}

/// Extension trait for [p2d::bounding_volume::Aabb].
pub trait AabbExt
where
    Self: Sized,
{
    /// New Aabb, ensuring its mins, maxs are valid (maxs >= mins)
    fn new_positive(start: na::Point2<f64>, end: na::Point2<f64>) -> Self;
    /// Asserts the Aabb is valid
    fn assert_valid(&self) -> anyhow::Result<()>;
}

impl AabbExt for Aabb {
    fn new_positive(start: na::Point2<f64>, end: na::Point2<f64>) -> Self {
        let mins = start.coords.mins(&end.coords);
        let maxs = start.coords.maxs(&end.coords);

        Aabb::new(mins.into(), maxs.into())
    }

    fn assert_valid(&self) -> anyhow::Result<()> {
        if self.extents()[0] < 0.0
            || self.extents()[1] < 0.0
            || self.maxs[0] < self.mins[0]
            || self.maxs[1] < self.mins[1]
        {
            Err(anyhow::anyhow!(
                "Assert bounds valid failed, invalid bounds `{:?}`.",
                self,
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_positive_swaps_corners() {
        let aabb = Aabb::new_positive(na::point![10.0, -2.0], na::point![4.0, 3.0]);

        assert_eq!(aabb.mins, na::point![4.0, -2.0]);
        assert_eq!(aabb.maxs, na::point![10.0, 3.0]);
        assert!(aabb.assert_valid().is_ok());
    }
}
