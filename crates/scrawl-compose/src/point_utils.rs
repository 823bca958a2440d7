/// Rotates a point around a pivot by the given angle (radians, counter-clockwise
/// in the mathematical convention; the screen y-axis orientation is the caller's concern).
pub fn rotate_point(
    point: na::Vector2<f64>,
    pivot: na::Vector2<f64>,
    angle: f64,
) -> na::Vector2<f64> {
    na::Rotation2::new(angle) * (point - pivot) + pivot
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rotate_zero_angle_is_identity() {
        let point = na::vector![13.5, -4.2];
        let pivot = na::vector![2.0, 7.0];

        assert_relative_eq!(rotate_point(point, pivot, 0.0), point);
    }

    #[test]
    fn rotate_roundtrip() {
        let point = na::vector![10.0, 0.0];
        let pivot = na::vector![-3.0, 5.5];
        let angle = 1.2;

        let roundtripped = rotate_point(rotate_point(point, pivot, angle), pivot, -angle);

        assert_relative_eq!(roundtripped, point, epsilon = 1e-12);
    }

    #[test]
    fn rotate_quarter_turn() {
        let rotated = rotate_point(
            na::vector![1.0, 0.0],
            na::vector![0.0, 0.0],
            std::f64::consts::FRAC_PI_2,
        );

        assert_relative_eq!(rotated, na::vector![0.0, 1.0], epsilon = 1e-12);
    }
}
