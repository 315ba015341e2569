//! Geodesic distance between rotations represented as quaternions.

use posefit_codec::quaternion::normalize_quaternion;

use crate::error::MetricsError;

/// Compute the geodesic angle between two quaternions, in radians.
///
/// Both quaternions are renormalized to unit length, then the angle is
/// `2 * acos(|a . b|)`. The absolute value of the dot product accounts for
/// the double cover, so `q` and `-q` compare as identical rotations; the dot
/// product is clamped to `[0, 1]` to keep floating round-off out of the
/// `acos` domain.
///
/// Metric from Huynh, "Metrics for 3D rotations: comparison and analysis",
/// J. Math. Imaging Vis. 35 (2009).
///
/// # Arguments
///
/// * `a` - First quaternion `(qx, qy, qz, qw)`, any norm.
/// * `b` - Second quaternion `(qx, qy, qz, qw)`, any norm.
///
/// # Returns
///
/// The rotation angle separating the two, in `[0, PI]` radians.
///
/// # Errors
///
/// Returns [`MetricsError::Codec`] when either quaternion has a norm too
/// small to renormalize.
pub fn quaternion_geodesic_angle(a: &[f64; 4], b: &[f64; 4]) -> Result<f64, MetricsError> {
    let qa = normalize_quaternion(a)?;
    let qb = normalize_quaternion(b)?;

    let dot = (qa[0] * qb[0] + qa[1] * qb[1] + qa[2] * qb[2] + qa[3] * qb[3])
        .abs()
        .clamp(0.0, 1.0);

    Ok(2.0 * dot.acos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use posefit_codec::CodecError;

    const IDENTITY: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

    fn quat_about_x(degrees: f64) -> [f64; 4] {
        let half = (degrees / 2.0).to_radians();
        [half.sin(), 0.0, 0.0, half.cos()]
    }

    #[test]
    fn test_identical_is_zero() -> Result<(), MetricsError> {
        let q = quat_about_x(33.0);
        assert_relative_eq!(quaternion_geodesic_angle(&q, &q)?, 0.0);
        assert_relative_eq!(quaternion_geodesic_angle(&IDENTITY, &IDENTITY)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_symmetry() -> Result<(), MetricsError> {
        let a = quat_about_x(70.0);
        let b = quat_about_x(-15.0);
        assert_relative_eq!(
            quaternion_geodesic_angle(&a, &b)?,
            quaternion_geodesic_angle(&b, &a)?
        );
        Ok(())
    }

    #[test]
    fn test_antipodal_is_zero() -> Result<(), MetricsError> {
        let q = quat_about_x(120.0);
        let neg = [-q[0], -q[1], -q[2], -q[3]];
        assert_relative_eq!(quaternion_geodesic_angle(&q, &neg)?, 0.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_known_angle() -> Result<(), MetricsError> {
        let angle = quaternion_geodesic_angle(&IDENTITY, &quat_about_x(90.0))?;
        assert_relative_eq!(angle, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_bounded_by_pi() -> Result<(), MetricsError> {
        use rand::Rng;

        let mut rng = rand::rng();
        for _ in 0..100 {
            let a = [
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            ];
            let b = [
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            ];
            if let Ok(angle) = quaternion_geodesic_angle(&a, &b) {
                assert!((0.0..=std::f64::consts::PI).contains(&angle));
            }
        }
        Ok(())
    }

    #[test]
    fn test_accepts_non_unit_inputs() -> Result<(), MetricsError> {
        let q = quat_about_x(60.0);
        let scaled = [q[0] * 3.0, q[1] * 3.0, q[2] * 3.0, q[3] * 3.0];
        assert_relative_eq!(
            quaternion_geodesic_angle(&scaled, &IDENTITY)?,
            60f64.to_radians(),
            epsilon = 1e-12
        );
        Ok(())
    }

    #[test]
    fn test_rejects_zero_norm() {
        let result = quaternion_geodesic_angle(&[0.0; 4], &IDENTITY);
        assert!(matches!(
            result,
            Err(MetricsError::Codec(CodecError::DegenerateQuaternion(_)))
        ));
    }
}
