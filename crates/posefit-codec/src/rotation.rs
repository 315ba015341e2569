//! Conversions between Euler angles and quaternions.
//!
//! The renderer that produces the training labels stores rotations either as
//! three Euler angles in degrees or as a unit quaternion, and some label sets
//! carry the quaternion while the model trains on Euler angles. The Euler
//! convention is ZXY: the rotation is applied about z first, then x, then y,
//! with the angles given as `(rx, ry, rz)`.

use crate::error::CodecError;
use crate::quaternion::normalize_quaternion;

/// Pitch values this close to the +-90 degree pole collapse to the gimbal
/// branch of [`quaternion_to_euler`].
const GIMBAL_EPS: f64 = 1e-7;

/// Convert ZXY Euler angles in degrees to a unit quaternion `(qx, qy, qz, qw)`.
///
/// # Arguments
///
/// * `euler` - Angles `(rx, ry, rz)` in degrees.
///
/// # Returns
///
/// The unit quaternion representing the same rotation.
pub fn euler_to_quaternion(euler: &[f64; 3]) -> [f64; 4] {
    let (sx, cx) = (euler[0].to_radians() * 0.5).sin_cos();
    let (sy, cy) = (euler[1].to_radians() * 0.5).sin_cos();
    let (sz, cz) = (euler[2].to_radians() * 0.5).sin_cos();

    // q = q_y * q_x * q_z
    [
        sx * cy * cz + cx * sy * sz,
        cx * sy * cz - sx * cy * sz,
        cx * cy * sz - sx * sy * cz,
        cx * cy * cz + sx * sy * sz,
    ]
}

/// Convert a quaternion `(qx, qy, qz, qw)` to ZXY Euler angles in degrees.
///
/// The quaternion is renormalized before conversion, so non-unit inputs are
/// accepted. At the gimbal pole (`rx = +-90` degrees) only the sum or
/// difference of the other two angles is determined; the z angle is reported
/// as zero and the remaining rotation is folded into the y angle.
///
/// # Errors
///
/// Returns [`CodecError::DegenerateQuaternion`] when the quaternion norm is
/// too small to renormalize.
pub fn quaternion_to_euler(q: &[f64; 4]) -> Result<[f64; 3], CodecError> {
    let [x, y, z, w] = normalize_quaternion(q)?;

    let sin_pitch = (2.0 * (w * x - y * z)).clamp(-1.0, 1.0);
    let pitch = sin_pitch.asin();

    let (yaw, roll) = if sin_pitch.abs() < 1.0 - GIMBAL_EPS {
        (
            (2.0 * (x * z + w * y)).atan2(1.0 - 2.0 * (x * x + y * y)),
            (2.0 * (x * y + w * z)).atan2(1.0 - 2.0 * (x * x + z * z)),
        )
    } else {
        // Gimbal lock: report roll as zero, fold the rest into yaw.
        let folded = (2.0 * (x * y - w * z)).atan2(1.0 - 2.0 * (y * y + z * z));
        (sin_pitch.signum() * folded, 0.0)
    };

    Ok([pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees()])
}
