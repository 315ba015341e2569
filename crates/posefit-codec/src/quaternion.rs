//! Normalization transforms for the quaternion pose format and quaternion
//! helpers shared with the metric crates.
//!
//! Quaternions are stored as `(qx, qy, qz, qw)` with the scalar part last.

use crate::config::NormConfig;
use crate::error::CodecError;

/// Norm below which a quaternion is considered degenerate.
const MIN_QUATERNION_NORM: f64 = 1e-9;

/// L2 norm of a quaternion.
pub fn quaternion_norm(q: &[f64; 4]) -> f64 {
    (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt()
}

/// Scale a quaternion to unit length.
///
/// # Errors
///
/// Returns [`CodecError::DegenerateQuaternion`] when the norm is too small to
/// divide by.
pub fn normalize_quaternion(q: &[f64; 4]) -> Result<[f64; 4], CodecError> {
    let norm = quaternion_norm(q);
    if norm < MIN_QUATERNION_NORM {
        return Err(CodecError::DegenerateQuaternion(norm));
    }
    Ok([q[0] / norm, q[1] / norm, q[2] / norm, q[3] / norm])
}

/// Normalize a 7-DoF pose: perspective-corrected translation plus quaternion.
///
/// The translation components `(X, Y, Z)` follow the same depth handling as
/// [`crate::euler::normalize_euler_perspective`]. The quaternion components
/// are divided by `quaternion_range`, which is effectively 1.0; the division
/// exists so quaternion components share the Euler components' call shape.
///
/// # Errors
///
/// Returns [`CodecError::NonPositiveDepth`] when the recovered depth is zero
/// or negative.
pub fn normalize_quaternion_pose(
    world: &[f64; 7],
    config: &NormConfig,
) -> Result<[f64; 7], CodecError> {
    let z = 1.0 - world[2];
    if z <= 0.0 {
        return Err(CodecError::NonPositiveDepth(z));
    }

    let x = world[0] / z;
    let y = world[1] / z;

    let xy_range = config.translation_range / (1.0 - config.translation_range);

    Ok([
        x / xy_range,
        y / xy_range,
        z / (1.0 + config.translation_range),
        world[3] / config.quaternion_range,
        world[4] / config.quaternion_range,
        world[5] / config.quaternion_range,
        world[6] / config.quaternion_range,
    ])
}

/// Invert [`normalize_quaternion_pose`].
///
/// The translation mirrors the Euler perspective inverse: de-normalize, then
/// re-project `X = x * z`, `Y = y * z`, then `Z = 1 - z`. The quaternion is
/// multiplied back by `quaternion_range` and renormalized to unit length.
/// Network predictions are not guaranteed unit norm, so the renormalization
/// is mandatory before the quaternion is used as a rotation.
///
/// # Errors
///
/// Returns [`CodecError::NonPositiveDepth`] when the de-normalized depth is
/// zero or negative, and [`CodecError::DegenerateQuaternion`] when the
/// predicted quaternion is too close to zero to renormalize.
pub fn denormalize_quaternion_pose(
    normalized: &[f64; 7],
    config: &NormConfig,
) -> Result<[f64; 7], CodecError> {
    let xy_range = config.translation_range / (1.0 - config.translation_range);

    let x = normalized[0] * xy_range;
    let y = normalized[1] * xy_range;
    let z = normalized[2] * (1.0 + config.translation_range);

    if z <= 0.0 {
        return Err(CodecError::NonPositiveDepth(z));
    }

    let q = normalize_quaternion(&[
        normalized[3] * config.quaternion_range,
        normalized[4] * config.quaternion_range,
        normalized[5] * config.quaternion_range,
        normalized[6] * config.quaternion_range,
    ])?;

    Ok([x * z, y * z, 1.0 - z, q[0], q[1], q[2], q[3]])
}
