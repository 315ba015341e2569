//! Normalization transforms for the Euler-angle pose formats.

use crate::config::NormConfig;
use crate::error::CodecError;

/// Normalize a 6-DoF pose by plain range division.
///
/// Each translation component is divided by `translation_range` and each
/// Euler angle by `rotation_range`.
///
/// # Arguments
///
/// * `world` - Physical pose `(X, Y, Z, rx, ry, rz)`, translation in world
///   units and angles in degrees.
/// * `config` - Normalization constants.
///
/// # Returns
///
/// The normalized pose.
pub fn normalize_euler_absolute(world: &[f64; 6], config: &NormConfig) -> [f64; 6] {
    [
        world[0] / config.translation_range,
        world[1] / config.translation_range,
        world[2] / config.translation_range,
        world[3] / config.rotation_range,
        world[4] / config.rotation_range,
        world[5] / config.rotation_range,
    ]
}

/// Invert [`normalize_euler_absolute`] by multiplying each component back by
/// its range.
pub fn denormalize_euler_absolute(normalized: &[f64; 6], config: &NormConfig) -> [f64; 6] {
    [
        normalized[0] * config.translation_range,
        normalized[1] * config.translation_range,
        normalized[2] * config.translation_range,
        normalized[3] * config.rotation_range,
        normalized[4] * config.rotation_range,
        normalized[5] * config.rotation_range,
    ]
}

/// Normalize a 6-DoF pose with perspective-corrected depth.
///
/// The stored label order is `(X, Y, Z, rx, ry, rz)` where `Z` is a depth
/// fraction `1 - z` and `X`, `Y` are projected coordinates, i.e. already
/// multiplied by the true depth. The transform recovers `z = 1 - Z`, then
/// un-projects `x = X / z`, `y = Y / z` to image-plane coordinates, and
/// finally scales every component into an approximately `[-1, 1]` range:
/// x/y by `translation_range / (1 - translation_range)`, z by
/// `1 + translation_range`, rx/ry by `rotation_range` and rz by
/// `rotation_z_range`.
///
/// Inputs outside the typical scene ranges produce normalized values outside
/// `[-1, 1]`; that is expected for edge inputs, not an error.
///
/// # Errors
///
/// Returns [`CodecError::NonPositiveDepth`] when the recovered depth is zero
/// or negative.
pub fn normalize_euler_perspective(
    world: &[f64; 6],
    config: &NormConfig,
) -> Result<[f64; 6], CodecError> {
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
        world[3] / config.rotation_range,
        world[4] / config.rotation_range,
        world[5] / config.rotation_z_range,
    ])
}

/// Invert [`normalize_euler_perspective`].
///
/// The steps run in exact reverse order of the forward transform:
/// de-normalize every component first, then re-project `X = x * z`,
/// `Y = y * z`, then flip the depth back to the stored fraction `Z = 1 - z`.
/// De-normalization must happen before the re-projection; reordering the
/// steps yields a numerically plausible but wrong pose.
///
/// # Errors
///
/// Returns [`CodecError::NonPositiveDepth`] when the de-normalized depth is
/// zero or negative, which a network prediction can produce.
pub fn denormalize_euler_perspective(
    normalized: &[f64; 6],
    config: &NormConfig,
) -> Result<[f64; 6], CodecError> {
    let xy_range = config.translation_range / (1.0 - config.translation_range);

    let x = normalized[0] * xy_range;
    let y = normalized[1] * xy_range;
    let z = normalized[2] * (1.0 + config.translation_range);

    if z <= 0.0 {
        return Err(CodecError::NonPositiveDepth(z));
    }

    Ok([
        x * z,
        y * z,
        1.0 - z,
        normalized[3] * config.rotation_range,
        normalized[4] * config.rotation_range,
        normalized[5] * config.rotation_z_range,
    ])
}
