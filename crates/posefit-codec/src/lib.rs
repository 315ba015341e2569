#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Posefit codec
//!
//! Invertible transforms between physical camera poses and the bounded,
//! network-friendly vectors a regression network trains on. Four pose
//! formats are supported, selected once per trained model through
//! [`PoseFormat`]; the normalization constants live in [`NormConfig`] and
//! must be identical at training and inference time.
//!
//! All functions are pure and hold no state, so the same code path serves
//! batched training-time use and one-off evaluation, concurrently and with
//! differing configurations.
//!
//! ## Example
//!
//! ```
//! use posefit_codec::{denormalize_pose, normalize_pose, NormConfig, PoseFormat};
//!
//! let config = NormConfig::default();
//! let world = [0.05, -0.03, 0.8, 12.0, -7.5, 140.0];
//!
//! let normalized = normalize_pose(&world, PoseFormat::EulerPerspective, &config)?;
//! let recovered = denormalize_pose(&normalized, PoseFormat::EulerPerspective, &config)?;
//!
//! for (r, w) in recovered.iter().zip(world.iter()) {
//!     assert!((r - w).abs() < 1e-5);
//! }
//! # Ok::<(), posefit_codec::CodecError>(())
//! ```

/// Normalization constants shared by forward and inverse transforms.
pub mod config;

/// Error types for the pose codec.
pub mod error;

/// Transforms for the Euler-angle pose formats.
pub mod euler;

/// Pose format selection.
pub mod format;

/// Transforms for the quaternion pose format.
pub mod quaternion;

/// Euler angle / quaternion conversions.
pub mod rotation;

pub use config::NormConfig;
pub use error::CodecError;
pub use format::PoseFormat;

fn as_array<const N: usize>(pose: &[f64]) -> Result<&[f64; N], CodecError> {
    pose.try_into().map_err(|_| CodecError::InvalidPoseLength {
        expected: N,
        actual: pose.len(),
    })
}

/// Transform a physical pose into its normalized, network-facing form.
///
/// The input must be a physical pose in the layout of the chosen format;
/// feeding an already-normalized vector back in is a precondition violation
/// that cannot be detected (normalized values are unbounded for edge inputs)
/// and silently corrupts results.
///
/// # Arguments
///
/// * `world` - Physical pose with exactly `format.arity()` components.
/// * `format` - Pose format the model was trained with.
/// * `config` - Normalization constants, identical to the ones used at
///   training time.
///
/// # Returns
///
/// The normalized pose, same length as the input.
///
/// # Errors
///
/// Returns [`CodecError::InvalidPoseLength`] on an arity mismatch and
/// [`CodecError::NonPositiveDepth`] when a perspective format recovers a
/// depth of zero or less.
pub fn normalize_pose(
    world: &[f64],
    format: PoseFormat,
    config: &NormConfig,
) -> Result<Vec<f64>, CodecError> {
    match format {
        PoseFormat::TranslationOnly => {
            let pose: &[f64; 3] = as_array(world)?;
            Ok(pose.to_vec())
        }
        PoseFormat::EulerAbsolute => {
            Ok(euler::normalize_euler_absolute(as_array(world)?, config).to_vec())
        }
        PoseFormat::EulerPerspective => {
            Ok(euler::normalize_euler_perspective(as_array(world)?, config)?.to_vec())
        }
        PoseFormat::Quaternion => {
            Ok(quaternion::normalize_quaternion_pose(as_array(world)?, config)?.to_vec())
        }
    }
}

/// Transform a normalized pose back into physical units.
///
/// Exact algebraic reciprocal of [`normalize_pose`] for the format in use;
/// a round trip recovers the physical pose to within floating-point
/// rounding. For the quaternion format the rotation is renormalized to unit
/// length, since network predictions carry no norm guarantee.
///
/// # Arguments
///
/// * `normalized` - Normalized pose with exactly `format.arity()` components.
/// * `format` - Pose format the model was trained with.
/// * `config` - Normalization constants, identical to the ones used at
///   training time.
///
/// # Returns
///
/// The physical pose, same length as the input.
///
/// # Errors
///
/// Returns [`CodecError::InvalidPoseLength`] on an arity mismatch,
/// [`CodecError::NonPositiveDepth`] when the decoded depth is zero or less,
/// and [`CodecError::DegenerateQuaternion`] when a predicted quaternion
/// cannot be renormalized.
pub fn denormalize_pose(
    normalized: &[f64],
    format: PoseFormat,
    config: &NormConfig,
) -> Result<Vec<f64>, CodecError> {
    match format {
        PoseFormat::TranslationOnly => {
            let pose: &[f64; 3] = as_array(normalized)?;
            Ok(pose.to_vec())
        }
        PoseFormat::EulerAbsolute => {
            Ok(euler::denormalize_euler_absolute(as_array(normalized)?, config).to_vec())
        }
        PoseFormat::EulerPerspective => {
            Ok(euler::denormalize_euler_perspective(as_array(normalized)?, config)?.to_vec())
        }
        PoseFormat::Quaternion => {
            Ok(quaternion::denormalize_quaternion_pose(as_array(normalized)?, config)?.to_vec())
        }
    }
}
