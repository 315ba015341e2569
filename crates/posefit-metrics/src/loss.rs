//! Training objectives in normalized space.
//!
//! The Euler formats train against a plain mean-squared-error over the full
//! normalized vector. The quaternion format needs a composite objective: a
//! squared error on the translation, a geodesic term on the rotation and a
//! soft unit-norm penalty on the predicted quaternion. Without the penalty
//! the network can shrink the quaternion towards zero and exploit the
//! renormalization inside the angle computation.

use crate::error::MetricsError;
use crate::geodesic::quaternion_geodesic_angle;
use posefit_codec::quaternion::quaternion_norm;
use posefit_codec::CodecError;

/// Weight of the quaternion unit-norm penalty in the composite loss.
pub const UNIT_NORM_PENALTY_WEIGHT: f64 = 0.2;

/// Mean-squared-error loss over a full normalized pose vector.
///
/// Used as the training objective for the Euler formats.
///
/// # Errors
///
/// Returns [`MetricsError::PoseLengthMismatch`] when the two vectors differ
/// in length and [`MetricsError::Empty`] when they are empty.
pub fn euler_pose_loss(truth: &[f64], pred: &[f64]) -> Result<f64, MetricsError> {
    if truth.len() != pred.len() {
        return Err(MetricsError::PoseLengthMismatch(truth.len(), pred.len()));
    }
    if truth.is_empty() {
        return Err(MetricsError::Empty);
    }

    let sum = truth
        .iter()
        .zip(pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum::<f64>();

    Ok(sum / truth.len() as f64)
}

/// Composite loss for the quaternion pose format.
///
/// `mse(translation) + geodesic_angle(q_true, q_pred) / PI
/// + 0.2 * (||q_pred|| - 1)^2`
///
/// The geodesic term is divided by PI so it shares the `[0, 1]` scale of the
/// other terms. The predicted quaternion participates in the penalty however
/// far it is from unit norm; only an effectively-zero prediction is
/// rejected, since the geodesic term cannot renormalize it.
///
/// # Arguments
///
/// * `truth` - Ground-truth normalized pose, quaternion unit-norm.
/// * `pred` - Predicted normalized pose, quaternion of any nonzero norm.
///
/// # Errors
///
/// Returns [`MetricsError::Codec`] when either quaternion has a norm too
/// small to renormalize.
pub fn quaternion_pose_loss(truth: &[f64; 7], pred: &[f64; 7]) -> Result<f64, MetricsError> {
    let translation_mse = truth[..3]
        .iter()
        .zip(pred[..3].iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum::<f64>()
        / 3.0;

    let q_truth = [truth[3], truth[4], truth[5], truth[6]];
    let q_pred = [pred[3], pred[4], pred[5], pred[6]];

    let angle = quaternion_geodesic_angle(&q_truth, &q_pred)?;
    let norm_penalty = (quaternion_norm(&q_pred) - 1.0).powi(2);

    Ok(translation_mse
        + angle / std::f64::consts::PI
        + UNIT_NORM_PENALTY_WEIGHT * norm_penalty)
}

/// Mean of [`euler_pose_loss`] over a batch.
///
/// # Errors
///
/// Returns [`MetricsError::BatchLengthMismatch`] when the batch sizes
/// differ, [`MetricsError::Empty`] on an empty batch, plus any per-sample
/// error.
pub fn euler_pose_loss_batch(truths: &[Vec<f64>], preds: &[Vec<f64>]) -> Result<f64, MetricsError> {
    if truths.len() != preds.len() {
        return Err(MetricsError::BatchLengthMismatch {
            truths: truths.len(),
            preds: preds.len(),
        });
    }
    if truths.is_empty() {
        return Err(MetricsError::Empty);
    }

    let sum = truths
        .iter()
        .zip(preds.iter())
        .map(|(t, p)| euler_pose_loss(t, p))
        .sum::<Result<f64, _>>()?;

    Ok(sum / truths.len() as f64)
}

/// Mean of [`quaternion_pose_loss`] over a batch.
///
/// # Errors
///
/// Returns [`MetricsError::BatchLengthMismatch`] when the batch sizes
/// differ, [`MetricsError::Empty`] on an empty batch, plus any per-sample
/// error.
pub fn quaternion_pose_loss_batch(
    truths: &[Vec<f64>],
    preds: &[Vec<f64>],
) -> Result<f64, MetricsError> {
    if truths.len() != preds.len() {
        return Err(MetricsError::BatchLengthMismatch {
            truths: truths.len(),
            preds: preds.len(),
        });
    }
    if truths.is_empty() {
        return Err(MetricsError::Empty);
    }

    let mut sum = 0.0;
    for (truth, pred) in truths.iter().zip(preds.iter()) {
        let truth: &[f64; 7] = truth.as_slice().try_into().map_err(|_| {
            CodecError::InvalidPoseLength {
                expected: 7,
                actual: truth.len(),
            }
        })?;
        let pred: &[f64; 7] = pred.as_slice().try_into().map_err(|_| {
            CodecError::InvalidPoseLength {
                expected: 7,
                actual: pred.len(),
            }
        })?;
        sum += quaternion_pose_loss(truth, pred)?;
    }

    Ok(sum / truths.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const IDENTITY_POSE: [f64; 7] = [0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_identity_quaternion_loss_is_zero() -> Result<(), MetricsError> {
        let loss = quaternion_pose_loss(&IDENTITY_POSE, &IDENTITY_POSE)?;
        assert_relative_eq!(loss, 0.0);
        Ok(())
    }

    #[test]
    fn test_norm_penalty() -> Result<(), MetricsError> {
        // same rotation, but the prediction has norm 2
        let mut pred = IDENTITY_POSE;
        pred[6] = 2.0;

        let loss = quaternion_pose_loss(&IDENTITY_POSE, &pred)?;
        assert_relative_eq!(loss, UNIT_NORM_PENALTY_WEIGHT, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_angle_term_scale() -> Result<(), MetricsError> {
        // 180 degrees apart: the angle term contributes exactly 1
        let half = 90f64.to_radians();
        let mut pred = IDENTITY_POSE;
        pred[3] = half.sin();
        pred[6] = half.cos();

        let loss = quaternion_pose_loss(&IDENTITY_POSE, &pred)?;
        assert_relative_eq!(loss, 1.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_translation_term() -> Result<(), MetricsError> {
        let mut pred = IDENTITY_POSE;
        pred[0] = 0.3;

        let loss = quaternion_pose_loss(&IDENTITY_POSE, &pred)?;
        assert_relative_eq!(loss, 0.3 * 0.3 / 3.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_euler_loss_is_plain_mse() -> Result<(), MetricsError> {
        let truth = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let pred = [0.5, 0.0, 0.0, 0.0, 0.0, 1.0];

        let loss = euler_pose_loss(&truth, &pred)?;
        assert_relative_eq!(loss, (0.25 + 1.0) / 6.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_euler_loss_length_mismatch() {
        let result = euler_pose_loss(&[0.0; 6], &[0.0; 7]);
        assert!(matches!(result, Err(MetricsError::PoseLengthMismatch(6, 7))));
    }

    #[test]
    fn test_batch_mean() -> Result<(), MetricsError> {
        let truths = vec![vec![0.0; 6], vec![0.0; 6]];
        let preds = vec![vec![0.0; 6], vec![6.0, 0.0, 0.0, 0.0, 0.0, 0.0]];

        let loss = euler_pose_loss_batch(&truths, &preds)?;
        assert_relative_eq!(loss, 3.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_quaternion_batch_rejects_zero_norm() {
        let truths = vec![IDENTITY_POSE.to_vec()];
        let preds = vec![vec![0.0; 7]];

        let result = quaternion_pose_loss_batch(&truths, &preds);
        assert!(result.is_err());
    }
}
