//! Translation and rotation error statistics over batches of poses.

use posefit_codec::{denormalize_pose, NormConfig, PoseFormat};

use crate::error::MetricsError;
use crate::geodesic::quaternion_geodesic_angle;

/// Aggregate pose error statistics over a batch, in physical units.
///
/// Translation errors are in world units, rotation errors in degrees.
#[derive(Debug, Clone, Default)]
pub struct PoseErrorStats {
    /// Largest absolute translation component error across the batch.
    pub translation_max: f64,
    /// Mean absolute translation component error.
    pub translation_mean: f64,
    /// Largest rotation error across the batch.
    pub rotation_max: f64,
    /// Mean rotation error.
    pub rotation_mean: f64,
    /// Number of samples that contributed to the statistics.
    pub samples: usize,
    /// Number of samples rejected by domain validation.
    pub rejected: usize,
}

/// Per-sample absolute errors in physical units.
struct SampleErrors {
    translation: Vec<f64>,
    rotation: Vec<f64>,
}

fn sample_errors(
    truth: &[f64],
    pred: &[f64],
    format: PoseFormat,
    config: &NormConfig,
) -> Result<SampleErrors, MetricsError> {
    let world_truth = denormalize_pose(truth, format, config)?;
    let world_pred = denormalize_pose(pred, format, config)?;

    let translation = (0..3)
        .map(|i| (world_truth[i] - world_pred[i]).abs())
        .collect();

    let rotation = match format {
        PoseFormat::TranslationOnly => Vec::new(),
        PoseFormat::EulerAbsolute | PoseFormat::EulerPerspective => (3..6)
            .map(|i| (world_truth[i] - world_pred[i]).abs())
            .collect(),
        PoseFormat::Quaternion => {
            let q_truth = [world_truth[3], world_truth[4], world_truth[5], world_truth[6]];
            let q_pred = [world_pred[3], world_pred[4], world_pred[5], world_pred[6]];
            vec![quaternion_geodesic_angle(&q_truth, &q_pred)?.to_degrees()]
        }
    };

    Ok(SampleErrors {
        translation,
        rotation,
    })
}

/// Compute pose error statistics between ground truth and predictions.
///
/// Both batches hold normalized poses as produced by the codec (ground truth)
/// and the network (predictions). Every pair is decoded through the complete
/// codec inverse and the errors are measured on the reconstructed physical
/// poses — including the re-projection of x/y by depth — rather than on the
/// raw normalized difference. The two flavors are numerically different;
/// this implementation commits to the reconstructed world-space one, keeping
/// the statistics in the units users report.
///
/// Rotation error is the componentwise absolute difference in degrees for
/// the Euler formats and the quaternion geodesic angle (converted to
/// degrees) for the quaternion format.
///
/// A sample that fails domain validation (non-positive depth, degenerate
/// quaternion) is rejected and counted in [`PoseErrorStats::rejected`]
/// without aborting the rest of the batch.
///
/// # Arguments
///
/// * `truths` - Ground-truth normalized poses.
/// * `preds` - Predicted normalized poses, same length as `truths`.
/// * `format` - Pose format the model was trained with.
/// * `config` - Normalization constants used at training time.
///
/// # Returns
///
/// The four aggregate statistics plus sample accounting.
///
/// # Errors
///
/// Returns [`MetricsError::BatchLengthMismatch`] when the batch sizes
/// differ, [`MetricsError::Empty`] on an empty batch and
/// [`MetricsError::AllSamplesRejected`] when no sample survives domain
/// validation.
pub fn pose_error_stats(
    truths: &[Vec<f64>],
    preds: &[Vec<f64>],
    format: PoseFormat,
    config: &NormConfig,
) -> Result<PoseErrorStats, MetricsError> {
    if truths.len() != preds.len() {
        return Err(MetricsError::BatchLengthMismatch {
            truths: truths.len(),
            preds: preds.len(),
        });
    }
    if truths.is_empty() {
        return Err(MetricsError::Empty);
    }

    let mut stats = PoseErrorStats::default();
    let mut translation_sum = 0.0;
    let mut translation_count = 0usize;
    let mut rotation_sum = 0.0;
    let mut rotation_count = 0usize;

    for (truth, pred) in truths.iter().zip(preds.iter()) {
        match sample_errors(truth, pred, format, config) {
            Ok(sample) => {
                for error in sample.translation {
                    stats.translation_max = stats.translation_max.max(error);
                    translation_sum += error;
                    translation_count += 1;
                }
                for error in sample.rotation {
                    stats.rotation_max = stats.rotation_max.max(error);
                    rotation_sum += error;
                    rotation_count += 1;
                }
                stats.samples += 1;
            }
            Err(MetricsError::Codec(_)) => {
                stats.rejected += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if stats.samples == 0 {
        return Err(MetricsError::AllSamplesRejected(stats.rejected));
    }

    stats.translation_mean = translation_sum / translation_count as f64;
    if rotation_count > 0 {
        stats.rotation_mean = rotation_sum / rotation_count as f64;
    }

    Ok(stats)
}

/// Euclidean distance between two physical translations, in world units.
pub fn translation_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use posefit_codec::normalize_pose;

    #[test]
    fn test_identical_batch_is_zero() -> Result<(), MetricsError> {
        let config = NormConfig::default();
        let format = PoseFormat::EulerPerspective;

        let world = [0.05, -0.03, 0.8, 12.0, -7.5, 140.0];
        let normalized = normalize_pose(&world, format, &config)?;
        let batch = vec![normalized.clone(), normalized];

        let stats = pose_error_stats(&batch, &batch, format, &config)?;
        assert_relative_eq!(stats.translation_max, 0.0);
        assert_relative_eq!(stats.translation_mean, 0.0);
        assert_relative_eq!(stats.rotation_max, 0.0);
        assert_relative_eq!(stats.rotation_mean, 0.0);
        assert_eq!(stats.samples, 2);
        assert_eq!(stats.rejected, 0);
        Ok(())
    }

    #[test]
    fn test_euler_errors_in_physical_units() -> Result<(), MetricsError> {
        let config = NormConfig::default();
        let format = PoseFormat::EulerAbsolute;

        let truth_world = [0.1, 0.0, 0.0, 10.0, 0.0, 0.0];
        let pred_world = [0.12, 0.0, 0.0, 19.0, 0.0, 0.0];

        let truths = vec![normalize_pose(&truth_world, format, &config)?];
        let preds = vec![normalize_pose(&pred_world, format, &config)?];

        let stats = pose_error_stats(&truths, &preds, format, &config)?;
        assert_relative_eq!(stats.translation_max, 0.02, epsilon = 1e-9);
        assert_relative_eq!(stats.translation_mean, 0.02 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(stats.rotation_max, 9.0, epsilon = 1e-9);
        assert_relative_eq!(stats.rotation_mean, 3.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_world_space_reconstruction() -> Result<(), MetricsError> {
        // The statistics are measured after the full inverse. A pure depth
        // difference changes the normalized x channel (x = X / z) but
        // reconstructs to the same physical X, so only the Z error shows up.
        let config = NormConfig::default();
        let format = PoseFormat::EulerPerspective;

        let truth_world = [0.05, 0.0, 0.8, 0.0, 0.0, 0.0];
        let pred_world = [0.05, 0.0, 0.7, 0.0, 0.0, 0.0];

        let truths = vec![normalize_pose(&truth_world, format, &config)?];
        let preds = vec![normalize_pose(&pred_world, format, &config)?];

        let stats = pose_error_stats(&truths, &preds, format, &config)?;
        assert_relative_eq!(stats.translation_max, 0.1, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_quaternion_rotation_in_degrees() -> Result<(), MetricsError> {
        let config = NormConfig::default();
        let format = PoseFormat::Quaternion;

        let half = 15f64.to_radians();
        let truth_world = [0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 1.0];
        let pred_world = [0.0, 0.0, 0.5, half.sin(), 0.0, 0.0, half.cos()];

        let truths = vec![normalize_pose(&truth_world, format, &config)?];
        let preds = vec![normalize_pose(&pred_world, format, &config)?];

        let stats = pose_error_stats(&truths, &preds, format, &config)?;
        assert_relative_eq!(stats.rotation_max, 30.0, epsilon = 1e-9);
        assert_relative_eq!(stats.rotation_mean, 30.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_bad_sample_does_not_abort_batch() -> Result<(), MetricsError> {
        let config = NormConfig::default();
        let format = PoseFormat::EulerPerspective;

        let world = [0.05, -0.03, 0.8, 12.0, -7.5, 140.0];
        let good = normalize_pose(&world, format, &config)?;
        // normalized depth <= 0 cannot be decoded
        let bad = vec![0.0, 0.0, -0.5, 0.0, 0.0, 0.0];

        let truths = vec![good.clone(), good.clone()];
        let preds = vec![good, bad];

        let stats = pose_error_stats(&truths, &preds, format, &config)?;
        assert_eq!(stats.samples, 1);
        assert_eq!(stats.rejected, 1);
        Ok(())
    }

    #[test]
    fn test_all_rejected() {
        let config = NormConfig::default();
        let format = PoseFormat::EulerPerspective;

        let good = vec![0.0, 0.0, 0.5, 0.0, 0.0, 0.0];
        let bad = vec![0.0, 0.0, -0.5, 0.0, 0.0, 0.0];

        let result = pose_error_stats(&[good], &[bad], format, &config);
        assert!(matches!(result, Err(MetricsError::AllSamplesRejected(1))));
    }

    #[test]
    fn test_batch_length_mismatch() {
        let config = NormConfig::default();
        let result = pose_error_stats(
            &[vec![0.0; 6]],
            &[],
            PoseFormat::EulerAbsolute,
            &config,
        );
        assert!(matches!(
            result,
            Err(MetricsError::BatchLengthMismatch { truths: 1, preds: 0 })
        ));
    }

    #[test]
    fn test_translation_distance() {
        assert_relative_eq!(
            translation_distance(&[0.0, 0.0, 0.0], &[3.0, 0.0, 4.0]),
            5.0
        );
    }
}
