#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Posefit metrics
//!
//! Error statistics and training objectives for pose regression, computed
//! from normalized pose vectors and reported in physical units. Every
//! function here is pure and configuration is passed by value, so the same
//! code serves batched training-time monitoring and one-off evaluation.
//!
//! ## Example
//!
//! ```
//! use posefit_codec::{normalize_pose, NormConfig, PoseFormat};
//! use posefit_metrics::pose_error_stats;
//!
//! let config = NormConfig::default();
//! let format = PoseFormat::EulerPerspective;
//!
//! let world = [0.05, -0.03, 0.8, 12.0, -7.5, 140.0];
//! let target = normalize_pose(&world, format, &config)?;
//!
//! let stats = pose_error_stats(
//!     &[target.clone()],
//!     &[target],
//!     format,
//!     &config,
//! )?;
//! assert_eq!(stats.translation_max, 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Error types for the metrics and loss functions.
pub mod error;

/// Geodesic distance between quaternions.
pub mod geodesic;

/// Training objectives in normalized space.
pub mod loss;

/// Translation and rotation error statistics.
pub mod pose_error;

pub use error::MetricsError;
pub use geodesic::quaternion_geodesic_angle;
pub use loss::{
    euler_pose_loss, euler_pose_loss_batch, quaternion_pose_loss, quaternion_pose_loss_batch,
    UNIT_NORM_PENALTY_WEIGHT,
};
pub use pose_error::{pose_error_stats, translation_distance, PoseErrorStats};
