#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Posefit dataset
//!
//! The boundary between the numeric pose pipeline and the training loop:
//! enumerating image/label pairs, turning label files into normalized
//! training targets, writing prediction files, and persisting the model's
//! normalization contract so a mismatch is caught at load time instead of
//! corrupting poses silently.
//!
//! Image decoding, augmentation and the training loop itself live with the
//! training framework, not here.

/// Error types for the dataset boundary.
pub mod error;

/// Pose label file reading and writing.
pub mod labels;

/// Model metadata sidecar.
pub mod metadata;

/// Name-keyed loss lookup.
pub mod registry;

/// Dataset enumeration and normalized target loading.
pub mod samples;

pub use error::DatasetError;
pub use labels::{read_pose_file, write_pose_file};
pub use metadata::ModelMetadata;
pub use registry::{LossFn, LossRegistry};
pub use samples::{
    list_sample_pairs, load_normalized_targets, write_predictions, NormalizedTargets, SamplePair,
};
