use std::path::PathBuf;

use posefit_codec::CodecError;
use posefit_metrics::MetricsError;

/// Error types for the dataset boundary.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Error reading or writing a file.
    #[error("error reading or writing file")]
    Io(#[from] std::io::Error),

    /// A label file line failed to parse as a float.
    #[error("{}: line {line}: {message}", .path.display())]
    Parse {
        /// Label file that failed.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Label file value count does not match the pose format arity.
    #[error("{}: expected {expected} values, got {actual}", .path.display())]
    LabelArity {
        /// Label file that failed.
        path: PathBuf,
        /// Number of values required by the pose format.
        expected: usize,
        /// Number of values found.
        actual: usize,
    },

    /// Image file without a same-stem label file.
    #[error("missing label file {}", .0.display())]
    MissingLabel(PathBuf),

    /// No usable samples found in a dataset directory.
    #[error("no samples found in {}", .0.display())]
    NoSamples(PathBuf),

    /// Codec error while normalizing or denormalizing a pose.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Metrics error raised by a resolved loss function.
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    /// Model metadata (de)serialization error.
    #[error("metadata serialization error")]
    Json(#[from] serde_json::Error),

    /// Stored model constants differ from the ones requested at load time.
    #[error("model metadata mismatch: stored {stored}, requested {requested}")]
    ConfigMismatch {
        /// Constants recorded in the metadata sidecar.
        stored: String,
        /// Constants the caller is about to use.
        requested: String,
    },

    /// Loss name not present in the registry.
    #[error("unknown loss function: {0}")]
    UnknownLoss(String),

    /// Prediction stems and poses have different counts.
    #[error("got {stems} stems but {poses} poses")]
    PredictionCount {
        /// Number of filename stems.
        stems: usize,
        /// Number of poses.
        poses: usize,
    },
}
