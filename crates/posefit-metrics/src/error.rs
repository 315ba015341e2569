use posefit_codec::CodecError;

/// Error types for the metrics and loss functions.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Ground-truth and prediction batches have different sizes.
    #[error("batch size mismatch: {truths} ground-truth poses, {preds} predictions")]
    BatchLengthMismatch {
        /// Number of ground-truth poses.
        truths: usize,
        /// Number of predicted poses.
        preds: usize,
    },

    /// Two pose vectors that must agree in length do not.
    #[error("pose vectors have mismatched lengths: {0} vs {1}")]
    PoseLengthMismatch(usize, usize),

    /// Input batch or pose vector is empty.
    #[error("input is empty")]
    Empty,

    /// Every sample in the batch failed domain validation.
    #[error("all {0} samples were rejected by domain validation")]
    AllSamplesRejected(usize),

    /// Codec error while decoding a pose.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
