/// Error types for the pose codec.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Depth recovered from the stored depth fraction is zero or negative.
    #[error("depth must be strictly positive, got {0}")]
    NonPositiveDepth(f64),

    /// Quaternion norm is too small to renormalize.
    #[error("quaternion norm {0} is too small to renormalize")]
    DegenerateQuaternion(f64),

    /// Input vector length does not match the selected pose format.
    #[error("pose has {actual} components, expected {expected}")]
    InvalidPoseLength {
        /// Number of components required by the pose format.
        expected: usize,
        /// Number of components received.
        actual: usize,
    },

    /// Pose format name not recognized.
    #[error("unknown pose format: {0}")]
    UnknownFormat(String),
}
