use serde::{Deserialize, Serialize};

/// Normalization constants shared by the forward and inverse transforms.
///
/// The constants are part of a trained model's serialized contract: targets
/// normalized with one configuration are only meaningful when decoded with
/// the very same values, so the configuration is threaded by value into every
/// codec, metric and loss call instead of living in ambient state. Changing
/// any constant requires retraining the model.
///
/// See [`crate::normalize_pose`] and [`crate::denormalize_pose`] for how each
/// constant is applied per pose format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormConfig {
    /// Bound in world units used to normalize the translation components.
    pub translation_range: f64,
    /// Bound in degrees used to normalize the x and y Euler angles.
    pub rotation_range: f64,
    /// Bound in degrees used to normalize the z Euler angle, which spans a
    /// wider range than the other two in the scenes this system targets.
    pub rotation_z_range: f64,
    /// Scale applied to quaternion components. Kept at 1.0 so quaternion
    /// components go through the same normalize/denormalize call shape as the
    /// Euler angles.
    pub quaternion_range: f64,
}

impl Default for NormConfig {
    fn default() -> Self {
        Self {
            translation_range: 0.2,
            rotation_range: 45.0,
            rotation_z_range: 180.0,
            quaternion_range: 1.0,
        }
    }
}
