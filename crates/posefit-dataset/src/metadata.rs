//! Model metadata sidecar.
//!
//! The normalization constants and pose format are baked into a trained
//! model's weights; decoding predictions with different constants silently
//! corrupts the poses. The sidecar makes the mismatch detectable: it is
//! written next to the model at training time and verified at load time.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use posefit_codec::{NormConfig, PoseFormat};

use crate::error::DatasetError;

/// Constants a trained model was produced with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Pose format the model regresses.
    pub format: PoseFormat,
    /// Normalization constants used for the training targets.
    pub config: NormConfig,
    /// Name of the training loss, resolvable through
    /// [`crate::registry::LossRegistry`].
    pub loss: String,
}

impl ModelMetadata {
    /// Write the metadata as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DatasetError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Read metadata written by [`ModelMetadata::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    /// Check the stored constants against the ones the caller is about to
    /// use.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ConfigMismatch`] on any difference in format
    /// or configuration.
    pub fn verify(&self, format: PoseFormat, config: &NormConfig) -> Result<(), DatasetError> {
        if self.format != format || self.config != *config {
            return Err(DatasetError::ConfigMismatch {
                stored: format!("{} / {:?}", self.format, self.config),
                requested: format!("{} / {:?}", format, config),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> ModelMetadata {
        ModelMetadata {
            format: PoseFormat::Quaternion,
            config: NormConfig::default(),
            loss: "quaternion".to_string(),
        }
    }

    #[test]
    fn test_save_load_round_trip() -> Result<(), DatasetError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("model.json");

        let saved = metadata();
        saved.save(&path)?;
        let loaded = ModelMetadata::load(&path)?;

        assert_eq!(loaded, saved);
        Ok(())
    }

    #[test]
    fn test_verify_accepts_matching_constants() -> Result<(), DatasetError> {
        metadata().verify(PoseFormat::Quaternion, &NormConfig::default())
    }

    #[test]
    fn test_verify_rejects_format_change() {
        let result = metadata().verify(PoseFormat::EulerPerspective, &NormConfig::default());
        assert!(matches!(result, Err(DatasetError::ConfigMismatch { .. })));
    }

    #[test]
    fn test_verify_rejects_config_change() {
        let config = NormConfig {
            rotation_z_range: 90.0,
            ..NormConfig::default()
        };
        let result = metadata().verify(PoseFormat::Quaternion, &config);
        assert!(matches!(result, Err(DatasetError::ConfigMismatch { .. })));
    }
}
