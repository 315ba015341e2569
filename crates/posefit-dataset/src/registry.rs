//! Name-keyed loss lookup.
//!
//! Model metadata stores the training loss by name; at model-load time the
//! name is resolved here into a plain function. The registry replaces the
//! training framework's custom-objects machinery with an explicit table
//! owned by this boundary crate — the core crates know nothing about names.

use std::collections::HashMap;

use posefit_codec::CodecError;
use posefit_metrics::{euler_pose_loss, quaternion_pose_loss, MetricsError};

use crate::error::DatasetError;

/// Signature shared by every registered loss: ground truth and prediction in
/// normalized space.
pub type LossFn = fn(&[f64], &[f64]) -> Result<f64, MetricsError>;

fn quaternion_loss(truth: &[f64], pred: &[f64]) -> Result<f64, MetricsError> {
    let truth: &[f64; 7] = truth.try_into().map_err(|_| CodecError::InvalidPoseLength {
        expected: 7,
        actual: truth.len(),
    })?;
    let pred: &[f64; 7] = pred.try_into().map_err(|_| CodecError::InvalidPoseLength {
        expected: 7,
        actual: pred.len(),
    })?;
    quaternion_pose_loss(truth, pred)
}

/// Table of loss functions addressable by the name stored in model metadata.
#[derive(Debug, Clone, Default)]
pub struct LossRegistry {
    losses: HashMap<&'static str, LossFn>,
}

impl LossRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in losses: `"mse"` for the Euler
    /// formats and `"quaternion"` for the composite quaternion loss.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("mse", euler_pose_loss);
        registry.register("quaternion", quaternion_loss);
        registry
    }

    /// Register a loss under a name, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, loss: LossFn) {
        self.losses.insert(name, loss);
    }

    /// Resolve a loss by the name stored in model metadata.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UnknownLoss`] for unregistered names.
    pub fn resolve(&self, name: &str) -> Result<LossFn, DatasetError> {
        self.losses
            .get(name)
            .copied()
            .ok_or_else(|| DatasetError::UnknownLoss(name.to_string()))
    }
}
