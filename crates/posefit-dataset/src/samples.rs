//! Dataset enumeration and normalized target loading.
//!
//! A dataset directory holds rendered images paired with same-stem `.txt`
//! label files. Image decoding is the training loop's concern; this module
//! only enumerates the pairs and turns the labels into normalized training
//! targets.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use posefit_codec::{normalize_pose, NormConfig, PoseFormat};

use crate::error::DatasetError;
use crate::labels::{read_pose_file, write_pose_file};

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// A rendered image paired with its pose label file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePair {
    /// Path to the rendered image.
    pub image: PathBuf,
    /// Path to the pose label file.
    pub label: PathBuf,
    /// Shared filename stem, used to name prediction files.
    pub stem: String,
}

/// Normalized training targets for a dataset directory.
#[derive(Debug, Clone)]
pub struct NormalizedTargets {
    /// Sample pairs retained after domain validation, in enumeration order.
    pub pairs: Vec<SamplePair>,
    /// One normalized pose per retained pair.
    pub targets: Vec<Vec<f64>>,
    /// Label files skipped because their pose failed domain validation.
    pub skipped: Vec<PathBuf>,
}

/// Enumerate the image/label pairs of a dataset directory.
///
/// Walks the directory recursively, collects files with an image extension
/// (`png`, `jpg`, `jpeg`) and pairs each with the `.txt` file of the same
/// stem in the same directory. The result is sorted by image path so the
/// order is stable across platforms.
///
/// # Errors
///
/// Returns [`DatasetError::MissingLabel`] when an image has no label file
/// and [`DatasetError::NoSamples`] when the directory contains no images.
pub fn list_sample_pairs(dir: impl AsRef<Path>) -> Result<Vec<SamplePair>, DatasetError> {
    let dir = dir.as_ref();

    let mut pairs = Vec::new();
    for entry in walkdir::WalkDir::new(dir) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if !is_image {
            continue;
        }

        let label = path.with_extension("txt");
        if !label.is_file() {
            return Err(DatasetError::MissingLabel(label));
        }

        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        pairs.push(SamplePair {
            image: path.to_path_buf(),
            label,
            stem,
        });
    }

    if pairs.is_empty() {
        return Err(DatasetError::NoSamples(dir.to_path_buf()));
    }

    pairs.sort_by(|a, b| a.image.cmp(&b.image));
    Ok(pairs)
}

/// Load a dataset directory's labels as normalized training targets.
///
/// Label files are read and normalized in parallel. A sample whose pose
/// fails domain validation (non-positive depth) or carries the wrong number
/// of values is logged and skipped without aborting the rest of the
/// dataset; I/O and parse failures abort, since they point at a broken
/// dataset rather than an out-of-domain pose.
///
/// # Arguments
///
/// * `dir` - Dataset directory.
/// * `format` - Pose format the labels were generated for.
/// * `config` - Normalization constants to train with.
///
/// # Errors
///
/// Returns [`DatasetError::NoSamples`] when the directory has no images or
/// every sample was skipped.
pub fn load_normalized_targets(
    dir: impl AsRef<Path>,
    format: PoseFormat,
    config: &NormConfig,
) -> Result<NormalizedTargets, DatasetError> {
    let dir = dir.as_ref();
    let pairs = list_sample_pairs(dir)?;

    let results: Vec<Result<Vec<f64>, DatasetError>> = pairs
        .par_iter()
        .map(|pair| {
            let world = read_pose_file(&pair.label, format)?;
            Ok(normalize_pose(&world, format, config)?)
        })
        .collect();

    let mut kept = Vec::with_capacity(pairs.len());
    let mut targets = Vec::with_capacity(pairs.len());
    let mut skipped = Vec::new();

    for (pair, result) in pairs.into_iter().zip(results) {
        match result {
            Ok(target) => {
                targets.push(target);
                kept.push(pair);
            }
            Err(e @ (DatasetError::Codec(_) | DatasetError::LabelArity { .. })) => {
                log::warn!("skipping {}: {}", pair.label.display(), e);
                skipped.push(pair.label);
            }
            Err(e) => return Err(e),
        }
    }

    if kept.is_empty() {
        return Err(DatasetError::NoSamples(dir.to_path_buf()));
    }

    Ok(NormalizedTargets {
        pairs: kept,
        targets,
        skipped,
    })
}

/// Write one prediction file per sample stem.
///
/// The poses must already be physical (run through the codec inverse); each
/// is written to `<dir>/<stem>.txt` with the fixed precisions of
/// [`write_pose_file`]. The directory is created when missing.
///
/// # Errors
///
/// Returns [`DatasetError::PredictionCount`] when the stem and pose counts
/// differ.
pub fn write_predictions(
    dir: impl AsRef<Path>,
    stems: &[String],
    poses: &[Vec<f64>],
    format: PoseFormat,
) -> Result<(), DatasetError> {
    if stems.len() != poses.len() {
        return Err(DatasetError::PredictionCount {
            stems: stems.len(),
            poses: poses.len(),
        });
    }

    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    for (stem, pose) in stems.iter().zip(poses.iter()) {
        write_pose_file(dir.join(format!("{stem}.txt")), pose, format)?;
    }

    Ok(())
}
