//! Pose label file reading and writing.
//!
//! A label file is plain text, one floating-point value per line, in the
//! component order of the pose format: 3 lines for translation-only, 6 for
//! the Euler formats, 7 for the quaternion format. Prediction files use the
//! same layout with fixed precision: 2 decimals for translation and Euler
//! degrees, 4 for quaternion components.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use posefit_codec::PoseFormat;

use crate::error::DatasetError;

/// Read a pose label file.
///
/// Blank lines are tolerated; the number of values must match the format's
/// arity exactly.
///
/// # Arguments
///
/// * `path` - Path to the label file.
/// * `format` - Pose format the labels were generated for.
///
/// # Returns
///
/// The physical pose in label order.
pub fn read_pose_file(
    path: impl AsRef<Path>,
    format: PoseFormat,
) -> Result<Vec<f64>, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut values = Vec::with_capacity(format.arity());
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|e| DatasetError::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                message: e.to_string(),
            })?;
        values.push(value);
    }

    if values.len() != format.arity() {
        return Err(DatasetError::LabelArity {
            path: path.to_path_buf(),
            expected: format.arity(),
            actual: values.len(),
        });
    }

    Ok(values)
}

/// Write a pose to a prediction file with fixed precision.
///
/// Translation and Euler-degree components are written with 2 decimals,
/// quaternion components with 4.
///
/// # Arguments
///
/// * `path` - Output file path; an existing file is overwritten.
/// * `pose` - Physical pose with exactly `format.arity()` components.
/// * `format` - Pose format of the model that produced the pose.
pub fn write_pose_file(
    path: impl AsRef<Path>,
    pose: &[f64],
    format: PoseFormat,
) -> Result<(), DatasetError> {
    let path = path.as_ref();
    if pose.len() != format.arity() {
        return Err(DatasetError::LabelArity {
            path: path.to_path_buf(),
            expected: format.arity(),
            actual: pose.len(),
        });
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for (index, value) in pose.iter().enumerate() {
        if format == PoseFormat::Quaternion && index >= 3 {
            writeln!(writer, "{value:.4}")?;
        } else {
            writeln!(writer, "{value:.2}")?;
        }
    }
    writer.flush()?;

    Ok(())
}
