//! Compare a directory of predicted pose files against ground-truth labels
//! and print the aggregate error statistics.

use std::path::Path;

use posefit_codec::{normalize_pose, NormConfig, PoseFormat};
use posefit_dataset::{list_sample_pairs, read_pose_file};
use posefit_metrics::pose_error_stats;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(labels_dir), Some(predictions_dir)) = (args.next(), args.next()) else {
        eprintln!("usage: evaluate <labels_dir> <predictions_dir> [format]");
        std::process::exit(1);
    };
    let format = args
        .next()
        .map(|name| name.parse::<PoseFormat>())
        .transpose()?
        .unwrap_or(PoseFormat::EulerPerspective);

    let config = NormConfig::default();

    let pairs = list_sample_pairs(&labels_dir)?;
    log::info!("found {} samples in {}", pairs.len(), labels_dir);

    let mut truths = Vec::with_capacity(pairs.len());
    let mut preds = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        let truth = read_pose_file(&pair.label, format)?;
        let prediction_file = Path::new(&predictions_dir).join(format!("{}.txt", pair.stem));
        let pred = read_pose_file(&prediction_file, format)?;

        truths.push(normalize_pose(&truth, format, &config)?);
        preds.push(normalize_pose(&pred, format, &config)?);
    }

    let stats = pose_error_stats(&truths, &preds, format, &config)?;

    println!("samples: {} (rejected: {})", stats.samples, stats.rejected);
    println!(
        "translation error: max {:.4}, mean {:.4}",
        stats.translation_max, stats.translation_mean
    );
    println!(
        "rotation error: max {:.2} deg, mean {:.2} deg",
        stats.rotation_max, stats.rotation_mean
    );

    Ok(())
}
