use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    data::{loader::load_samples, synthetic::ensure_samples, Skipped},
    error::{Error, Result},
    facerecognition::{probe, Probe},
};

pub const PLACEHOLDER_CLASSIFIER: &str = "<classifier>placeholder</classifier>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// the recognizer was fitted and wrote its own format
    Trained,
    /// no recognizer was available, the placeholder text was written instead
    Placeholder,
}

#[derive(Debug)]
pub struct TrainReport {
    pub classifier_path: PathBuf,
    pub outcome: Outcome,
    pub samples: usize,
    pub labels: BTreeSet<i32>,
    pub skipped: Vec<Skipped>,
    pub synthesized: usize,
}

/// trains on `data_dir` with the default recognizer settings and writes `classifier_path`
pub fn train(data_dir: impl AsRef<Path>, classifier_path: impl AsRef<Path>) -> Result<PathBuf> {
    let config = Config {
        data_dir: data_dir.as_ref().to_path_buf(),
        classifier_path: classifier_path.as_ref().to_path_buf(),
        ..Default::default()
    };
    Ok(train_with(&config, probe)?.classifier_path)
}

pub fn train_with(config: &Config, probe: Probe) -> Result<TrainReport> {
    let synthesized = ensure_samples(&config.data_dir, &config.synthetic)?;

    let (samples, skipped) = load_samples(&config.data_dir)?;
    if samples.is_empty() {
        tracing::error!("no images found to train in {}", config.data_dir.display());
        return Err(Error::NoTrainingData);
    }
    let labels: BTreeSet<i32> = samples.iter().map(|sample| sample.label).collect();
    tracing::info!(
        "collected {} samples with {} distinct labels, skipped {} files",
        samples.len(),
        labels.len(),
        skipped.len()
    );

    let classifier_path = config.classifier_path.clone();
    let outcome = match probe(&config.recognizer) {
        Some(mut recognizer) => {
            recognizer
                .train(&samples)
                .and_then(|_| recognizer.write(&classifier_path))
                .map_err(|error| {
                    tracing::error!("recognizer failed\n{}", error);
                    Error::Persist(classifier_path.clone(), error)
                })?;
            tracing::info!("wrote classifier to {}", classifier_path.display());
            Outcome::Trained
        }
        None => {
            tracing::warn!(
                "LBPH recognizer not available, writing placeholder {}",
                classifier_path.display()
            );
            write_placeholder(&classifier_path)?;
            Outcome::Placeholder
        }
    };

    Ok(TrainReport {
        classifier_path,
        outcome,
        samples: samples.len(),
        labels,
        skipped,
        synthesized,
    })
}

fn write_placeholder(classifier_path: &Path) -> Result<()> {
    std::fs::write(classifier_path, PLACEHOLDER_CLASSIFIER).map_err(|error| {
        tracing::error!("failed to write {}\n{}", classifier_path.display(), error);
        Error::Persist(classifier_path.to_path_buf(), error.into())
    })
}
