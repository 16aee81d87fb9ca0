use serde::{Deserialize, Serialize};
use std::{fmt::Debug, path::PathBuf};

use crate::{data::synthetic::SyntheticParams, facerecognition::FRparams};

pub const CONFIG_FILEPATH: &str = "laptev-trainer.config";

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub classifier_path: PathBuf,
    pub recognizer: FRparams,
    pub synthetic: SyntheticParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            classifier_path: PathBuf::from("classifier.xml"),
            recognizer: FRparams::default(),
            synthetic: SyntheticParams::default(),
        }
    }
}

impl Config {
    /// uses Self::load() and falls back to the defaults, the file is only ever read
    pub fn new() -> Self {
        match Self::load(CONFIG_FILEPATH) {
            Ok(config) => {
                tracing::info!("configuration loaded from {}", CONFIG_FILEPATH);
                config
            }
            Err(error) if is_not_found(&error) => {
                tracing::debug!("no {}, using defaults", CONFIG_FILEPATH);
                Self::default()
            }
            Err(error) => {
                tracing::warn!("failed to load configuration, using defaults\n{}", error);
                Self::default()
            }
        }
    }

    pub fn load(filepath: &str) -> anyhow::Result<Self> {
        let buffer: Vec<u8> = std::fs::read(filepath)?;
        Ok(serde_json::from_slice(&buffer)?)
    }
}

fn is_not_found(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<std::io::Error>()
        .map_or(false, |error| error.kind() == std::io::ErrorKind::NotFound)
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "data_dir = {}\nclassifier_path = {}\nrecognizer = {:?}\nsynthetic = {:?}",
            self.data_dir.display(),
            self.classifier_path.display(),
            self.recognizer,
            self.synthetic
        )
    }
}
