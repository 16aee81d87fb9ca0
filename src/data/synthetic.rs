use image::{GrayImage, Luma};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    data::naming::sample_filename,
    error::{Error, Result},
    utils::has_accepted_extension,
};

/// shape of the placeholder images written into an empty data directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticParams {
    pub count: usize,
    pub width: u32,
    pub height: u32,
    pub gray: u8,
    pub prefix: String,
    pub label: i32,
    pub extension: String,
}

impl Default for SyntheticParams {
    fn default() -> Self {
        Self {
            count: 10,
            width: 200,
            height: 200,
            gray: 150,
            prefix: "user".to_string(),
            label: 1,
            extension: "jpg".to_string(),
        }
    }
}

/// true when the directory is missing or holds no file with an accepted image extension
pub fn needs_samples(data_dir: &Path) -> bool {
    let read_dir = match std::fs::read_dir(data_dir) {
        Ok(read_dir) => read_dir,
        Err(_) => return true,
    };
    !read_dir.flatten().any(|entry| {
        let path = entry.path();
        path.is_file() && has_accepted_extension(&path)
    })
}

/// writes the placeholder images if needed, returns how many were written
pub fn ensure_samples(data_dir: &Path, params: &SyntheticParams) -> Result<usize> {
    if !needs_samples(data_dir) {
        return Ok(0);
    }
    std::fs::create_dir_all(data_dir).map_err(|error| {
        tracing::error!("failed to create {}\n{}", data_dir.display(), error);
        Error::DataDirectory(data_dir.to_path_buf(), error)
    })?;

    let image = GrayImage::from_pixel(params.width, params.height, Luma([params.gray]));
    let mut written: Vec<PathBuf> = Vec::with_capacity(params.count);
    for index in 1..=params.count {
        let filepath = data_dir.join(sample_filename(&params.prefix, params.label, index, &params.extension));
        if let Err(error) = image.save(&filepath) {
            tracing::error!("failed to write {}\n{}", filepath.display(), error);
            // a partial set would look like real data on the next run
            for leftover in written.iter() {
                if let Err(error) = std::fs::remove_file(leftover) {
                    tracing::warn!("failed to remove {}\n{}", leftover.display(), error);
                }
            }
            return Err(Error::Synthesis(filepath, error));
        }
        written.push(filepath);
    }
    tracing::info!(
        "no sample images in {}, wrote {} synthetic ones",
        data_dir.display(),
        params.count
    );
    Ok(params.count)
}
