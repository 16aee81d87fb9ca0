use image::{io::Reader, DynamicImage, GrayImage, Luma};
use std::path::{Path, PathBuf};

use crate::{
    data::{naming::parse_label, Sample, Skipped},
    error::{Error, Result, SkipReason},
    utils::{get_filename, has_accepted_extension},
};

/// regular files directly inside `data_dir` with an accepted image extension, sorted by name
pub fn collect_candidates(data_dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(data_dir).map_err(|error| {
        tracing::error!("failed to read {}\n{}", data_dir.display(), error);
        Error::DataDirectory(data_dir.to_path_buf(), error)
    })?;

    let mut candidates: Vec<PathBuf> = read_dir
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_accepted_extension(path))
        .collect();
    candidates.sort();
    Ok(candidates)
}

/// converts to a single channel with the ITU-R 601-2 weights (299/587/114)
pub fn to_gray(image: DynamicImage) -> GrayImage {
    if !image.color().has_color() {
        return image.into_luma8();
    }
    let rgb = image.into_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        // 16.16 fixed point, rounded
        let luma = (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16;
        Luma([luma as u8])
    })
}

/// labels then decodes a single candidate, the format is sniffed from the bytes
pub fn load_sample(filepath: &Path) -> core::result::Result<Sample, SkipReason> {
    let label = parse_label(get_filename(filepath)).ok_or(SkipReason::Unlabeled)?;
    let image = Reader::open(filepath)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|error| SkipReason::Undecodable(error.to_string()))?
        .decode()
        .map_err(|error| SkipReason::Undecodable(error.to_string()))?;
    Ok(Sample { label, pixels: to_gray(image) })
}

/// loads every candidate, bad files end up in the second vector instead of failing the run
pub fn load_samples(data_dir: &Path) -> Result<(Vec<Sample>, Vec<Skipped>)> {
    let mut samples: Vec<Sample> = Vec::new();
    let mut skipped: Vec<Skipped> = Vec::new();

    for filepath in collect_candidates(data_dir)? {
        match load_sample(&filepath) {
            Ok(sample) => {
                tracing::debug!("loaded {} as {:?}", filepath.display(), sample);
                samples.push(sample);
            }
            Err(reason) => {
                tracing::warn!("skipping file {} : {}", filepath.display(), reason);
                skipped.push(Skipped { path: filepath, reason });
            }
        }
    }
    Ok((samples, skipped))
}
