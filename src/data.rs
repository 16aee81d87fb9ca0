use image::GrayImage;
use std::{fmt::Debug, path::PathBuf};

use crate::error::SkipReason;

pub mod loader;
pub mod naming;
pub mod synthetic;

/// one decoded grayscale image and the identity it belongs to
pub struct Sample {
    pub label: i32,
    pub pixels: GrayImage,
}

impl Debug for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.pixels.dimensions();
        write!(f, "Sample : label = {}, size = {}x{}", self.label, width, height)
    }
}

/// a candidate file that was left out, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: SkipReason,
}
