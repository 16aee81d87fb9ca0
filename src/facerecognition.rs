// facerecognition module

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::Sample;

/// LBPH settings handed to the recognizer on construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FRparams {
    pub radius : i32,
    pub neighbors : i32,
    pub grid_x : i32,
    pub grid_y : i32,
    pub threshold : f64,
}

impl FRparams {
    pub fn new(radius : i32, neighbors : i32, grid_x : i32, grid_y : i32, threshold : f64) -> FRparams {
        FRparams {
            radius,
            neighbors,
            grid_x,
            grid_y,
            threshold,
        }
    }
}

impl Default for FRparams {
    fn default() -> FRparams {
        FRparams::new(1, 8, 8, 8, f64::MAX)
    }
}

/// the two operations the trainer needs from a recognition backend
pub trait FaceRecognizer {
    /// fits the model on every sample, labels are taken from the samples
    fn train(&mut self, samples: &[Sample]) -> anyhow::Result<()>;
    /// serializes the fitted model in the backend's own format
    fn write(&self, filepath: &Path) -> anyhow::Result<()>;
}

/// signature of a capability probe, `None` means the backend is absent
pub type Probe = fn(&FRparams) -> Option<Box<dyn FaceRecognizer>>;

/// looks for an LBPH recognizer in the runtime environment
#[cfg(feature = "opencv")]
pub fn probe(params: &FRparams) -> Option<Box<dyn FaceRecognizer>> {
    match lbph::OpenCvLbph::create(params) {
        Ok(recognizer) => {
            tracing::debug!("using opencv LBPH recognizer with {:?}", params);
            Some(Box::new(recognizer))
        }
        Err(error) => {
            tracing::warn!("could not construct the opencv LBPH recognizer\n{}", error);
            None
        }
    }
}

/// looks for an LBPH recognizer in the runtime environment
#[cfg(not(feature = "opencv"))]
pub fn probe(_params: &FRparams) -> Option<Box<dyn FaceRecognizer>> {
    tracing::debug!("built without the opencv feature, no LBPH recognizer available");
    None
}

#[cfg(feature = "opencv")]
mod lbph {
    use anyhow::Context;
    use opencv::{
        core::{Mat, Ptr, Scalar, Vector, CV_8UC1},
        face::{FaceRecognizerTrait, FaceRecognizerTraitConst, LBPHFaceRecognizer},
        prelude::MatTraitManual,
    };
    use std::path::Path;

    use super::{FRparams, FaceRecognizer};
    use crate::data::Sample;

    pub struct OpenCvLbph {
        inner: Ptr<LBPHFaceRecognizer>,
    }

    impl OpenCvLbph {
        pub fn create(params: &FRparams) -> anyhow::Result<Self> {
            let inner = LBPHFaceRecognizer::create(
                params.radius,
                params.neighbors,
                params.grid_x,
                params.grid_y,
                params.threshold,
            )?;
            Ok(Self { inner })
        }
    }

    fn to_mat(sample: &Sample) -> anyhow::Result<Mat> {
        let (width, height) = sample.pixels.dimensions();
        let mut mat = Mat::new_rows_cols_with_default(
            height as i32,
            width as i32,
            CV_8UC1,
            Scalar::all(0.0),
        )?;
        mat.data_bytes_mut()?.copy_from_slice(sample.pixels.as_raw());
        Ok(mat)
    }

    impl FaceRecognizer for OpenCvLbph {
        fn train(&mut self, samples: &[Sample]) -> anyhow::Result<()> {
            let mut images: Vector<Mat> = Vector::with_capacity(samples.len());
            let mut labels: Vector<i32> = Vector::with_capacity(samples.len());
            for sample in samples {
                images.push(to_mat(sample)?);
                labels.push(sample.label);
            }
            FaceRecognizerTrait::train(&mut self.inner, &images, &labels)?;
            Ok(())
        }

        fn write(&self, filepath: &Path) -> anyhow::Result<()> {
            let filepath = filepath
                .to_str()
                .context("classifier path is not valid utf-8")?;
            FaceRecognizerTraitConst::write(&self.inner, filepath)?;
            Ok(())
        }
    }
}
