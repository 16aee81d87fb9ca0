pub mod config;
pub mod data;
pub mod error;
pub mod facerecognition;
pub mod trainer;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use trainer::{train, train_with, Outcome, TrainReport, PLACEHOLDER_CLASSIFIER};
