use core::fmt;
use std::{io, path::PathBuf};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NoTrainingData,
    DataDirectory(PathBuf, io::Error),
    Synthesis(PathBuf, image::ImageError),
    Persist(PathBuf, anyhow::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {
    fn description(&self) -> &str {
        match self {
            Self::NoTrainingData => "no labeled images survived collection, nothing to train on",
            Self::DataDirectory(..) => "could not create or list the data directory",
            Self::Synthesis(..) => "could not write a synthetic sample image",
            Self::Persist(..) => "could not write the classifier file",
        }
    }

    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoTrainingData => None,
            Self::DataDirectory(_, error) => Some(error),
            Self::Synthesis(_, error) => Some(error),
            Self::Persist(_, error) => Some(&**error),
        }
    }
}

/// why a candidate file was left out of training, never fatal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    // the name does not follow <prefix>.<id>.<index>.<ext>
    Unlabeled,
    // the name is fine but the bytes are not a readable image
    Undecodable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlabeled => write!(fmt, "file name carries no numeric identity label"),
            Self::Undecodable(reason) => write!(fmt, "could not decode image, {}", reason),
        }
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn display_uses_variant_name() {
        use super::Error;
        assert_eq!(Error::NoTrainingData.to_string(), "NoTrainingData");
    }

    #[test]
    fn underlying_cause_is_kept() {
        use super::Error;
        use std::error::Error as _;

        let error = Error::DataDirectory(
            std::path::PathBuf::from("data"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read only"),
        );
        assert_eq!(error.source().unwrap().to_string(), "read only");

        let error = Error::Persist(
            std::path::PathBuf::from("classifier.xml"),
            anyhow::anyhow!("images must all be the same size"),
        );
        assert_eq!(error.source().unwrap().to_string(), "images must all be the same size");
        assert!(Error::NoTrainingData.source().is_none());
    }

    #[test]
    fn skip_reasons_are_distinguishable() {
        use super::SkipReason;
        let corrupt = SkipReason::Undecodable("bad header".to_string());
        assert_ne!(corrupt, SkipReason::Unlabeled);
        assert!(corrupt.to_string().contains("bad header"));
    }
}
