//! Shared types for iio-presence

use crate::sensors::channel::Channel;
use std::path::PathBuf;

/// Why a single sensor value could not be produced
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("{}: no such file", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {} failed with {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("channel {0} has no offset/raw/scale calibration")]
    UnsupportedChannel(Channel),
}

impl SensorError {
    /// Classify an I/O failure on `path`
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
