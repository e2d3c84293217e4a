//! IIO sysfs reader
//!
//! Every value is a single numeric literal in its own file:
//! `<root>/iio:device<N>/in_<channel>_<kind>`. Reads are blocking and
//! happen once per call; nothing is cached.

use super::channel::{Channel, FileKind};
use crate::shared::SensorError;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SYSFS_ROOT: &str = "/sys/bus/iio/devices";

// === Helper Functions ===

/// Read `path` and parse its trimmed contents as a float
///
/// Failures are logged here; callers decide what to fall back to.
pub fn read_float(path: &Path) -> Result<f64, SensorError> {
    let result = fs::read_to_string(path)
        .map_err(|e| SensorError::from_io(path.to_path_buf(), e))
        .and_then(|data| {
            data.trim().parse::<f64>().map_err(|e| SensorError::Parse {
                path: path.to_path_buf(),
                source: e,
            })
        });

    if let Err(e) = &result {
        tracing::warn!("Sensor read failed: {}", e);
    }
    result
}

// === Reader ===

#[derive(Debug, Clone)]
pub struct IioReader {
    root: PathBuf,
}

impl Default for IioReader {
    fn default() -> Self {
        Self::new(DEFAULT_SYSFS_ROOT)
    }
}

impl IioReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build_path(&self, kind: FileKind, channel: Channel) -> PathBuf {
        self.root
            .join(format!("iio:device{}", channel.device_index()))
            .join(format!("in_{}_{}", channel.name(), kind.as_str()))
    }

    fn read(&self, kind: FileKind, channel: Channel) -> Result<f64, SensorError> {
        read_float(&self.build_path(kind, channel))
    }

    /// `(offset + raw) * scale` for temperature or humidity
    ///
    /// All three files are read even if an earlier one fails, so every
    /// broken file shows up in the log.
    pub fn read_calibrated(&self, channel: Channel) -> Result<f64, SensorError> {
        if !channel.has_offset() {
            return Err(SensorError::UnsupportedChannel(channel));
        }

        let offset = self.read(FileKind::Offset, channel);
        let raw = self.read(FileKind::Raw, channel);
        let scale = self.read(FileKind::Scale, channel);

        Ok((offset? + raw?) * scale?)
    }

    /// `scale * raw` for x, y and z; any failing axis fails the whole triple
    pub fn read_acceleration(&self) -> Result<[f64; 3], SensorError> {
        let mut accel = [0.0; 3];
        for (value, axis) in accel.iter_mut().zip(Channel::ACCELERATION) {
            let scale = self.read(FileKind::Scale, axis);
            let raw = self.read(FileKind::Raw, axis);
            *value = scale? * raw?;
        }
        Ok(accel)
    }
}
