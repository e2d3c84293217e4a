//! Fake sysfs trees for tests

use super::channel::{Channel, FileKind};
use super::iio::IioReader;
use tempfile::TempDir;

pub struct FakeSysfs {
    dir: TempDir,
}

impl FakeSysfs {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn reader(&self) -> IioReader {
        IioReader::new(self.dir.path())
    }

    /// Write `contents` verbatim to the companion file of `channel`
    pub fn set(&self, channel: Channel, kind: FileKind, contents: &str) -> &Self {
        let path = self.reader().build_path(kind, channel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
        self
    }

    pub fn calibration(&self, channel: Channel, offset: f64, raw: f64, scale: f64) -> &Self {
        self.set(channel, FileKind::Offset, &format!("{}\n", offset))
            .set(channel, FileKind::Raw, &format!("{}\n", raw))
            .set(channel, FileKind::Scale, &format!("{}\n", scale))
    }

    pub fn axis(&self, channel: Channel, raw: f64, scale: f64) -> &Self {
        self.set(channel, FileKind::Raw, &format!("{}\n", raw))
            .set(channel, FileKind::Scale, &format!("{}\n", scale))
    }
}
