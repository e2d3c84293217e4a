//! One round of readings, as served to clients

use super::channel::Channel;
use super::iio::IioReader;
use std::fmt;

/// Calibrated values with every failed read replaced by 0
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Snapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub acceleration: [f64; 3],
}

impl Snapshot {
    /// Read temperature, humidity and acceleration in that order
    pub fn take(reader: &IioReader) -> Self {
        Self {
            temperature: reader
                .read_calibrated(Channel::Temperature)
                .unwrap_or_default(),
            humidity: reader.read_calibrated(Channel::Humidity).unwrap_or_default(),
            acceleration: reader.read_acceleration().unwrap_or_default(),
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.acceleration;
        writeln!(f, "temperature is: {} degC", self.temperature)?;
        writeln!(f, "humidity is: {}%", self.humidity)?;
        writeln!(f, "acceleration is x={} y={} z={}", x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::channel::FileKind;
    use crate::sensors::fixture::FakeSysfs;

    #[test]
    fn test_report_format() {
        let snapshot = Snapshot {
            temperature: 21.5,
            humidity: 40.0,
            acceleration: [0.0, -9.81, 0.125],
        };
        assert_eq!(
            snapshot.to_string(),
            "temperature is: 21.5 degC\n\
             humidity is: 40%\n\
             acceleration is x=0 y=-9.81 z=0.125\n"
        );
    }

    #[test]
    fn test_take_full_tree() {
        let sysfs = FakeSysfs::new();
        sysfs
            .calibration(Channel::Temperature, 2.0, 3.0, 10.0)
            .calibration(Channel::Humidity, 0.0, 80.0, 0.5);
        for axis in Channel::ACCELERATION {
            sysfs.axis(axis, 5.0, 2.0);
        }

        let snapshot = Snapshot::take(&sysfs.reader());
        assert_eq!(
            snapshot,
            Snapshot {
                temperature: 50.0,
                humidity: 40.0,
                acceleration: [10.0, 10.0, 10.0],
            }
        );
    }

    #[test]
    fn test_take_empty_tree_is_all_zero() {
        let sysfs = FakeSysfs::new();
        assert_eq!(Snapshot::take(&sysfs.reader()), Snapshot::default());
    }

    #[test]
    fn test_partial_acceleration_is_zeroed() {
        let sysfs = FakeSysfs::new();
        sysfs
            .axis(Channel::AccelX, 5.0, 2.0)
            .axis(Channel::AccelY, 5.0, 2.0)
            .set(Channel::AccelZ, FileKind::Raw, "garbage");

        let snapshot = Snapshot::take(&sysfs.reader());
        assert_eq!(snapshot.acceleration, [0.0; 3]);
    }
}
