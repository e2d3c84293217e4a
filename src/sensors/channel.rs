//! Static IIO channel table

use std::fmt;

/// One physical measurement exposed under `/sys/bus/iio/devices`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Temperature,
    Humidity,
    AccelX,
    AccelY,
    AccelZ,
}

impl Channel {
    pub const ACCELERATION: [Channel; 3] = [Channel::AccelX, Channel::AccelY, Channel::AccelZ];

    /// Index `N` of the `iio:deviceN` directory holding this channel
    pub const fn device_index(self) -> u8 {
        match self {
            Channel::Temperature | Channel::Humidity => 0,
            Channel::AccelX | Channel::AccelY | Channel::AccelZ => 1,
        }
    }

    /// Fragment used in `in_<name>_<kind>` file names
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Temperature => "temp",
            Channel::Humidity => "humidityrelative",
            Channel::AccelX => "accel_x",
            Channel::AccelY => "accel_y",
            Channel::AccelZ => "accel_z",
        }
    }

    /// Whether the channel is calibrated as `(offset + raw) * scale`
    pub const fn has_offset(self) -> bool {
        matches!(self, Channel::Temperature | Channel::Humidity)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Companion file of a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Offset,
    Raw,
    Scale,
}

impl FileKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            FileKind::Offset => "offset",
            FileKind::Raw => "raw",
            FileKind::Scale => "scale",
        }
    }
}
