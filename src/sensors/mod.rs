//! Sensors module - read-only IIO environmental and motion readings

pub mod channel;
pub mod iio;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod fixture;
