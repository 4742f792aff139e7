//! Virtual device behaviours.
//!
//! Each behaviour models one shape of collaborator a handler can meet:
//! a device with stable data, a device whose data changes between
//! reads, a device with nothing to report, and a device whose read
//! fails outright.

use std::sync::atomic::{AtomicUsize, Ordering};

use saulhub_domain::error::RegistryError;
use saulhub_domain::reading::Reading;

/// A simulated device.
pub enum VirtualDevice {
    /// Always returns the same reading.
    Constant(Reading),
    /// Steps through a series of readings, wrapping around.
    Cycling {
        /// The series of readings, in order.
        readings: Vec<Reading>,
        /// Index of the next reading to return.
        cursor: AtomicUsize,
    },
    /// Always returns the explicit "no data" reading.
    Silent,
    /// Always fails to read.
    Failing,
}

impl VirtualDevice {
    /// A device that always returns `reading`.
    #[must_use]
    pub fn constant(reading: Reading) -> Self {
        Self::Constant(reading)
    }

    /// A device that cycles through `readings` one read at a time.
    ///
    /// An empty series behaves like [`VirtualDevice::Silent`].
    #[must_use]
    pub fn cycling(readings: Vec<Reading>) -> Self {
        Self::Cycling {
            readings,
            cursor: AtomicUsize::new(0),
        }
    }

    pub(crate) fn read(&self, name: &str) -> Result<Reading, RegistryError> {
        match self {
            Self::Constant(reading) => Ok(reading.clone()),
            Self::Cycling { readings, cursor } => {
                if readings.is_empty() {
                    return Ok(Reading::empty());
                }
                let index = cursor.fetch_add(1, Ordering::Relaxed) % readings.len();
                Ok(readings[index].clone())
            }
            Self::Silent => Ok(Reading::empty()),
            Self::Failing => Err(RegistryError::ReadFailed {
                name: name.to_string(),
            }),
        }
    }
}
