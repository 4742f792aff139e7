//! Device descriptors — handles into the registry and the CSV records
//! emitted by the device-info operation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::class::{SensorClass, UnknownClass};
use crate::error::ValidationError;

/// Owned snapshot of a registry entry.
///
/// Handles are snapshots, not live references: `position` is the index
/// the device occupied in registry order at lookup time. If the registry
/// mutates concurrently, a handle can go stale — index-based reads after
/// that point may fail with a stale-handle error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceHandle {
    /// Index in registry order at lookup time.
    pub position: usize,
    /// Device class.
    pub class: SensorClass,
    /// Human-readable device name.
    pub name: String,
}

impl DeviceHandle {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when the name is empty,
    /// or [`ValidationError::UnsafeName`] when it contains characters
    /// reserved by the CSV record format.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.name.contains(',') || self.name.contains('\n') {
            return Err(ValidationError::UnsafeName {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// The CSV record describing this device.
    #[must_use]
    pub fn record(&self) -> DeviceRecord {
        DeviceRecord {
            position: self.position,
            class: self.class,
            name: self.name.clone(),
        }
    }
}

/// The descriptor line returned by the device-info operation:
/// `"<position>,<class>,<name>\n"`.
///
/// `Display` renders the wire form and `FromStr` parses it back; the
/// round-trip is exact because device names are validated to contain
/// neither `,` nor newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Index in registry order.
    pub position: usize,
    /// Device class.
    pub class: SensorClass,
    /// Device name.
    pub name: String,
}

impl fmt::Display for DeviceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{},{},{}", self.position, self.class, self.name)
    }
}

/// Error returned when parsing a malformed device record.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordParseError {
    /// The line does not have the `position,class,name` shape.
    #[error("malformed device record: {0:?}")]
    Malformed(String),
    /// The position field is not a decimal integer.
    #[error("invalid position in device record")]
    InvalidPosition(#[from] std::num::ParseIntError),
    /// The class field names no known class.
    #[error(transparent)]
    UnknownClass(#[from] UnknownClass),
}

impl FromStr for DeviceRecord {
    type Err = RecordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.strip_suffix('\n').unwrap_or(s);
        let mut fields = line.splitn(3, ',');
        let (Some(position), Some(class), Some(name)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(RecordParseError::Malformed(s.to_string()));
        };
        Ok(Self {
            position: position.parse()?,
            class: class.parse()?,
            name: name.to_string(),
        })
    }
}
