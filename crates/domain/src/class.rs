//! Sensor/actuator classes — the physical quantity or actuator kind a
//! device represents.
//!
//! Each class carries a stable one-byte wire code so clients can select a
//! class numerically (`/sensor?class=130`). The code space follows the
//! registry convention of category bits in the upper half: `0x40` for
//! actuators, `0x80` for sensors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Enumerated device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorClass {
    /// Servo actuator.
    ActServo,
    /// Temperature sensor.
    SenseTemp,
    /// Humidity sensor.
    SenseHum,
    /// Pressure sensor.
    SensePress,
    /// Voltage sensor.
    SenseVoltage,
}

impl SensorClass {
    /// All known classes, in ascending code order.
    pub const ALL: [Self; 5] = [
        Self::ActServo,
        Self::SenseTemp,
        Self::SenseHum,
        Self::SensePress,
        Self::SenseVoltage,
    ];

    /// The one-byte wire code for this class.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::ActServo => 0x45,
            Self::SenseTemp => 0x82,
            Self::SenseHum => 0x83,
            Self::SensePress => 0x89,
            Self::SenseVoltage => 0x91,
        }
    }

    /// Resolve a wire code back to a class.
    ///
    /// Unknown codes return `None`; they are not an error at this level,
    /// they simply never match a registered device.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.code() == code)
    }

    /// Registry-style class name, as it appears in device records.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ActServo => "ACT_SERVO",
            Self::SenseTemp => "SENSE_TEMP",
            Self::SenseHum => "SENSE_HUM",
            Self::SensePress => "SENSE_PRESS",
            Self::SenseVoltage => "SENSE_VOLTAGE",
        }
    }
}

impl fmt::Display for SensorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown class name.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown sensor class: {0:?}")]
pub struct UnknownClass(pub String);

impl FromStr for SensorClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| UnknownClass(s.to_string()))
    }
}
