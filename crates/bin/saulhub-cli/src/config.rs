//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `saulhub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use saulhub_adapter_registry_mem::VirtualDevice;
use saulhub_domain::class::SensorClass;
use saulhub_domain::reading::Reading;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Reply buffer settings.
    pub reply: ReplyConfig,
    /// Virtual devices to register, in order.
    #[serde(rename = "device")]
    pub devices: Vec<DeviceSeed>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Reply buffer configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReplyConfig {
    /// Reply capacity in bytes, applied to every request.
    pub capacity: usize,
}

/// One virtual device to register at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceSeed {
    /// Device class (`sense_temp`, `act_servo`, …).
    pub class: SensorClass,
    /// Device name, as it appears in device records.
    pub name: String,
    /// Fixed values returned on every read. Empty means a silent device
    /// that reports "no data".
    #[serde(default)]
    pub values: Vec<i32>,
    /// A series of value sets stepped through one per read, wrapping
    /// around. Takes precedence over `values` when present.
    #[serde(default)]
    pub series: Vec<Vec<i32>>,
    /// Decimal scale shared by the values.
    #[serde(default)]
    pub scale: i8,
}

impl DeviceSeed {
    /// The virtual device this seed describes.
    #[must_use]
    pub fn device(&self) -> VirtualDevice {
        if !self.series.is_empty() {
            VirtualDevice::cycling(
                self.series
                    .iter()
                    .map(|values| Reading::new(values.clone(), self.scale))
                    .collect(),
            )
        } else if self.values.is_empty() {
            VirtualDevice::Silent
        } else {
            VirtualDevice::constant(Reading::new(self.values.clone(), self.scale))
        }
    }
}

impl Config {
    /// Load configuration from `saulhub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("saulhub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from the given variable lookup.
    ///
    /// `SAULHUB_LOG` wins over `RUST_LOG`; an unparseable
    /// `SAULHUB_CAPACITY` leaves the configured capacity untouched.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SAULHUB_LOG").or_else(|| var("RUST_LOG")) {
            self.logging.filter = val;
        }
        if let Some(val) = var("SAULHUB_CAPACITY") {
            if let Ok(capacity) = val.parse() {
                self.reply.capacity = capacity;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.reply.capacity == 0 {
            return Err(ConfigError::Validation(
                "reply capacity must be at least 1 byte".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            reply: ReplyConfig::default(),
            devices: default_devices(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "saulhub=info".to_string(),
        }
    }
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// One virtual device per class, so every route answers out of the box.
fn default_devices() -> Vec<DeviceSeed> {
    [
        (SensorClass::SenseTemp, "virtual thermometer", 2215, -2),
        (SensorClass::SenseHum, "virtual hygrometer", 40, 0),
        (SensorClass::SensePress, "virtual barometer", 101_325, 0),
        (SensorClass::SenseVoltage, "virtual voltmeter", 3300, -3),
        (SensorClass::ActServo, "virtual servo", 90, 0),
    ]
    .into_iter()
    .map(|(class, name, value, scale)| DeviceSeed {
        class,
        name: name.to_string(),
        values: vec![value],
        series: Vec::new(),
        scale,
    })
    .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.filter, "saulhub=info");
        assert_eq!(config.reply.capacity, 64);
        assert_eq!(config.devices.len(), 5);
    }

    #[test]
    fn should_cover_every_class_in_default_devices() {
        let config = Config::default();
        for class in SensorClass::ALL {
            assert!(
                config.devices.iter().any(|seed| seed.class == class),
                "missing default device for {class}"
            );
        }
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.reply.capacity, 64);
        assert_eq!(config.devices.len(), 5);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'debug'

            [reply]
            capacity = 16

            [[device]]
            class = 'sense_temp'
            name = 'bench thermometer'
            values = [2215]
            scale = -2

            [[device]]
            class = 'act_servo'
            name = 'mute servo'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.reply.capacity, 16);
        assert_eq!(config.devices.len(), 2);
        assert_eq!(config.devices[0].class, SensorClass::SenseTemp);
        assert_eq!(config.devices[0].values, vec![2215]);
        assert!(config.devices[1].values.is_empty());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.reply.capacity, 64);
    }

    #[test]
    fn should_reject_zero_capacity() {
        let mut config = Config::default();
        config.reply.capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_capacity() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_map_valueless_seed_to_silent_device() {
        let seed = DeviceSeed {
            class: SensorClass::ActServo,
            name: "mute servo".to_string(),
            values: Vec::new(),
            series: Vec::new(),
            scale: 0,
        };
        assert!(matches!(seed.device(), VirtualDevice::Silent));
    }

    #[test]
    fn should_map_valued_seed_to_constant_device() {
        let seed = DeviceSeed {
            class: SensorClass::SenseTemp,
            name: "bench thermometer".to_string(),
            values: vec![2215],
            series: Vec::new(),
            scale: -2,
        };
        assert!(matches!(seed.device(), VirtualDevice::Constant(_)));
    }

    #[test]
    fn should_map_series_seed_to_cycling_device() {
        let seed = DeviceSeed {
            class: SensorClass::SenseTemp,
            name: "sweep thermometer".to_string(),
            values: vec![2215],
            series: vec![vec![2100], vec![2200], vec![2300]],
            scale: -2,
        };
        assert!(matches!(seed.device(), VirtualDevice::Cycling { .. }));
    }

    #[test]
    fn should_parse_series_from_toml() {
        let toml = "
            [[device]]
            class = 'sense_hum'
            name = 'breathing hygrometer'
            series = [[40], [45], [50]]
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.devices[0].series.len(), 3);
        assert!(matches!(
            config.devices[0].device(),
            VirtualDevice::Cycling { .. }
        ));
    }

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, val)| (*val).to_string())
        }
    }

    #[test]
    fn should_override_filter_from_saulhub_log() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[("SAULHUB_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_fall_back_to_rust_log_filter() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[("RUST_LOG", "warn")]));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_prefer_saulhub_log_over_rust_log() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[("RUST_LOG", "warn"), ("SAULHUB_LOG", "debug")]));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_override_capacity_from_environment() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[("SAULHUB_CAPACITY", "128")]));
        assert_eq!(config.reply.capacity, 128);
    }

    #[test]
    fn should_ignore_unparseable_capacity_override() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[("SAULHUB_CAPACITY", "plenty")]));
        assert_eq!(config.reply.capacity, 64);
    }

    #[test]
    fn should_keep_defaults_without_overrides() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[]));
        assert_eq!(config.logging.filter, "saulhub=info");
        assert_eq!(config.reply.capacity, 64);
    }
}
