//! # saulhub-adapter-registry-mem
//!
//! In-memory [`DeviceRegistry`] implementation backed by virtual
//! devices. Used for tests, demos, and as the reference adapter; a
//! hardware-backed registry would implement the same port against real
//! drivers.
//!
//! Registration order defines device positions. The device list is
//! guarded by an `RwLock`: request handlers only take read locks, so
//! concurrent dispatch never blocks on itself. Positions handed out in
//! [`DeviceHandle`]s stay valid under concurrent registration because
//! devices are only ever appended.
//!
//! ## Dependency rule
//!
//! Depends on `saulhub-app` (port traits) and `saulhub-domain` only.

mod devices;

use std::sync::RwLock;

use saulhub_app::ports::DeviceRegistry;
use saulhub_domain::class::SensorClass;
use saulhub_domain::device::DeviceHandle;
use saulhub_domain::error::{RegistryError, SaulHubError};
use saulhub_domain::reading::Reading;

pub use devices::VirtualDevice;

struct RegisteredDevice {
    class: SensorClass,
    name: String,
    device: VirtualDevice,
}

impl RegisteredDevice {
    fn handle(&self, position: usize) -> DeviceHandle {
        DeviceHandle {
            position,
            class: self.class,
            name: self.name.clone(),
        }
    }
}

/// An append-only, in-memory device registry.
#[derive(Default)]
pub struct MemoryRegistry {
    devices: RwLock<Vec<RegisteredDevice>>,
}

impl MemoryRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device, returning the position it was assigned.
    ///
    /// # Errors
    ///
    /// Returns [`SaulHubError::Validation`] when the name is empty or
    /// contains characters reserved by the CSV record format.
    ///
    /// # Panics
    ///
    /// Panics if the registry lock is poisoned.
    pub fn register(
        &self,
        class: SensorClass,
        name: impl Into<String>,
        device: VirtualDevice,
    ) -> Result<usize, SaulHubError> {
        let entry = RegisteredDevice {
            class,
            name: name.into(),
            device,
        };
        // Validation rules live on the handle type; position is not
        // part of what gets validated.
        entry.handle(0).validate()?;

        let mut devices = self.devices.write().expect("registry lock poisoned");
        devices.push(entry);
        Ok(devices.len() - 1)
    }
}

impl DeviceRegistry for MemoryRegistry {
    fn find_by_index(&self, index: usize) -> Option<DeviceHandle> {
        let devices = self.devices.read().expect("registry lock poisoned");
        devices.get(index).map(|entry| entry.handle(index))
    }

    fn find_by_class(&self, class: SensorClass) -> Option<DeviceHandle> {
        let devices = self.devices.read().expect("registry lock poisoned");
        devices
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.class == class)
            .map(|(index, entry)| entry.handle(index))
    }

    fn count(&self) -> usize {
        self.devices.read().expect("registry lock poisoned").len()
    }

    fn read(&self, device: &DeviceHandle) -> Result<Reading, RegistryError> {
        let devices = self.devices.read().expect("registry lock poisoned");
        let entry = devices
            .get(device.position)
            .ok_or(RegistryError::StaleHandle {
                position: device.position,
            })?;
        entry.device.read(&entry.name)
    }
}
