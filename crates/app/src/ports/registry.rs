//! Registry port — the injected device-registry capability.
//!
//! The registry itself (hardware drivers, discovery, ordering) lives
//! behind this trait. Handlers treat it as read-only shared state: every
//! lookup returns an owned [`DeviceHandle`] snapshot, never a live
//! reference into registry internals. If the registry can mutate
//! concurrently, index-based lookups are racy by construction; each
//! individual call must still be an internally consistent snapshot.

use std::sync::Arc;

use saulhub_domain::class::SensorClass;
use saulhub_domain::device::DeviceHandle;
use saulhub_domain::error::RegistryError;
use saulhub_domain::reading::Reading;

/// Read-only access to an ordered collection of device descriptors.
///
/// All operations are synchronous and non-yielding; blocking IO belongs
/// in the adapter behind this trait, not in the request path.
pub trait DeviceRegistry: Send + Sync {
    /// The device at the given position in registry order.
    fn find_by_index(&self, index: usize) -> Option<DeviceHandle>;

    /// The first device of the given class, in registry order.
    fn find_by_class(&self, class: SensorClass) -> Option<DeviceHandle>;

    /// Number of registered devices.
    fn count(&self) -> usize;

    /// Read the current value(s) of a device.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the device cannot produce a value
    /// or the handle has gone stale.
    fn read(&self, device: &DeviceHandle) -> Result<Reading, RegistryError>;
}

// Services share one registry instance; these impls let them hold it
// through a reference or an `Arc` without a wrapper type.

impl<R: DeviceRegistry + ?Sized> DeviceRegistry for &R {
    fn find_by_index(&self, index: usize) -> Option<DeviceHandle> {
        (**self).find_by_index(index)
    }

    fn find_by_class(&self, class: SensorClass) -> Option<DeviceHandle> {
        (**self).find_by_class(class)
    }

    fn count(&self) -> usize {
        (**self).count()
    }

    fn read(&self, device: &DeviceHandle) -> Result<Reading, RegistryError> {
        (**self).read(device)
    }
}

impl<R: DeviceRegistry + ?Sized> DeviceRegistry for Arc<R> {
    fn find_by_index(&self, index: usize) -> Option<DeviceHandle> {
        (**self).find_by_index(index)
    }

    fn find_by_class(&self, class: SensorClass) -> Option<DeviceHandle> {
        (**self).find_by_class(class)
    }

    fn count(&self) -> usize {
        (**self).count()
    }

    fn read(&self, device: &DeviceHandle) -> Result<Reading, RegistryError> {
        (**self).read(device)
    }
}
