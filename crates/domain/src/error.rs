//! Common error types used across the workspace.
//!
//! Each layer defines typed errors here and converts via `#[from]`.
//! Services never bubble these to the transport directly — they are
//! translated into response status codes by the app layer.

/// Top-level error for domain and registry operations.
#[derive(Debug, thiserror::Error)]
pub enum SaulHubError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),
    /// The registry collaborator failed.
    #[error("registry error")]
    Registry(#[from] RegistryError),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A device name must not be empty.
    #[error("device name must not be empty")]
    EmptyName,
    /// Device names appear in CSV records, so the separator characters
    /// are reserved.
    #[error("device name must not contain ',' or newline: {name:?}")]
    UnsafeName {
        /// The offending name.
        name: String,
    },
}

/// Failures reported by a device registry implementation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The device could not produce a value.
    #[error("read failed for device {name:?}")]
    ReadFailed {
        /// Name of the device that failed.
        name: String,
    },
    /// The handle refers to a position that no longer exists.
    ///
    /// Handles are snapshots; this can happen if the registry mutates
    /// between lookup and read.
    #[error("stale device handle at position {position}")]
    StaleHandle {
        /// Registry position the handle was taken at.
        position: usize,
    },
}
