//! # saulhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** adapters must implement (driven/outbound):
//!   - `DeviceRegistry` — positional and by-class device lookup, value reads
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SenseService` — resolve a class to a device, read it, encode the
//!     first value into a bounded reply
//!   - `RegistryService` — device descriptor records and device counts
//! - Hold the **route table** and dispatch each request to exactly one
//!   handler (`Router`)
//! - Parse the `class=<int>` selection query
//!
//! ## Dependency rule
//! Depends on `saulhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod query;
pub mod router;
pub mod services;
