//! # saulhub-domain
//!
//! Pure domain model for the saulhub registry endpoint.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, sensor classes, fixed-point readings
//! - Define **device descriptors** (handles into the registry, CSV records)
//! - Define the **message model** (requests, responses, status codes)
//! - Define the **bounded payload buffer** that enforces reply-capacity limits
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod class;
pub mod device;
pub mod error;
pub mod message;
pub mod payload;
pub mod reading;
