//! Application services — use-case implementations.
//!
//! Each service struct accepts a port trait implementation via a generic
//! parameter (constructor injection), keeping this layer decoupled from
//! concrete adapters. Services return complete [`Response`]s: the
//! status-code policy and the capacity-fit policy live here and nowhere
//! else.
//!
//! [`Response`]: saulhub_domain::message::Response

pub mod registry_service;
pub mod sense_service;
