//! Registry service — device descriptor records and device counts.

use saulhub_domain::message::{Response, Status};
use saulhub_domain::payload::BoundedPayload;

use crate::ports::DeviceRegistry;
use crate::services::sense_service::DEVICE_NOT_FOUND;

/// Longest accepted device-info payload: a small decimal index.
pub const MAX_INDEX_DIGITS: usize = 5;

/// Application service for registry introspection.
pub struct RegistryService<R> {
    registry: R,
}

impl<R: DeviceRegistry> RegistryService<R> {
    /// Create a new service backed by the given registry.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Handle `POST /saul/dev`: the payload is a decimal device index,
    /// the reply is the matching `"<index>,<class>,<name>\n"` record.
    ///
    /// The record is formatted into an owned scratch buffer first and
    /// copied into the reply only when it fits; a record that does not
    /// fit becomes an internal-error response, never a truncated one.
    #[tracing::instrument(skip(self, payload))]
    #[must_use]
    pub fn device_info(&self, payload: &[u8], capacity: usize) -> Response {
        let Some(position) = parse_index(payload) else {
            return Response::empty(Status::BadRequest);
        };

        let Some(device) = self.registry.find_by_index(position) else {
            let mut reply = BoundedPayload::new(capacity);
            if reply.try_push_str(DEVICE_NOT_FOUND).is_err() {
                tracing::error!(capacity, "reply buffer too small for diagnostic payload");
                return Response::empty(Status::InternalError);
            }
            return reply.into_response(Status::NotFound);
        };

        let record = device.record().to_string();
        let mut reply = BoundedPayload::new(capacity);
        match reply.try_push_str(&record) {
            Ok(()) => reply.into_response(Status::NoContent),
            Err(err) => {
                tracing::error!(
                    required = err.required,
                    capacity = err.capacity,
                    "reply buffer too small for device record"
                );
                Response::empty(Status::InternalError)
            }
        }
    }

    /// Handle `GET /saul/cnt`: the number of registered devices as
    /// decimal text.
    #[tracing::instrument(skip(self))]
    #[must_use]
    pub fn device_count(&self, capacity: usize) -> Response {
        let count = self.registry.count().to_string();
        let mut reply = BoundedPayload::new(capacity);
        match reply.try_push_str(&count) {
            Ok(()) => reply.into_response(Status::Content),
            Err(err) => {
                tracing::error!(
                    required = err.required,
                    capacity = err.capacity,
                    "reply buffer too small for device count"
                );
                Response::empty(Status::InternalError)
            }
        }
    }
}

/// Strict decimal parse of the index payload.
///
/// Rejects empty, overlong, non-UTF-8, and non-digit payloads instead
/// of defaulting to zero on garbage.
fn parse_index(payload: &[u8]) -> Option<usize> {
    if payload.is_empty() || payload.len() > MAX_INDEX_DIGITS {
        return None;
    }
    let text = std::str::from_utf8(payload).ok()?;
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
