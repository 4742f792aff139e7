//! Sense service — resolves a sensor/actuator class to a device, reads
//! it, and encodes the first value into a bounded reply.
//!
//! This is the single source of truth for the error/encoding policy of
//! every value-returning route: the per-class routes (`/temp`, `/hum`,
//! `/press`, `/voltage`, `/servo`) and the query-selected `/sensor`
//! route all delegate here.

use saulhub_domain::class::SensorClass;
use saulhub_domain::message::{Response, Status};
use saulhub_domain::payload::BoundedPayload;

use crate::ports::DeviceRegistry;
use crate::query::{self, QueryError};

/// Diagnostic payload when no device of the requested class exists.
pub const DEVICE_NOT_FOUND: &str = "device not found";
/// Diagnostic payload when a device exists but produced no data.
pub const NO_VALUES_FOUND: &str = "no values found";

/// Application service for class-based value reads.
pub struct SenseService<R> {
    registry: R,
}

impl<R: DeviceRegistry> SenseService<R> {
    /// Create a new service backed by the given registry.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Look up a device by class, read it, and encode the first value.
    ///
    /// Misses and empty readings produce a not-found response carrying a
    /// diagnostic message only when it fits the reply capacity. A value
    /// that does not fit is never truncated; it becomes an
    /// internal-error response instead.
    #[tracing::instrument(skip(self))]
    #[must_use]
    pub fn respond_by_class(&self, class: SensorClass, capacity: usize) -> Response {
        let Some(device) = self.registry.find_by_class(class) else {
            return Self::not_found(DEVICE_NOT_FOUND, capacity);
        };

        let reading = match self.registry.read(&device) {
            Ok(reading) => reading,
            Err(err) => {
                tracing::warn!(device = %device.name, error = %err, "device read failed");
                return Self::not_found(NO_VALUES_FOUND, capacity);
            }
        };
        // Multi-value readings are truncated to the first value; the
        // remainder is a documented limitation of this endpoint.
        let Some(value) = reading.first() else {
            return Self::not_found(NO_VALUES_FOUND, capacity);
        };

        let mut payload = BoundedPayload::new(capacity);
        match payload.try_push_str(&value.to_string()) {
            Ok(()) => payload.into_response(Status::Content),
            Err(err) => {
                tracing::error!(device = %device.name, %err, "reply buffer too small for value");
                Response::empty(Status::InternalError)
            }
        }
    }

    /// Look up a device by its numeric class code.
    ///
    /// Codes that name no known class behave exactly like a class with
    /// no registered device: not-found.
    #[tracing::instrument(skip(self))]
    #[must_use]
    pub fn respond_by_code(&self, code: u8, capacity: usize) -> Response {
        match SensorClass::from_code(code) {
            Some(class) => self.respond_by_class(class, capacity),
            None => Self::not_found(DEVICE_NOT_FOUND, capacity),
        }
    }

    /// Handle the `/sensor` route: parse `class=<int>` out of the query
    /// string and delegate to the class responder.
    ///
    /// A missing query, an out-of-range length, or any parse failure is
    /// a bad request; the registry is not consulted in those cases.
    #[tracing::instrument(skip(self))]
    #[must_use]
    pub fn respond_by_query(&self, query: Option<&str>, capacity: usize) -> Response {
        let Some(query) = query else {
            return Response::empty(Status::BadRequest);
        };
        match query::parse_class_query(query) {
            Ok(code) => self.respond_by_code(code, capacity),
            Err(err @ QueryError::LengthOutOfRange(_)) => {
                tracing::debug!(%err, "rejected selection query");
                Response::empty(Status::BadRequest)
            }
            Err(err) => {
                tracing::debug!(query, %err, "rejected selection query");
                Response::empty(Status::BadRequest)
            }
        }
    }

    /// `GET /temp` — first temperature value.
    #[must_use]
    pub fn temperature(&self, capacity: usize) -> Response {
        self.respond_by_class(SensorClass::SenseTemp, capacity)
    }

    /// `GET /hum` — first humidity value.
    #[must_use]
    pub fn humidity(&self, capacity: usize) -> Response {
        self.respond_by_class(SensorClass::SenseHum, capacity)
    }

    /// `GET /press` — first pressure value.
    #[must_use]
    pub fn pressure(&self, capacity: usize) -> Response {
        self.respond_by_class(SensorClass::SensePress, capacity)
    }

    /// `GET /voltage` — first voltage value.
    #[must_use]
    pub fn voltage(&self, capacity: usize) -> Response {
        self.respond_by_class(SensorClass::SenseVoltage, capacity)
    }

    /// `GET /servo` — first servo position value.
    #[must_use]
    pub fn servo(&self, capacity: usize) -> Response {
        self.respond_by_class(SensorClass::ActServo, capacity)
    }

    /// A not-found response carrying `message` only when it fits.
    ///
    /// Diagnostics are best-effort: if the reply capacity cannot hold
    /// the message, the payload stays empty rather than truncated.
    fn not_found(message: &str, capacity: usize) -> Response {
        let mut payload = BoundedPayload::new(capacity);
        if let Err(err) = payload.try_push_str(message) {
            tracing::debug!(%err, "diagnostic message dropped");
        }
        payload.into_response(Status::NotFound)
    }
}
