//! Message model — requests entering the router and the responses
//! handlers produce.
//!
//! Transport framing and option encoding live outside this workspace;
//! these types carry only what the routing core needs.

use serde::{Deserialize, Serialize};

/// Request method, mirroring the transport's method codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Get,
    Post,
}

/// Response status, a fixed taxonomy mapped onto the transport's codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Success with a value payload (2.05).
    Content,
    /// Success where the payload is informational (2.04).
    NoContent,
    /// Malformed input, recovered locally (4.00).
    BadRequest,
    /// Lookup miss or empty reading (4.04).
    NotFound,
    /// Buffer too small for a mandatory payload (5.00).
    InternalError,
}

impl Status {
    /// The raw wire code the transport layer frames responses with.
    #[must_use]
    pub fn raw(self) -> u8 {
        match self {
            Self::Content => 0x45,
            Self::NoContent => 0x44,
            Self::BadRequest => 0x80,
            Self::NotFound => 0x84,
            Self::InternalError => 0xA0,
        }
    }

    /// Whether this status is in the success class.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Content | Self::NoContent)
    }
}

/// A request as handed over by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Resource path, e.g. `/saul/dev`.
    pub path: String,
    /// Request method.
    pub method: Method,
    /// Optional payload bytes (device-info uses these as a decimal index).
    pub payload: Vec<u8>,
    /// Optional query string (sensor-type selection uses `class=<int>`).
    pub query: Option<String>,
    /// Maximum number of bytes the reply payload may occupy.
    pub capacity: usize,
}

impl Request {
    /// A payload-less GET with the given reply capacity.
    #[must_use]
    pub fn get(path: impl Into<String>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            method: Method::Get,
            payload: Vec::new(),
            query: None,
            capacity,
        }
    }

    /// A POST carrying the given payload bytes.
    #[must_use]
    pub fn post(path: impl Into<String>, payload: impl Into<Vec<u8>>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            method: Method::Post,
            payload: payload.into(),
            query: None,
            capacity,
        }
    }

    /// Attach a query string.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

/// A response produced by exactly one handler per request.
///
/// The payload never exceeds the capacity the request was built with;
/// handlers construct responses through
/// [`BoundedPayload`](crate::payload::BoundedPayload), which enforces
/// the bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Status code.
    pub status: Status,
    /// Payload bytes, bounded by the request's reply capacity.
    pub payload: Vec<u8>,
}

impl Response {
    /// A payload-less response with the given status.
    #[must_use]
    pub fn empty(status: Status) -> Self {
        Self {
            status,
            payload: Vec::new(),
        }
    }

    /// The payload interpreted as UTF-8, for diagnostics and tests.
    #[must_use]
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_statuses_to_wire_codes() {
        assert_eq!(Status::Content.raw(), 0x45);
        assert_eq!(Status::NoContent.raw(), 0x44);
        assert_eq!(Status::BadRequest.raw(), 0x80);
        assert_eq!(Status::NotFound.raw(), 0x84);
        assert_eq!(Status::InternalError.raw(), 0xA0);
    }

    #[test]
    fn should_classify_success_statuses() {
        assert!(Status::Content.is_success());
        assert!(Status::NoContent.is_success());
        assert!(!Status::BadRequest.is_success());
        assert!(!Status::NotFound.is_success());
        assert!(!Status::InternalError.is_success());
    }

    #[test]
    fn should_build_get_request_without_payload() {
        let request = Request::get("/temp", 64);
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/temp");
        assert!(request.payload.is_empty());
        assert_eq!(request.query, None);
        assert_eq!(request.capacity, 64);
    }

    #[test]
    fn should_attach_query_string() {
        let request = Request::get("/sensor", 64).with_query("class=130");
        assert_eq!(request.query.as_deref(), Some("class=130"));
    }

    #[test]
    fn should_expose_payload_as_utf8() {
        let response = Response {
            status: Status::Content,
            payload: b"2215".to_vec(),
        };
        assert_eq!(response.payload_str(), Some("2215"));
    }
}
