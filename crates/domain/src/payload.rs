//! Bounded payload buffer — the only way handlers assemble reply bytes.
//!
//! The transport hands each request a fixed reply capacity. Writing a
//! payload that does not fit would corrupt the enclosing response frame,
//! so every write goes through this owned, capped buffer: it either
//! accepts the bytes whole or rejects them and stays unchanged. There is
//! no partial write and no manual length arithmetic at call sites.

use crate::message::{Response, Status};

/// Error returned when bytes would exceed the buffer's capacity.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("payload of {required} bytes exceeds reply capacity of {capacity} bytes")]
pub struct CapacityError {
    /// Bytes the buffer would have needed to hold.
    pub required: usize,
    /// The fixed capacity of the buffer.
    pub capacity: usize,
}

/// An owned scratch buffer capped at the reply capacity.
#[derive(Debug)]
pub struct BoundedPayload {
    buf: Vec<u8>,
    capacity: usize,
}

impl BoundedPayload {
    /// Create an empty buffer with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append bytes, all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when the bytes would not fit; the
    /// buffer is left unchanged in that case.
    pub fn try_extend(&mut self, bytes: &[u8]) -> Result<(), CapacityError> {
        let required = self.buf.len() + bytes.len();
        if required > self.capacity {
            return Err(CapacityError {
                required,
                capacity: self.capacity,
            });
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Append a string, all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when the text would not fit.
    pub fn try_push_str(&mut self, text: &str) -> Result<(), CapacityError> {
        self.try_extend(text.as_bytes())
    }

    /// Number of bytes still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }

    /// Current number of buffered bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether no bytes have been buffered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the buffer into a response with the given status.
    #[must_use]
    pub fn into_response(self, status: Status) -> Response {
        Response {
            status,
            payload: self.buf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_bytes_up_to_capacity() {
        let mut payload = BoundedPayload::new(4);
        payload.try_extend(b"abcd").unwrap();
        assert_eq!(payload.remaining(), 0);
    }

    #[test]
    fn should_reject_bytes_beyond_capacity() {
        let mut payload = BoundedPayload::new(3);
        let err = payload.try_extend(b"abcd").unwrap_err();
        assert_eq!(
            err,
            CapacityError {
                required: 4,
                capacity: 3
            }
        );
    }

    #[test]
    fn should_leave_buffer_unchanged_on_rejected_write() {
        let mut payload = BoundedPayload::new(5);
        payload.try_push_str("ab").unwrap();
        assert!(payload.try_push_str("cdef").is_err());
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.remaining(), 3);
    }

    #[test]
    fn should_accumulate_across_multiple_writes() {
        let mut payload = BoundedPayload::new(6);
        payload.try_push_str("ab").unwrap();
        payload.try_push_str("cd").unwrap();
        let response = payload.into_response(Status::Content);
        assert_eq!(response.payload, b"abcd");
        assert_eq!(response.status, Status::Content);
    }

    #[test]
    fn should_allow_empty_response_from_zero_capacity() {
        let payload = BoundedPayload::new(0);
        let response = payload.into_response(Status::NotFound);
        assert!(response.payload.is_empty());
    }

    #[test]
    fn should_reject_any_write_at_zero_capacity() {
        let mut payload = BoundedPayload::new(0);
        assert!(payload.try_push_str("x").is_err());
        assert!(payload.is_empty());
    }
}
