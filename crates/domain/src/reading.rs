//! Readings — the result of a device value read.
//!
//! A reading holds one or more fixed-point values sharing a decimal
//! scale: the physical quantity is `value × 10^scale`. Integers are used
//! instead of floats so readings stay exact and comparable.

use serde::{Deserialize, Serialize};

/// An ordered sequence of fixed-point values produced by one read.
///
/// An empty reading is the explicit "no data" signal; responders treat
/// it the same as a transient read failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    values: Vec<i32>,
    scale: i8,
}

impl Reading {
    /// Create a reading from raw values and their shared decimal scale.
    #[must_use]
    pub fn new(values: Vec<i32>, scale: i8) -> Self {
        Self { values, scale }
    }

    /// A single-value reading.
    #[must_use]
    pub fn single(value: i32, scale: i8) -> Self {
        Self::new(vec![value], scale)
    }

    /// The explicit "no data" reading.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Number of values in this reading.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Whether this reading carries no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The first value, if any.
    ///
    /// Responders only consume the first value of multi-value readings;
    /// the remainder is deliberately not exposed over the endpoint.
    #[must_use]
    pub fn first(&self) -> Option<i32> {
        self.values.first().copied()
    }

    /// All values, in read order.
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// The shared decimal scale.
    #[must_use]
    pub fn scale(&self) -> i8 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_dimension_and_first_value() {
        let reading = Reading::new(vec![2215, 40], -2);
        assert_eq!(reading.dimension(), 2);
        assert_eq!(reading.first(), Some(2215));
        assert_eq!(reading.scale(), -2);
    }

    #[test]
    fn should_signal_no_data_with_empty_reading() {
        let reading = Reading::empty();
        assert!(reading.is_empty());
        assert_eq!(reading.dimension(), 0);
        assert_eq!(reading.first(), None);
    }

    #[test]
    fn should_keep_values_in_read_order() {
        let reading = Reading::new(vec![1, 2, 3], 0);
        assert_eq!(reading.values(), &[1, 2, 3]);
    }
}
