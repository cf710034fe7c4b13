//! Visit count series model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single (date, visit count) observation. Series are plain slices of these
/// and may repeat a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: DateTime<Utc>,
    pub visits: f64,
}

impl DataPoint {
    pub fn new(date: DateTime<Utc>, visits: f64) -> Self {
        Self { date, visits }
    }

    /// Builds a point from milliseconds since the Unix epoch.
    ///
    /// Returns `None` when the timestamp is outside the representable range.
    pub fn from_millis(millis: i64, visits: f64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|date| Self::new(date, visits))
    }

    /// Millisecond timestamp used as the identity of the point's date.
    pub fn date_key(&self) -> i64 {
        self.date.timestamp_millis()
    }
}
