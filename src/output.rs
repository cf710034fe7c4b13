//! Rendering of averaging results.
//!
//! Results are logged through `tracing` or rendered as JSON in the shape
//! callers consume: `{"averageVisits": ...}` overall, or one such object per
//! weekday name in first-seen order.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

/// Emits the `Debug` form of an average at debug level.
pub fn print_pretty<T: std::fmt::Debug>(result: &T) {
    debug!("{:#?}", result);
}

/// Renders an average as indented JSON. `NaN` averages become `null`.
pub fn to_json<T: Serialize>(result: &T) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize result")
}

/// Emits the JSON rendering of an average at info level.
pub fn print_json<T: Serialize>(result: &T) -> Result<()> {
    info!("{}", to_json(result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::{Average, AverageResult, GroupedResult};

    #[test]
    fn test_print_pretty_nan_average() {
        print_pretty(&Average::Overall(AverageResult { average_visits: f64::NAN }));
    }

    #[test]
    fn test_print_json_empty_grouping() {
        assert!(print_json(&Average::ByWeekday(GroupedResult::new())).is_ok());
    }

    #[test]
    fn test_to_json_overall() {
        let json = to_json(&Average::Overall(AverageResult { average_visits: 4.5 })).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({ "averageVisits": 4.5 }));
    }

    #[test]
    fn test_to_json_empty_grouping() {
        assert_eq!(to_json(&Average::ByWeekday(GroupedResult::new())).unwrap(), "{}");
    }

    #[test]
    fn test_to_json_keeps_weekday_order() {
        let mut grouped = GroupedResult::new();
        grouped.insert("Sunday", AverageResult { average_visits: 2.0 });
        grouped.insert("Monday", AverageResult { average_visits: 6.0 });

        let json = to_json(&Average::ByWeekday(grouped)).unwrap();
        assert!(json.find("Sunday").unwrap() < json.find("Monday").unwrap());
    }

    #[test]
    fn test_to_json_nan_is_null() {
        let json = to_json(&AverageResult { average_visits: f64::NAN }).unwrap();
        assert!(json.contains("null"));
    }
}
