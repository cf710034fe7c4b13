//! Result types produced by the analyzers.

use indexmap::IndexMap;
use serde::Serialize;

/// Average visits per distinct date.
///
/// `NaN` means the averaged series had no dates; serialized as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageResult {
    pub average_visits: f64,
}

impl AverageResult {
    /// Returns `false` when the average is `NaN`, i.e. there was nothing to average.
    pub fn has_data(&self) -> bool {
        !self.average_visits.is_nan()
    }
}

/// Averages keyed by weekday name, in the order each weekday first appears in
/// the input. Only weekdays present in the input appear.
pub type GroupedResult = IndexMap<&'static str, AverageResult>;

/// Output of the top-level dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Average {
    Overall(AverageResult),
    ByWeekday(GroupedResult),
}

impl Average {
    pub fn overall(&self) -> Option<&AverageResult> {
        match self {
            Average::Overall(result) => Some(result),
            Average::ByWeekday(_) => None,
        }
    }

    pub fn by_weekday(&self) -> Option<&GroupedResult> {
        match self {
            Average::ByWeekday(grouped) => Some(grouped),
            Average::Overall(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_data() {
        assert!(AverageResult { average_visits: 0.0 }.has_data());
        assert!(!AverageResult { average_visits: f64::NAN }.has_data());
    }

    #[test]
    fn test_overall_serializes_camel_case() {
        let avg = Average::Overall(AverageResult { average_visits: 32.0 });
        assert_eq!(serde_json::to_string(&avg).unwrap(), r#"{"averageVisits":32.0}"#);
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let result = AverageResult { average_visits: f64::NAN };
        assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"averageVisits":null}"#);
    }

    #[test]
    fn test_grouped_serializes_as_map() {
        let mut grouped = GroupedResult::new();
        grouped.insert("Monday", AverageResult { average_visits: 3.0 });
        let json = serde_json::to_value(Average::ByWeekday(grouped)).unwrap();
        assert_eq!(json["Monday"]["averageVisits"], 3.0);
    }

    #[test]
    fn test_accessors() {
        let overall = Average::Overall(AverageResult { average_visits: 1.0 });
        assert!(overall.overall().is_some());
        assert!(overall.by_weekday().is_none());

        let grouped = Average::ByWeekday(GroupedResult::new());
        assert!(grouped.overall().is_none());
        assert!(grouped.by_weekday().unwrap().is_empty());
    }
}
