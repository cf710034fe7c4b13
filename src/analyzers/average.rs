use crate::analyzers::types::AverageResult;
use crate::series::DataPoint;
use std::collections::HashSet;
use tracing::debug;

/// Averages visits over the distinct dates of `series`.
///
/// Every point contributes its visits to the total, but a date shared by
/// several points is counted once in the denominator. An empty series has no
/// dates and yields `NaN`.
pub fn series_average(series: &[DataPoint]) -> AverageResult {
    let dates: HashSet<i64> = series.iter().map(DataPoint::date_key).collect();
    let total: f64 = series.iter().map(|point| point.visits).sum();

    debug!(
        points = series.len(),
        distinct_dates = dates.len(),
        total,
        "Averaging series"
    );

    AverageResult {
        average_visits: total / dates.len() as f64,
    }
}
