use crate::analyzers::average::series_average;
use crate::analyzers::types::GroupedResult;
use crate::config::Zone;
use crate::series::DataPoint;
use chrono::Weekday;
use indexmap::IndexMap;
use tracing::debug;

/// English weekday names indexed by days since Sunday.
pub static WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// English name of `day`.
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_sunday() as usize]
}

/// Partitions `series` into buckets keyed by weekday name.
///
/// Buckets are ordered by the first appearance of their weekday, and points
/// keep their input order within a bucket. Weekdays with no points get no
/// bucket.
pub fn group_by_weekday(
    series: &[DataPoint],
    zone: Zone,
) -> IndexMap<&'static str, Vec<DataPoint>> {
    let mut buckets: IndexMap<&'static str, Vec<DataPoint>> = IndexMap::new();

    for point in series {
        buckets
            .entry(weekday_name(zone.weekday(&point.date)))
            .or_default()
            .push(*point);
    }

    buckets
}

/// Averages each weekday bucket of `series` independently.
pub fn average_by_weekday(series: &[DataPoint], zone: Zone) -> GroupedResult {
    let buckets = group_by_weekday(series, zone);
    debug!(points = series.len(), weekdays = buckets.len(), %zone, "Grouped series by weekday");

    buckets
        .into_iter()
        .map(|(name, bucket)| (name, series_average(&bucket)))
        .collect()
}
