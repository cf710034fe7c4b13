use crate::analyzers::average::series_average;
use crate::analyzers::types::Average;
use crate::analyzers::weekday::average_by_weekday;
use crate::config::StatsConfig;
use crate::series::DataPoint;
use tracing::debug;

/// Averages `series` as a whole, or per weekday when `group_by_weekday` is set.
///
/// Weekdays are read in the process-local time zone. Use [`analyze`] to pick
/// another zone.
pub fn get_average(series: &[DataPoint], group_by_weekday: bool) -> Average {
    analyze(
        series,
        &StatsConfig {
            group_by_weekday,
            ..Default::default()
        },
    )
}

/// Runs the averaging mode selected by `config` over `series`.
#[tracing::instrument(level = "debug", skip(series), fields(points = series.len()))]
pub fn analyze(series: &[DataPoint], config: &StatsConfig) -> Average {
    let average = if config.group_by_weekday {
        Average::ByWeekday(average_by_weekday(series, config.timezone))
    } else {
        Average::Overall(series_average(series))
    };

    match &average {
        Average::Overall(result) if !result.has_data() => {
            debug!("Series has no dates, average is NaN");
        }
        Average::Overall(result) => {
            debug!(average_visits = result.average_visits, "Average computed");
        }
        Average::ByWeekday(grouped) => {
            debug!(weekdays = grouped.len(), "Weekday averages computed");
        }
    }

    average
}
