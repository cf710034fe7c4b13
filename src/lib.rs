pub mod analyzers;
pub mod config;
pub mod output;
pub mod series;

pub use analyzers::analyzer::{analyze, get_average};
pub use analyzers::average::series_average;
pub use analyzers::types::{Average, AverageResult, GroupedResult};
pub use analyzers::weekday::{WEEKDAY_NAMES, average_by_weekday, group_by_weekday, weekday_name};
pub use config::{StatsConfig, Zone};
pub use series::DataPoint;
