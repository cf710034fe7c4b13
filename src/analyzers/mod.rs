//! Visit series averaging.
//!
//! [`average`] averages visits per distinct date, [`weekday`] splits a series
//! by weekday before averaging, and [`analyzer`] dispatches between the two.

pub mod analyzer;
pub mod average;
pub mod types;
pub mod weekday;
