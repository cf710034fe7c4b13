//! Analysis configuration.
//!
//! [`StatsConfig`] selects the averaging mode and the [`Zone`] in which a
//! point's weekday is read. It is stored as a plain JSON object:
//! ```json
//! {
//!   "group_by_weekday": true,
//!   "timezone": "+02:00"
//! }
//! ```
//! Both fields are optional.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Datelike, FixedOffset, Local, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Time zone used to derive the weekday of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Zone {
    /// The process-local time zone.
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl Zone {
    /// Weekday of `date` as observed in this zone.
    pub fn weekday(&self, date: &DateTime<Utc>) -> Weekday {
        match self {
            Zone::Local => date.with_timezone(&Local).weekday(),
            Zone::Utc => date.weekday(),
            Zone::Fixed(offset) => date.with_timezone(offset).weekday(),
        }
    }
}

impl FromStr for Zone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        if s.eq_ignore_ascii_case("utc") || s == "Z" {
            return Ok(Zone::Utc);
        }
        parse_offset(s)
            .map(Zone::Fixed)
            .with_context(|| format!("invalid timezone {s:?}"))
    }
}

/// Parses `+HH:MM` / `-HH:MM`. Colon-less and single-digit forms are rejected.
fn parse_offset(s: &str) -> Result<FixedOffset> {
    let bytes = s.as_bytes();
    if bytes.len() != 6 || !matches!(bytes[0], b'+' | b'-') || bytes[3] != b':' {
        bail!("offset must have the form +HH:MM");
    }
    Ok(s.parse::<FixedOffset>()?)
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Utc => f.write_str("utc"),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl TryFrom<String> for Zone {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.to_string()
    }
}

/// Settings for [`crate::analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Group averages by weekday instead of averaging the whole series.
    pub group_by_weekday: bool,
    /// Zone in which weekdays are read.
    pub timezone: Zone,
}

impl StatsConfig {
    /// Parses a config from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to deserialize stats config")
    }

    /// Loads the config from a JSON file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {path:?}"))?;
        Self::from_json_str(&content)
    }
}
