// src/data_input/log_data.rs

use chrono::{DateTime, NaiveDateTime, Utc};

/// Raw time value of an input row. Rig exports either log elapsed seconds
/// directly or stamp each row with an absolute wall-clock timestamp; both
/// normalize to seconds-since-first-row downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum RawTime {
    Seconds(f64),
    Timestamp(DateTime<Utc>),
}

impl RawTime {
    /// Value on a common seconds axis. Elapsed values pass through;
    /// timestamps become fractional Unix seconds.
    pub fn as_seconds(&self) -> f64 {
        match self {
            RawTime::Seconds(s) => *s,
            RawTime::Timestamp(ts) => ts.timestamp_micros() as f64 / 1_000_000.0,
        }
    }
}

/// Parses a raw time field: numeric elapsed seconds first, then the
/// timestamp formats the rig exports (RFC 3339, `YYYY-MM-DD HH:MM:SS[.fff]`).
pub fn parse_raw_time(value: &str) -> Option<RawTime> {
    if let Ok(seconds) = value.parse::<f64>() {
        return Some(RawTime::Seconds(seconds));
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(RawTime::Timestamp(ts.with_timezone(&Utc)));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(RawTime::Timestamp(naive.and_utc()));
        }
    }
    None
}

/// Structure to hold data parsed from a single row of a rig log CSV.
/// The raw fields are retained verbatim so the annotated output can echo
/// the input columns; `Option` handles missing or unparseable values.
#[derive(Debug, Clone)]
pub struct LogRowData {
    pub raw: Vec<String>,     // Original CSV fields, echoed into the output.
    pub time: Option<RawTime>, // Elapsed seconds or absolute timestamp.
    pub speed_mph: Option<f64>, // Rig speed reading (mph).
    pub power_w: Option<f64>,  // Rig power reading (watts).
}


// src/data_input/log_data.rs
