// src/data_input/csv_parser.rs

use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::data_input::log_data::{parse_raw_time, LogRowData, RawTime};

// Header labels vary between rig export versions; each column is matched
// case-insensitively against its candidate set.
const TIME_HEADER_CANDIDATES: [&str; 5] = ["time", "timestamp", "time_s", "time (s)", "elapsed"];
const SPEED_HEADER_CANDIDATES: [&str; 3] = ["speed", "speed_mph", "mph"];
const POWER_HEADER_CANDIDATES: [&str; 4] = ["power", "power_w", "watts", "power (w)"];

/// One parsed rig log: the original header labels plus all usable rows.
#[derive(Debug, Clone)]
pub struct ParsedRigLog {
    pub headers: Vec<String>,
    pub rows: Vec<LogRowData>,
}

fn find_column(headers: &csv::StringRecord, candidates: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| candidates.iter().any(|c| h.trim().eq_ignore_ascii_case(c)))
}

/// Parses a rig log CSV from any reader, mapping header labels to column
/// indices and extracting time, speed, and power per row.
///
/// Row policy:
/// - a row the CSV reader cannot decode is skipped with a warning;
/// - a row whose time field does not parse is skipped with a warning;
/// - missing or unparseable speed/power values are left unset and default
///   to 0.0 downstream.
///
/// A file with no recognizable time column falls back to the row index as
/// elapsed seconds.
pub fn parse_rig_log<R: Read>(input: R) -> Result<ParsedRigLog, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    let header_record = reader.headers()?.clone();

    let time_idx = find_column(&header_record, &TIME_HEADER_CANDIDATES);
    let speed_idx = find_column(&header_record, &SPEED_HEADER_CANDIDATES);
    let power_idx = find_column(&header_record, &POWER_HEADER_CANDIDATES);

    println!("Header mapping status:");
    match time_idx {
        Some(i) => println!("  time:  '{}' (column {})", &header_record[i], i),
        None => println!("  time:  Not Found (falling back to row index as seconds)"),
    }
    match speed_idx {
        Some(i) => println!("  speed: '{}' (column {})", &header_record[i], i),
        None => println!("  speed: Not Found (speeds default to 0.0)"),
    }
    match power_idx {
        Some(i) => println!("  power: '{}' (column {})", &header_record[i], i),
        None => println!("  power: Not Found (power defaults to 0.0)"),
    }

    let headers: Vec<String> = header_record.iter().map(String::from).collect();
    let mut rows: Vec<LogRowData> = Vec::new();

    for (row_index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let parse_f64_at = |idx: Option<usize>| -> Option<f64> {
                    idx.and_then(|i| record.get(i))
                        .and_then(|value| value.parse::<f64>().ok())
                };

                let time = match time_idx {
                    Some(i) => match record.get(i).and_then(parse_raw_time) {
                        Some(t) => Some(t),
                        None => {
                            eprintln!(
                                "Warning: Skipping row {} due to missing or invalid time value",
                                row_index + 1
                            );
                            continue;
                        }
                    },
                    None => Some(RawTime::Seconds(row_index as f64)),
                };

                rows.push(LogRowData {
                    raw: record.iter().map(String::from).collect(),
                    time,
                    speed_mph: parse_f64_at(speed_idx),
                    power_w: parse_f64_at(power_idx),
                });
            }
            Err(e) => {
                eprintln!(
                    "Warning: Skipping row {} due to CSV read error: {}",
                    row_index + 1,
                    e
                );
            }
        }
    }

    println!("Finished reading {} data rows.", rows.len());
    Ok(ParsedRigLog { headers, rows })
}

/// File-backed wrapper around `parse_rig_log`.
pub fn parse_rig_log_file(input_file_path: &Path) -> Result<ParsedRigLog, Box<dyn Error>> {
    let file = File::open(input_file_path)
        .map_err(|e| format!("Failed to open '{}': {}", input_file_path.display(), e))?;
    parse_rig_log(BufReader::new(file))
}


// src/data_input/csv_parser.rs
