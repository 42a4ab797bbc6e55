// src/csv_output.rs

use std::error::Error;
use std::path::Path;

use crate::data_analysis::summary_stats::SummaryRow;
use crate::data_analysis::torque::DerivedRow;

/// Column labels appended to the input columns in every annotated CSV.
pub const DERIVED_HEADERS: [&str; 4] = ["time_s", "speed_mps", "power_w", "torque4_nm"];

/// Header labels of `summary.csv`.
pub const SUMMARY_HEADERS: [&str; 7] = [
    "pilot",
    "file",
    "out_csv",
    "rows",
    "torque_max_nm",
    "torque_mean_nm",
    "torque_median_nm",
];

// NaN (undefined torque on a zero-velocity row) is written as an empty
// field so spreadsheet tools and the comparison reader see a gap.
fn format_value(v: f64) -> String {
    if v.is_finite() {
        format!("{}", v)
    } else {
        String::new()
    }
}

/// Writes one annotated CSV: the original input columns echoed verbatim,
/// followed by the four derived columns. The writer lives in this scope
/// only and is flushed before returning, so an error never leaves a
/// half-open handle behind.
pub fn write_derived_csv(
    out_path: &Path,
    input_headers: &[String],
    rows: &[DerivedRow],
) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(out_path)
        .map_err(|e| format!("Failed to create '{}': {}", out_path.display(), e))?;

    let mut header_record: Vec<&str> = input_headers.iter().map(String::as_str).collect();
    header_record.extend(DERIVED_HEADERS);
    writer.write_record(&header_record)?;

    for row in rows {
        let mut record: Vec<String> = Vec::with_capacity(row.raw.len() + DERIVED_HEADERS.len());
        record.extend(row.raw.iter().cloned());
        record.push(format_value(row.time_s));
        record.push(format_value(row.speed_mps));
        record.push(format_value(row.power_w));
        record.push(format_value(row.torque4_nm));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes `summary.csv`, one row per successfully processed file, in the
/// order the files were discovered.
pub fn write_summary_csv(out_path: &Path, rows: &[SummaryRow]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(out_path)
        .map_err(|e| format!("Failed to create '{}': {}", out_path.display(), e))?;

    writer.write_record(&SUMMARY_HEADERS)?;
    for row in rows {
        writer.write_record(&[
            row.pilot.clone(),
            row.file.clone(),
            row.out_csv.clone(),
            row.rows.to_string(),
            format_value(row.torque_max_nm),
            format_value(row.torque_mean_nm),
            format_value(row.torque_median_nm),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
