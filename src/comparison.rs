// src/comparison.rs

use csv::ReaderBuilder;
use serde::Deserialize;
use std::error::Error;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::constants::{COMPARISON_COLOR_CYCLE, LINE_WIDTH_PLOT};
use crate::csv_output::DERIVED_HEADERS;
use crate::data_input::discovery::{discover_rig_csvs, RigCsvFile};
use crate::plot_framework::PlotSeries;
use crate::plot_functions::plot_comparison::plot_comparison;

/// Top-level shape of `comparison_config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonConfig {
    pub comparisons: Vec<ComparisonSpec>,
}

/// One requested comparison chart: a title, an optional test-type
/// substring filter, and the ordered pilot entries to overlay.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonSpec {
    pub title: String,
    #[serde(default)]
    pub test_type: String,
    pub pilots: Vec<PilotEntry>,
}

/// A pilot entry is either a bare name or a name with a custom legend
/// label, mirroring the two JSON forms `"Alice"` and
/// `{"name": "Alice", "label": "Alice (baseline)"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PilotEntry {
    Name(String),
    Labelled { name: String, label: String },
}

impl PilotEntry {
    pub fn name(&self) -> &str {
        match self {
            PilotEntry::Name(name) => name,
            PilotEntry::Labelled { name, .. } => name,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            PilotEntry::Name(_) => None,
            PilotEntry::Labelled { label, .. } => Some(label),
        }
    }
}

/// One torque CSV selected for a comparison, with its legend label.
#[derive(Debug, Clone)]
pub struct ResolvedSeries {
    pub label: String,
    pub path: PathBuf,
}

/// Loads `comparison_config.json`; missing or malformed is fatal for the
/// comparison entry point.
pub fn load_comparison_config(path: &Path) -> Result<ComparisonConfig, Box<dyn Error>> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open comparison config '{}': {}", path.display(), e))?;
    let config: ComparisonConfig = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse comparison config '{}': {}", path.display(), e))?;
    Ok(config)
}

/// Resolves a comparison spec against the listing of produced torque CSVs.
///
/// Each pilot entry selects that pilot's files whose stem contains
/// `test_type` as an exact substring; an empty `test_type` selects every
/// file the pilot has. An entry matching nothing is a warning, not an
/// error. A custom label applies to all files the entry matched; otherwise
/// the legend shows `pilot (stem)`.
pub fn resolve_comparison(spec: &ComparisonSpec, available: &[RigCsvFile]) -> Vec<ResolvedSeries> {
    let mut resolved: Vec<ResolvedSeries> = Vec::new();
    for entry in &spec.pilots {
        let matches: Vec<&RigCsvFile> = available
            .iter()
            .filter(|f| {
                f.pilot == entry.name()
                    && (spec.test_type.is_empty() || f.stem.contains(&spec.test_type))
            })
            .collect();

        if matches.is_empty() {
            eprintln!(
                "Warning: comparison '{}': no output files matched pilot '{}' (test_type '{}')",
                spec.title,
                entry.name(),
                spec.test_type
            );
            continue;
        }

        for file in matches {
            let label = match entry.label() {
                Some(label) => label.to_string(),
                None => format!("{} ({})", file.pilot, file.stem),
            };
            resolved.push(ResolvedSeries {
                label,
                path: file.path.clone(),
            });
        }
    }
    resolved
}

/// Reads `time_s`/`torque4_nm` back from an annotated CSV the batch run
/// produced. Empty or unparseable torque fields become NaN so the overlay
/// keeps the gap; rows without a usable time are skipped.
pub fn load_torque_series(path: &Path) -> Result<Vec<(f64, f64)>, Box<dyn Error>> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open '{}': {}", path.display(), e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));
    let headers = reader.headers()?.clone();

    let time_label = DERIVED_HEADERS[0];
    let torque_label = DERIVED_HEADERS[3];
    let time_idx = headers
        .iter()
        .position(|h| h == time_label)
        .ok_or_else(|| format!("'{}' has no {} column", path.display(), time_label))?;
    let torque_idx = headers
        .iter()
        .position(|h| h == torque_label)
        .ok_or_else(|| format!("'{}' has no {} column", path.display(), torque_label))?;

    let mut points: Vec<(f64, f64)> = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let time = record.get(time_idx).and_then(|v| v.parse::<f64>().ok());
                let time = match time {
                    Some(t) => t,
                    None => {
                        eprintln!(
                            "Warning: Skipping row {} of '{}': invalid {} value",
                            row_index + 1,
                            path.display(),
                            time_label
                        );
                        continue;
                    }
                };
                let torque = record
                    .get(torque_idx)
                    .and_then(|v| v.parse::<f64>().ok())
                    .unwrap_or(f64::NAN);
                points.push((time, torque));
            }
            Err(e) => {
                eprintln!(
                    "Warning: Skipping row {} of '{}' due to CSV read error: {}",
                    row_index + 1,
                    path.display(),
                    e
                );
            }
        }
    }
    Ok(points)
}

/// Renders every comparison in the config against the CSVs under
/// `<output_root>/csv`. Empty comparisons are skipped with a warning;
/// a series whose CSV cannot be read back is dropped with a warning.
pub fn run_comparisons(
    output_root: &Path,
    config: &ComparisonConfig,
) -> Result<(), Box<dyn Error>> {
    println!("\nCreating comparison plots...");

    let csv_root = output_root.join("csv");
    let available = discover_rig_csvs(&csv_root).map_err(|e| {
        format!(
            "Failed to list processed CSVs under '{}' (run the main processing first): {}",
            csv_root.display(),
            e
        )
    })?;

    let comparison_dir = output_root.join("comparison_plots");
    fs::create_dir_all(&comparison_dir)?;

    for spec in &config.comparisons {
        let resolved = resolve_comparison(spec, &available);
        if resolved.is_empty() {
            eprintln!(
                "Warning: Skipping comparison '{}': no series resolved.",
                spec.title
            );
            continue;
        }

        let mut series: Vec<PlotSeries> = Vec::new();
        for entry in &resolved {
            match load_torque_series(&entry.path) {
                Ok(data) => {
                    let color = COMPARISON_COLOR_CYCLE[series.len() % COMPARISON_COLOR_CYCLE.len()];
                    series.push(PlotSeries {
                        data,
                        label: entry.label.clone(),
                        color,
                        stroke_width: LINE_WIDTH_PLOT,
                    });
                }
                Err(e) => {
                    eprintln!(
                        "Warning: comparison '{}': failed to load '{}': {}",
                        spec.title,
                        entry.path.display(),
                        e
                    );
                }
            }
        }

        if series.is_empty() {
            eprintln!(
                "Warning: Skipping comparison '{}': every matched series failed to load.",
                spec.title
            );
            continue;
        }

        let output_path = plot_comparison(&spec.title, &series, &comparison_dir)?;
        println!(
            "  Created: {} ({} series)",
            output_path.display(),
            series.len()
        );
    }

    Ok(())
}
