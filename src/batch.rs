// src/batch.rs

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::RigConfig;
use crate::csv_output::{write_derived_csv, write_summary_csv};
use crate::data_analysis::summary_stats::{summarize_torque, SummaryRow};
use crate::data_analysis::torque::derive_rows;
use crate::data_input::csv_parser::parse_rig_log_file;
use crate::data_input::discovery::{discover_rig_csvs, RigCsvFile};
use crate::plot_functions::plot_torque::plot_torque;

/// Processes one discovered rig CSV: parse, derive, write the annotated
/// CSV, render the torque plot, and return the summary line. Any failure
/// here is per-file; the caller logs it and moves on.
pub fn process_file(
    entry: &RigCsvFile,
    config: &RigConfig,
    csv_out_dir: &Path,
    plots_dir: &Path,
) -> Result<SummaryRow, Box<dyn Error>> {
    let parsed = parse_rig_log_file(&entry.path)?;
    if parsed.rows.is_empty() {
        return Err(format!("'{}' contains no usable data rows", entry.path.display()).into());
    }

    let derived = derive_rows(parsed.rows, config);

    let pilot_csv_dir = csv_out_dir.join(&entry.pilot);
    let pilot_plot_dir = plots_dir.join(&entry.pilot);
    fs::create_dir_all(&pilot_csv_dir)?;
    fs::create_dir_all(&pilot_plot_dir)?;

    let out_csv = pilot_csv_dir.join(format!("{}.csv", entry.stem));
    write_derived_csv(&out_csv, &parsed.headers, &derived)?;

    plot_torque(&derived, &entry.pilot, &entry.stem, &pilot_plot_dir)?;

    let torque_values: Vec<f64> = derived.iter().map(|r| r.torque4_nm).collect();
    let stats = summarize_torque(&torque_values);

    Ok(SummaryRow {
        pilot: entry.pilot.clone(),
        file: format!("{}/{}.csv", entry.pilot, entry.stem),
        out_csv: format!("csv/{}/{}.csv", entry.pilot, entry.stem),
        rows: derived.len(),
        torque_max_nm: stats.max,
        torque_mean_nm: stats.mean,
        torque_median_nm: stats.median,
    })
}

/// Runs the whole batch: discover the pilot/file tree, process every
/// file, and write `summary.csv` once at the end. Per-file failures are
/// logged and omitted from the summary; only discovery and summary
/// writing are fatal. An empty input tree is a top-level error.
pub fn run_batch(config: &RigConfig) -> Result<(), Box<dyn Error>> {
    println!(
        "Configuration: gear3={} teeth, gear4={} teeth, wheel2_radius={} in ({:.4} m)",
        config.gear3_teeth,
        config.gear4_teeth,
        config.wheel2_radius_inches,
        config.wheel2_radius_m()
    );

    let input_root = Path::new(&config.input_root);
    let output_root = Path::new(&config.output_root);
    let csv_out_dir = output_root.join("csv");
    let plots_dir = output_root.join("plots");
    fs::create_dir_all(&csv_out_dir)?;
    fs::create_dir_all(&plots_dir)?;

    let files = discover_rig_csvs(input_root)?;
    if files.is_empty() {
        return Err(format!("No CSV files found under '{}'", input_root.display()).into());
    }

    let mut summary_rows: Vec<SummaryRow> = Vec::new();
    for entry in &files {
        println!("\nProcessing {}/{}.csv ...", entry.pilot, entry.stem);
        match process_file(entry, config, &csv_out_dir, &plots_dir) {
            Ok(row) => summary_rows.push(row),
            Err(e) => {
                eprintln!("Warning: Failed to process '{}': {}", entry.path.display(), e);
            }
        }
    }

    let summary_path = output_root.join("summary.csv");
    write_summary_csv(&summary_path, &summary_rows)?;
    println!(
        "\nWrote {} results. Summary: {}",
        summary_rows.len(),
        summary_path.display()
    );

    Ok(())
}
