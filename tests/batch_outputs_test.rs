// tests/batch_outputs_test.rs

use std::fs;

use PowerRig_CSV_Render::comparison::load_torque_series;
use PowerRig_CSV_Render::config::RigConfig;
use PowerRig_CSV_Render::csv_output::{write_derived_csv, write_summary_csv};
use PowerRig_CSV_Render::data_analysis::summary_stats::{summarize_torque, SummaryRow};
use PowerRig_CSV_Render::data_analysis::torque::derive_rows;
use PowerRig_CSV_Render::data_input::csv_parser::parse_rig_log_file;
use PowerRig_CSV_Render::data_input::discovery::discover_rig_csvs;

fn test_config() -> RigConfig {
    RigConfig::from_json_str(
        r#"{"gear3_teeth": 20, "gear4_teeth": 34, "wheel2_radius_inches": 12.75}"#,
    )
    .unwrap()
}

#[test]
fn test_discovery_orders_pilots_then_files() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("Zoe Tests")).unwrap();
    fs::create_dir(root.join("Alice Tests")).unwrap();
    fs::write(root.join("Zoe Tests/200W.csv"), "time,speed,power\n").unwrap();
    fs::write(root.join("Alice Tests/200W.csv"), "time,speed,power\n").unwrap();
    fs::write(root.join("Alice Tests/150W.csv"), "time,speed,power\n").unwrap();
    // Non-CSV files and stray top-level files are ignored.
    fs::write(root.join("Alice Tests/notes.txt"), "ignore me").unwrap();
    fs::write(root.join("stray.csv"), "time,speed,power\n").unwrap();

    let files = discover_rig_csvs(root).unwrap();
    let identities: Vec<(String, String)> = files
        .iter()
        .map(|f| (f.pilot.clone(), f.stem.clone()))
        .collect();

    assert_eq!(
        identities,
        vec![
            ("Alice Tests".to_string(), "150W".to_string()),
            ("Alice Tests".to_string(), "200W".to_string()),
            ("Zoe Tests".to_string(), "200W".to_string()),
        ]
    );
}

#[test]
fn test_discovery_missing_root_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist");
    assert!(discover_rig_csvs(&missing).is_err());
}

#[test]
fn test_derived_csv_round_trips_through_series_loader() {
    let config = test_config();
    let dir = tempfile::tempdir().unwrap();

    let input_path = dir.path().join("150W.csv");
    fs::write(
        &input_path,
        "time,speed,power\n0.0,10.0,150.0\n1.0,0.0,150.0\n2.0,12.0,150.0\n",
    )
    .unwrap();

    let parsed = parse_rig_log_file(&input_path).unwrap();
    let headers = parsed.headers.clone();
    let derived = derive_rows(parsed.rows, &config);

    let out_path = dir.path().join("150W_derived.csv");
    write_derived_csv(&out_path, &headers, &derived).unwrap();

    let text = fs::read_to_string(&out_path).unwrap();
    let first_line = text.lines().next().unwrap();
    assert_eq!(
        first_line,
        "time,speed,power,time_s,speed_mps,power_w,torque4_nm"
    );
    // The zero-speed row has an undefined torque: empty trailing field.
    let second_row = text.lines().nth(2).unwrap();
    assert!(second_row.ends_with(','));

    let points = load_torque_series(&out_path).unwrap();
    assert_eq!(points.len(), 3);
    assert!((points[0].0 - 0.0).abs() < 1e-12);
    assert!(points[0].1.is_finite());
    assert!(points[1].1.is_nan());
    assert!(points[2].1.is_finite());
}

#[test]
fn test_summary_rows_written_in_given_order() {
    let dir = tempfile::tempdir().unwrap();
    let summary_path = dir.path().join("summary.csv");

    let stats_a = summarize_torque(&[10.0, 20.0]);
    let stats_b = summarize_torque(&[f64::NAN]);
    let rows = vec![
        SummaryRow {
            pilot: "Alice Tests".to_string(),
            file: "Alice Tests/150W.csv".to_string(),
            out_csv: "csv/Alice Tests/150W.csv".to_string(),
            rows: 2,
            torque_max_nm: stats_a.max,
            torque_mean_nm: stats_a.mean,
            torque_median_nm: stats_a.median,
        },
        SummaryRow {
            pilot: "Zoe Tests".to_string(),
            file: "Zoe Tests/200W.csv".to_string(),
            out_csv: "csv/Zoe Tests/200W.csv".to_string(),
            rows: 1,
            torque_max_nm: stats_b.max,
            torque_mean_nm: stats_b.mean,
            torque_median_nm: stats_b.median,
        },
    ];

    write_summary_csv(&summary_path, &rows).unwrap();

    let text = fs::read_to_string(&summary_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "pilot,file,out_csv,rows,torque_max_nm,torque_mean_nm,torque_median_nm"
    );
    assert!(lines[1].starts_with("Alice Tests,"));
    assert!(lines[2].starts_with("Zoe Tests,"));
    assert!(lines[1].contains(",20,"));
    // All-NaN stats render as empty fields.
    assert!(lines[2].ends_with(",,,"));
}

#[test]
fn test_unreadable_file_reports_error_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("ghost.csv");
    assert!(parse_rig_log_file(&missing).is_err());
}
