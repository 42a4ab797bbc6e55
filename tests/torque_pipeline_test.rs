// tests/torque_pipeline_test.rs

use PowerRig_CSV_Render::config::RigConfig;
use PowerRig_CSV_Render::data_analysis::torque::{compute_torque, derive_rows};
use PowerRig_CSV_Render::data_input::csv_parser::parse_rig_log;

fn test_config() -> RigConfig {
    RigConfig::from_json_str(
        r#"{"gear3_teeth": 20, "gear4_teeth": 34, "wheel2_radius_inches": 12.75}"#,
    )
    .unwrap()
}

#[test]
fn test_worked_example_from_rig_constants() {
    // config {gear3: 20, gear4: 34, wheel2_radius: 12.75 in} and a row of
    // 10 mph at 150 W should land at ~18.47 N*m.
    let config = test_config();
    let data = "time,speed,power\n0.0,10.0,150.0\n";
    let parsed = parse_rig_log(data.as_bytes()).unwrap();
    let derived = derive_rows(parsed.rows, &config);

    assert_eq!(derived.len(), 1);
    assert!((derived[0].speed_mps - 4.4704).abs() < 1e-9);
    assert!((derived[0].torque4_nm - 18.473).abs() < 1e-3);

    let expected = compute_torque(150.0, 34, config.wheel2_radius_m(), 20, 4.4704);
    assert!((derived[0].torque4_nm - expected).abs() < 1e-12);
}

#[test]
fn test_time_normalizes_to_first_row() {
    let config = test_config();
    let data = "time,speed,power\n100.5,10.0,150.0\n101.0,11.0,150.0\n102.25,12.0,150.0\n";
    let parsed = parse_rig_log(data.as_bytes()).unwrap();
    let derived = derive_rows(parsed.rows, &config);

    assert!((derived[0].time_s).abs() < 1e-12);
    assert!((derived[1].time_s - 0.5).abs() < 1e-12);
    assert!((derived[2].time_s - 1.75).abs() < 1e-12);
    for pair in derived.windows(2) {
        assert!(pair[1].time_s >= pair[0].time_s);
    }
}

#[test]
fn test_datetime_timestamps_normalize_like_elapsed_seconds() {
    let config = test_config();
    let stamped = "timestamp,speed,power\n\
                   2024-03-01T12:00:00Z,10.0,150.0\n\
                   2024-03-01T12:00:00.500Z,11.0,150.0\n\
                   2024-03-01T12:00:02Z,12.0,150.0\n";
    let elapsed = "time,speed,power\n0.0,10.0,150.0\n0.5,11.0,150.0\n2.0,12.0,150.0\n";

    let from_stamps = derive_rows(parse_rig_log(stamped.as_bytes()).unwrap().rows, &config);
    let from_elapsed = derive_rows(parse_rig_log(elapsed.as_bytes()).unwrap().rows, &config);

    assert_eq!(from_stamps.len(), from_elapsed.len());
    for (a, b) in from_stamps.iter().zip(from_elapsed.iter()) {
        assert!((a.time_s - b.time_s).abs() < 1e-6);
        assert!((a.torque4_nm - b.torque4_nm).abs() < 1e-9);
    }
}

#[test]
fn test_missing_time_column_falls_back_to_row_index() {
    let config = test_config();
    let data = "speed,power\n10.0,150.0\n11.0,160.0\n12.0,170.0\n";
    let parsed = parse_rig_log(data.as_bytes()).unwrap();
    let derived = derive_rows(parsed.rows, &config);

    assert_eq!(derived.len(), 3);
    assert!((derived[0].time_s - 0.0).abs() < 1e-12);
    assert!((derived[1].time_s - 1.0).abs() < 1e-12);
    assert!((derived[2].time_s - 2.0).abs() < 1e-12);
}

#[test]
fn test_zero_speed_row_gets_nan_torque_not_infinity() {
    let config = test_config();
    let data = "time,speed,power\n0.0,0.0,150.0\n1.0,10.0,150.0\n";
    let parsed = parse_rig_log(data.as_bytes()).unwrap();
    let derived = derive_rows(parsed.rows, &config);

    assert!(derived[0].torque4_nm.is_nan());
    assert!(derived[1].torque4_nm.is_finite());
}

#[test]
fn test_missing_speed_defaults_to_zero_and_nan_torque() {
    let config = test_config();
    let data = "time,speed,power\n0.0,n/a,150.0\n";
    let parsed = parse_rig_log(data.as_bytes()).unwrap();
    let derived = derive_rows(parsed.rows, &config);

    assert_eq!(derived.len(), 1);
    assert!((derived[0].speed_mps).abs() < 1e-12);
    assert!(derived[0].torque4_nm.is_nan());
}
