// src/data_analysis/torque.rs

use crate::config::RigConfig;
use crate::data_input::log_data::LogRowData;
use crate::units::mph_to_mps;

/// One fully derived output row: the echoed input fields plus the four
/// computed columns that get appended to the annotated CSV.
#[derive(Debug, Clone)]
pub struct DerivedRow {
    pub raw: Vec<String>,
    pub time_s: f64,
    pub speed_mps: f64,
    pub power_w: f64,
    pub torque4_nm: f64,
}

/// Torque at gear 4 in newton-metres:
/// (power_w * gear4_teeth * wheel2_radius_m) / (gear3_teeth * velocity_mps).
///
/// A zero or non-finite velocity makes the formula undefined; the row gets
/// a NaN sentinel so CSV output and plotting can gap the point instead of
/// propagating an infinity. `gear3_teeth` is validated non-zero at config
/// load, before any row reaches this function.
pub fn compute_torque(
    power_w: f64,
    gear4_teeth: u32,
    wheel2_radius_m: f64,
    gear3_teeth: u32,
    velocity_mps: f64,
) -> f64 {
    if velocity_mps == 0.0 || !velocity_mps.is_finite() {
        return f64::NAN;
    }
    (power_w * gear4_teeth as f64 * wheel2_radius_m) / (gear3_teeth as f64 * velocity_mps)
}

/// Applies unit conversion and the torque formula row-wise. Time is
/// normalized so the first usable row maps to time_s = 0; missing speed or
/// power readings default to 0.0 (a zero speed then yields a NaN torque).
pub fn derive_rows(rows: Vec<LogRowData>, config: &RigConfig) -> Vec<DerivedRow> {
    let t0 = match rows
        .iter()
        .find_map(|row| row.time.as_ref().map(|t| t.as_seconds()))
    {
        Some(t) => t,
        None => return Vec::new(),
    };
    let wheel2_radius_m = config.wheel2_radius_m();

    let mut derived: Vec<DerivedRow> = Vec::with_capacity(rows.len());
    for row in rows {
        let time = match &row.time {
            Some(t) => t.as_seconds(),
            None => continue,
        };
        let speed_mps = mph_to_mps(row.speed_mph.unwrap_or(0.0));
        let power_w = row.power_w.unwrap_or(0.0);
        let torque4_nm = compute_torque(
            power_w,
            config.gear4_teeth,
            wheel2_radius_m,
            config.gear3_teeth,
            speed_mps,
        );
        derived.push(DerivedRow {
            raw: row.raw,
            time_s: time - t0,
            speed_mps,
            power_w,
            torque4_nm,
        });
    }
    derived
}
