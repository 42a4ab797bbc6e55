// src/data_analysis/summary_stats.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

/// One line of `summary.csv`: identity of the processed file plus its
/// aggregate torque statistics.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub pilot: String,
    pub file: String,
    pub out_csv: String,
    pub rows: usize,
    pub torque_max_nm: f64,
    pub torque_mean_nm: f64,
    pub torque_median_nm: f64,
}

/// Aggregate torque statistics for one processed file.
#[derive(Debug, Clone, Copy)]
pub struct TorqueStats {
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Computes max/mean/median over the finite torque values of a file.
/// NaN sentinel rows (zero-velocity samples) are excluded; a file with no
/// finite torque at all reports NaN for every statistic, which the summary
/// writer renders as empty fields.
pub fn summarize_torque(values: &[f64]) -> TorqueStats {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return TorqueStats {
            max: f64::NAN,
            mean: f64::NAN,
            median: f64::NAN,
        };
    }

    let arr = Array1::from(finite.clone());
    let max = match arr.max() {
        Ok(m) => *m,
        Err(_) => f64::NAN,
    };
    let mean = arr.mean().unwrap_or(f64::NAN);

    let mut sorted = finite;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    };

    TorqueStats { max, mean, median }
}
