// src/plot_functions/plot_torque.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::constants::{COLOR_TORQUE_MAIN, LINE_WIDTH_PLOT};
use crate::data_analysis::torque::DerivedRow;
use crate::plot_framework::{draw_line_chart, PlotSeries};

/// Renders the torque-vs-time chart for one processed file as
/// `<stem>_torque.png` in the pilot's plot directory. Zero-velocity rows
/// carry NaN torque and show up as gaps in the line.
pub fn plot_torque(
    derived: &[DerivedRow],
    pilot: &str,
    stem: &str,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_path = output_dir.join(format!("{}_torque.png", stem));

    let data: Vec<(f64, f64)> = derived.iter().map(|r| (r.time_s, r.torque4_nm)).collect();
    let series = vec![PlotSeries {
        data,
        label: "Torque 4 (N·m)".to_string(),
        color: *COLOR_TORQUE_MAIN,
        stroke_width: LINE_WIDTH_PLOT,
    }];

    let title = format!("{} - {}", pilot, stem);
    draw_line_chart(
        &output_path,
        &title,
        "Time (s)",
        "Torque at gear 4 (N·m)",
        &series,
    )?;
    Ok(output_path)
}
