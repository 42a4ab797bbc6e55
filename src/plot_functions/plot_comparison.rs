// src/plot_functions/plot_comparison.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::plot_framework::{draw_line_chart, PlotSeries};

/// Maps a comparison title to a filesystem-safe PNG name. Path separators
/// and reserved characters are stripped, spaces become underscores.
pub fn comparison_plot_filename(title: &str) -> String {
    let sanitized = sanitize_filename::sanitize(title).replace(' ', "_");
    format!("{}.png", sanitized)
}

/// Renders one comparison overlay: every resolved torque series on a
/// shared time axis, legend built from the entry labels.
pub fn plot_comparison(
    title: &str,
    series: &[PlotSeries],
    comparison_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_path = comparison_dir.join(comparison_plot_filename(title));
    draw_line_chart(
        &output_path,
        title,
        "Time (s)",
        "Torque at gear 4 (N·m)",
        series,
    )?;
    Ok(output_path)
}
