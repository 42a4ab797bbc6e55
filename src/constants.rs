// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{
    BLUE, BROWN, CYAN, GREEN, GREY, LIME, ORANGE, PINK, PURPLE, RED,
};
use plotters::style::RGBColor;

// Unit conversion factors.
pub const MPH_TO_MPS: f64 = 0.44704;
pub const INCHES_TO_METERS: f64 = 0.0254;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Font sizes for chart elements.
pub const FONT_SIZE_CHART_TITLE: u32 = 24;
pub const FONT_SIZE_AXIS_LABEL: u32 = 14;
pub const FONT_SIZE_LEGEND: u32 = 14;
pub const FONT_SIZE_MESSAGE: u32 = 28;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// --- Plot Color Assignments ---
pub const COLOR_TORQUE_MAIN: &RGBColor = &ORANGE;

// Cycled through for the per-series colors of comparison overlays.
pub const COMPARISON_COLOR_CYCLE: [RGBColor; 10] = [
    BLUE, ORANGE, GREEN, RED, PURPLE, BROWN, PINK, GREY, LIME, CYAN,
];

// src/constants.rs
