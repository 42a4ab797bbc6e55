// src/bin/render_comparisons.rs

use std::env;
use std::error::Error;
use std::path::Path;

use PowerRig_CSV_Render::comparison::{load_comparison_config, run_comparisons};
use PowerRig_CSV_Render::config::RigConfig;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [comparison_config.json]", args[0]);
        std::process::exit(1);
    }
    let comparison_config_path = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("comparison_config.json");

    // The comparison pass only needs the output root from the main config;
    // when config.json is absent or invalid it falls back to the default
    // output tree rather than refusing to run.
    let output_root = match RigConfig::load(Path::new("config.json")) {
        Ok(config) => config.output_root,
        Err(e) => {
            eprintln!("Warning: could not read config.json ({}); using output root 'outputs'", e);
            "outputs".to_string()
        }
    };

    let comparison_config = load_comparison_config(Path::new(comparison_config_path))?;
    run_comparisons(Path::new(&output_root), &comparison_config)
}
