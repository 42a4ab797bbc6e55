// src/main.rs

#![allow(non_snake_case)]

use std::env;
use std::error::Error;
use std::path::Path;

use PowerRig_CSV_Render::batch::run_batch;
use PowerRig_CSV_Render::config::RigConfig;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.json]", args[0]);
        std::process::exit(1);
    }
    let config_path = args.get(1).map(String::as_str).unwrap_or("config.json");

    let config = RigConfig::load(Path::new(config_path))?;
    run_batch(&config)
}
