// src/lib.rs - Library interface for internal module access

#![allow(non_snake_case)]

pub mod batch;
pub mod comparison;
pub mod config;
pub mod constants;
pub mod csv_output;
pub mod data_analysis;
pub mod data_input;
pub mod plot_framework;
pub mod plot_functions;
pub mod units;
