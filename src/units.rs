// src/units.rs

use crate::constants::{INCHES_TO_METERS, MPH_TO_MPS};

/// Converts a speed in miles per hour to metres per second.
pub fn mph_to_mps(v: f64) -> f64 {
    v * MPH_TO_MPS
}

/// Converts a length in inches to metres.
pub fn inches_to_meters(v: f64) -> f64 {
    v * INCHES_TO_METERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mph_to_mps_known_values() {
        assert!((mph_to_mps(10.0) - 4.4704).abs() < 1e-12);
        assert!((mph_to_mps(0.0)).abs() < 1e-12);
        assert!((mph_to_mps(60.0) - 26.8224).abs() < 1e-12);
    }

    #[test]
    fn test_inches_to_meters_known_values() {
        assert!((inches_to_meters(1.0) - 0.0254).abs() < 1e-12);
        assert!((inches_to_meters(12.75) - 0.32385).abs() < 1e-12);
    }

    #[test]
    fn test_inches_to_meters_round_trip() {
        for &x in &[0.0, 0.5, 5.906, 12.75, 100.0] {
            assert!((inches_to_meters(x) / INCHES_TO_METERS - x).abs() < 1e-9);
        }
    }
}
