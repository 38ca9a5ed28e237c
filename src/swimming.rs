//! Swimming workouts
//!
//! Swimming keeps two independent distance notions. The shared
//! [`Training::distance`] counts strokes times stroke length, while mean speed
//! is derived from pool geometry (pool length times laps). The two are not
//! reconciled: summaries report the stroke-based distance next to the
//! pool-based speed.

use std::time::Duration;

use crate::error::Result;
use crate::training::{speed_over, CaloriesCalculator, Training, M_IN_KM};

/// Length of one swimming stroke in meters
pub const SWIMMING_STROKE_LENGTH_M: f64 = 1.38;

/// Shift added to mean speed
pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;

/// Multiplier applied to body weight
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    training: Training,
    pool_length_m: u32,
    lap_count: u32,
}

impl Swimming {
    pub fn new(
        type_label: impl Into<String>,
        action: u32,
        step_length_m: f64,
        duration: Duration,
        weight_kg: f64,
        pool_length_m: u32,
        lap_count: u32,
    ) -> Result<Self> {
        let training = Training::new(type_label, action, step_length_m, duration, weight_kg)?;
        tracing::debug!(
            strokes = action,
            pool_length_m,
            lap_count,
            ?duration,
            "Swimming workout created"
        );
        Ok(Self {
            training,
            pool_length_m,
            lap_count,
        })
    }

    pub fn pool_length_m(&self) -> u32 {
        self.pool_length_m
    }

    pub fn lap_count(&self) -> u32 {
        self.lap_count
    }

    /// Distance swum according to pool geometry, in kilometers
    pub fn pool_distance(&self) -> f64 {
        f64::from(self.pool_length_m) * f64::from(self.lap_count) / M_IN_KM
    }
}

impl CaloriesCalculator for Swimming {
    fn training(&self) -> &Training {
        &self.training
    }

    fn mean_speed(&self) -> f64 {
        speed_over(self.pool_distance(), self.training.duration_hours())
    }

    fn calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.training.weight_kg()
            * self.training.duration_hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Swimming {
        Swimming::new(
            "Swimming",
            2000,
            SWIMMING_STROKE_LENGTH_M,
            Duration::from_secs(90 * 60),
            85.0,
            50,
            5,
        )
        .unwrap()
    }

    #[test]
    fn test_swimming_sample() {
        let swimming = sample();

        assert!((swimming.distance() - 2.76).abs() < 1e-9);
        assert!((swimming.mean_speed() - 0.25 / 1.5).abs() < 1e-9);
        assert!((swimming.calories() - 323.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_and_speed_use_separate_geometry() {
        let swimming = sample();
        // 2.76 km of strokes, but only 0.25 km of pool laps
        assert!((swimming.pool_distance() - 0.25).abs() < 1e-9);
        assert!(swimming.distance() > swimming.pool_distance());

        let base_speed = swimming.training().mean_speed();
        assert!((base_speed - 2.76 / 1.5).abs() < 1e-9);
        assert!((swimming.mean_speed() - base_speed).abs() > 1.0);
    }

    #[test]
    fn test_zero_duration() {
        let swimming = Swimming::new("Swimming", 2000, 1.38, Duration::ZERO, 85.0, 50, 5).unwrap();
        assert_eq!(swimming.mean_speed(), 0.0);
        assert_eq!(swimming.calories(), 0.0);
    }

    #[test]
    fn test_no_laps_leaves_weight_term() {
        let swimming =
            Swimming::new("Swimming", 100, 1.38, Duration::from_secs(3600), 70.0, 25, 0).unwrap();
        assert_eq!(swimming.mean_speed(), 0.0);
        assert!((swimming.calories() - 1.1 * 2.0 * 70.0).abs() < 1e-9);
    }
}
