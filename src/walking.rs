//! Walking workouts
//!
//! The calorie estimate depends on the walker's height:
//!
//! ```text
//! speed_ms = speed_kmh * 0.278
//! calories = (0.035 * weight + (speed_ms^2 / height_m) * 0.029 * weight) * duration_min
//! ```
//!
//! Height divides the speed term, so [`Walking::new`] rejects a zero, negative
//! or non-finite height instead of letting the formula produce NaN or infinity.

use std::time::Duration;

use crate::error::{ensure_positive, Result};
use crate::training::{CaloriesCalculator, Training, CM_IN_M, MIN_IN_H};

/// Coefficient applied to body weight
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;

/// Coefficient applied to the speed/height term
pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// km/h to m/s conversion factor
pub const KMH_IN_MSEC: f64 = 0.278;

#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    training: Training,
    height_cm: f64,
}

impl Walking {
    pub fn new(
        type_label: impl Into<String>,
        action: u32,
        step_length_m: f64,
        duration: Duration,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self> {
        let training = Training::new(type_label, action, step_length_m, duration, weight_kg)?;
        let height_cm = ensure_positive("height_cm", height_cm)?;
        tracing::debug!(steps = action, height_cm, ?duration, "Walking workout created");
        Ok(Self { training, height_cm })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl CaloriesCalculator for Walking {
    fn training(&self) -> &Training {
        &self.training
    }

    fn calories(&self) -> f64 {
        let weight = self.training.weight_kg();
        let speed_ms = self.mean_speed() * KMH_IN_MSEC;
        let height_m = self.height_cm / CM_IN_M;
        let duration_min = self.training.duration_hours() * MIN_IN_H;

        let speed_height = speed_ms.powi(2) / height_m;

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * duration_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrainMeterError;
    use crate::training::DEFAULT_STEP_LENGTH_M;

    fn sample() -> Walking {
        Walking::new(
            "Walking",
            20000,
            DEFAULT_STEP_LENGTH_M,
            Duration::from_secs(3 * 3600 + 45 * 60),
            85.0,
            185.0,
        )
        .unwrap()
    }

    #[test]
    fn test_walking_sample() {
        let walking = sample();

        assert!((walking.distance() - 13.0).abs() < 1e-9);
        assert!((walking.mean_speed() - 13.0 / 3.75).abs() < 1e-9);

        let speed_ms = 13.0 / 3.75 * 0.278;
        let expected = (0.035 * 85.0 + (speed_ms * speed_ms / 1.85) * 0.029 * 85.0) * 225.0;
        assert!((walking.calories() - expected).abs() < 1e-6);
        assert!((walking.calories() - 947.82).abs() < 1e-2);
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let err = Walking::new("Walking", 20000, 0.65, Duration::from_secs(60), 85.0, 0.0)
            .unwrap_err();
        match err {
            TrainMeterError::InvalidInput { field, .. } => assert_eq!(field, "height_cm"),
            other => panic!("unexpected error: {other}"),
        }

        assert!(Walking::new("Walking", 1, 0.65, Duration::from_secs(60), 85.0, -170.0).is_err());
        assert!(
            Walking::new("Walking", 1, 0.65, Duration::from_secs(60), 85.0, f64::INFINITY).is_err()
        );
    }

    #[test]
    fn test_standing_still_still_burns_weight_term() {
        let walking =
            Walking::new("Walking", 0, 0.65, Duration::from_secs(3600), 80.0, 180.0).unwrap();
        // speed is zero, only 0.035 * weight * minutes remains
        assert!((walking.calories() - 0.035 * 80.0 * 60.0).abs() < 1e-9);
    }
}
