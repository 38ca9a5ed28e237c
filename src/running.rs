//! Running workouts
//!
//! Calories grow linearly with mean speed:
//! `(18 * speed_kmh + 1.79) * weight_kg / 1000 * duration_min`.

use std::time::Duration;

use crate::error::Result;
use crate::training::{CaloriesCalculator, Training, MIN_IN_H, M_IN_KM};

/// Multiplier applied to mean speed
pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;

/// Shift added to the scaled mean speed
pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    training: Training,
}

impl Running {
    pub fn new(
        type_label: impl Into<String>,
        action: u32,
        step_length_m: f64,
        duration: Duration,
        weight_kg: f64,
    ) -> Result<Self> {
        let training = Training::new(type_label, action, step_length_m, duration, weight_kg)?;
        tracing::debug!(steps = action, ?duration, "Running workout created");
        Ok(Self { training })
    }
}

impl CaloriesCalculator for Running {
    fn training(&self) -> &Training {
        &self.training
    }

    fn calories(&self) -> f64 {
        let speed_modifier =
            CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT;
        let duration_min = self.training.duration_hours() * MIN_IN_H;

        speed_modifier * self.training.weight_kg() / M_IN_KM * duration_min
    }
}
