//! Shared workout record and the calculation capability every activity exposes
//!
//! [`Training`] holds the fields common to all workouts and supplies the
//! distance and mean speed formulas. Concrete activities embed a `Training`
//! and implement [`CaloriesCalculator`], overriding only what differs.

use std::time::Duration;

use crate::error::{ensure_non_negative, Result};
use crate::summary::TrainingSummary;

/// Meters in one kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in one hour
pub const MIN_IN_H: f64 = 60.0;

/// Centimeters in one meter
pub const CM_IN_M: f64 = 100.0;

/// Length of one running or walking step in meters
pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;

/// Common workout record
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    /// Workout name shown in summaries
    type_label: String,
    /// Repetition count (steps, or strokes when swimming)
    action: u32,
    /// Length of one repetition in meters
    step_length_m: f64,
    duration: Duration,
    weight_kg: f64,
}

impl Training {
    /// Create a validated workout record.
    ///
    /// Step length and weight must be finite and non-negative.
    pub fn new(
        type_label: impl Into<String>,
        action: u32,
        step_length_m: f64,
        duration: Duration,
        weight_kg: f64,
    ) -> Result<Self> {
        let step_length_m = ensure_non_negative("step_length_m", step_length_m)?;
        let weight_kg = ensure_non_negative("weight_kg", weight_kg)?;

        Ok(Self {
            type_label: type_label.into(),
            action,
            step_length_m,
            duration,
            weight_kg,
        })
    }

    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn action(&self) -> u32 {
        self.action
    }

    pub fn step_length_m(&self) -> f64 {
        self.step_length_m
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration.as_secs_f64() / 3600.0
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration.as_secs_f64() / 60.0
    }

    /// Distance covered in kilometers: repetitions * step length / 1000
    pub fn distance(&self) -> f64 {
        f64::from(self.action) * self.step_length_m / M_IN_KM
    }

    /// Mean speed in km/h, zero for a zero-length workout
    pub fn mean_speed(&self) -> f64 {
        speed_over(self.distance(), self.duration_hours())
    }
}

/// Divide distance by time, treating a zero duration as zero speed.
///
/// This is a contract: callers rely on `0.0` rather than NaN or infinity.
pub(crate) fn speed_over(distance_km: f64, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    distance_km / duration_hours
}

/// Metrics every workout type can produce
pub trait CaloriesCalculator {
    /// The shared workout record
    fn training(&self) -> &Training;

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        self.training().distance()
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.training().mean_speed()
    }

    /// Energy spent in kilocalories
    fn calories(&self) -> f64;

    /// Collect all metrics into an immutable summary
    fn summarize(&self) -> TrainingSummary {
        let summary = TrainingSummary::new(
            self.training(),
            self.distance(),
            self.mean_speed(),
            self.calories(),
        );
        tracing::debug!(
            activity = summary.type_label(),
            distance_km = summary.distance_km(),
            speed_kmh = summary.speed_kmh(),
            calories = summary.calories(),
            "Training summarized"
        );
        summary
    }
}

/// An unspecialized workout burns no calories until a concrete type says otherwise
impl CaloriesCalculator for Training {
    fn training(&self) -> &Training {
        self
    }

    fn calories(&self) -> f64 {
        0.0
    }
}
