//! Training summaries and their fixed text rendering
//!
//! A [`TrainingSummary`] is derived once from an activity and never changes.
//! Rendering always prints distance, speed and calories with exactly two
//! decimals and the duration in minutes as a plain decimal, never in
//! exponent notation.

use std::fmt;
use std::time::Duration;

use crate::error::{CalculationError, Result};
use crate::models::Locale;
use crate::training::{CaloriesCalculator, Training};

/// Metrics collected from a single workout
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSummary {
    type_label: String,
    duration: Duration,
    distance_km: f64,
    speed_kmh: f64,
    calories: f64,
}

impl TrainingSummary {
    pub(crate) fn new(training: &Training, distance_km: f64, speed_kmh: f64, calories: f64) -> Self {
        Self {
            type_label: training.type_label().to_string(),
            duration: training.duration(),
            distance_km,
            speed_kmh,
            calories,
        }
    }

    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration.as_secs_f64() / 60.0
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    /// Fail if any metric is NaN or infinite
    pub fn ensure_finite(&self) -> Result<()> {
        let metrics = [
            ("distance", self.distance_km),
            ("mean speed", self.speed_kmh),
            ("calories", self.calories),
        ];
        for (calculation, value) in metrics {
            if !value.is_finite() {
                return Err(CalculationError::NonFinite {
                    calculation: calculation.to_string(),
                    value,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Render the fixed five-line block in the given locale
    pub fn render(&self, locale: Locale) -> String {
        let labels = SummaryLabels::for_locale(locale);
        format!(
            "{}: {}\n{}: {} {}\n{}: {:.2} {}\n{}: {:.2} {}\n{}: {:.2}\n",
            labels.training_type,
            self.type_label,
            labels.duration,
            self.duration_minutes(),
            labels.minutes,
            labels.distance,
            self.distance_km,
            labels.kilometers,
            labels.speed,
            self.speed_kmh,
            labels.speed_unit,
            labels.calories,
            self.calories,
        )
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::English))
    }
}

/// Field labels for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLabels {
    pub training_type: &'static str,
    pub duration: &'static str,
    pub minutes: &'static str,
    pub distance: &'static str,
    pub kilometers: &'static str,
    pub speed: &'static str,
    pub speed_unit: &'static str,
    pub calories: &'static str,
}

impl SummaryLabels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => SummaryLabels {
                training_type: "Training type",
                duration: "Duration",
                minutes: "min",
                distance: "Distance",
                kilometers: "km.",
                speed: "Avg. speed",
                speed_unit: "km/h",
                calories: "Calories burned",
            },
            Locale::Russian => SummaryLabels {
                training_type: "Тип тренировки",
                duration: "Длительность",
                minutes: "мин",
                distance: "Дистанция",
                kilometers: "км.",
                speed: "Ср. скорость",
                speed_unit: "км/ч",
                calories: "Потрачено ккал",
            },
        }
    }
}

/// Summarize an activity and render it in English
pub fn describe<A: CaloriesCalculator + ?Sized>(activity: &A) -> String {
    describe_localized(activity, Locale::English)
}

/// Summarize an activity and render it in the given locale
pub fn describe_localized<A: CaloriesCalculator + ?Sized>(activity: &A, locale: Locale) -> String {
    activity.summarize().render(locale)
}
