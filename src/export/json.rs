use serde::Serialize;

use crate::error::{Result, TrainMeterError};
use crate::summary::TrainingSummary;

/// Serializable view of a summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord<'a> {
    pub training_type: &'a str,
    pub duration_minutes: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl<'a> From<&'a TrainingSummary> for SummaryRecord<'a> {
    fn from(summary: &'a TrainingSummary) -> Self {
        SummaryRecord {
            training_type: summary.type_label(),
            duration_minutes: summary.duration_minutes(),
            distance_km: summary.distance_km(),
            speed_kmh: summary.speed_kmh(),
            calories: summary.calories(),
        }
    }
}

/// Render summaries as a pretty-printed JSON array
pub fn render_json(summaries: &[TrainingSummary]) -> Result<String> {
    let records: Vec<SummaryRecord<'_>> = summaries.iter().map(SummaryRecord::from).collect();
    serde_json::to_string_pretty(&records)
        .map_err(|e| TrainMeterError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swimming::Swimming;
    use crate::training::CaloriesCalculator;
    use std::time::Duration;

    #[test]
    fn test_render_json() {
        let summary = Swimming::new("Swimming", 2000, 1.38, Duration::from_secs(5400), 85.0, 50, 5)
            .unwrap()
            .summarize();

        let json = render_json(&[summary]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["training_type"], "Swimming");
        assert_eq!(parsed[0]["duration_minutes"], 90.0);
        assert!((parsed[0]["distance_km"].as_f64().unwrap() - 2.76).abs() < 1e-9);
        assert!((parsed[0]["calories"].as_f64().unwrap() - 323.0).abs() < 1e-6);
    }
}
