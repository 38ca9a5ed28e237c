//! Fixed sample workouts used by the `demo` command

use std::time::Duration;

use crate::activity::Activity;
use crate::error::Result;
use crate::models::{ActivityKind, Locale};
use crate::running::Running;
use crate::swimming::{Swimming, SWIMMING_STROKE_LENGTH_M};
use crate::training::DEFAULT_STEP_LENGTH_M;
use crate::walking::Walking;

const SAMPLE_WEIGHT_KG: f64 = 85.0;

/// Swimming, walking and running samples, in that order, labelled in `locale`
pub fn sample_activities(locale: Locale) -> Result<Vec<Activity>> {
    let swimming = Swimming::new(
        ActivityKind::Swimming.label(locale),
        2000,
        SWIMMING_STROKE_LENGTH_M,
        Duration::from_secs(90 * 60),
        SAMPLE_WEIGHT_KG,
        50,
        5,
    )?;

    let walking = Walking::new(
        ActivityKind::Walking.label(locale),
        20000,
        DEFAULT_STEP_LENGTH_M,
        Duration::from_secs(3 * 3600 + 45 * 60),
        SAMPLE_WEIGHT_KG,
        185.0,
    )?;

    let running = Running::new(
        ActivityKind::Running.label(locale),
        5000,
        DEFAULT_STEP_LENGTH_M,
        Duration::from_secs(30 * 60),
        SAMPLE_WEIGHT_KG,
    )?;

    Ok(vec![swimming.into(), walking.into(), running.into()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_order_and_labels() {
        let samples = sample_activities(Locale::Russian).unwrap();
        let kinds: Vec<ActivityKind> = samples.iter().map(Activity::kind).collect();
        assert_eq!(
            kinds,
            vec![ActivityKind::Swimming, ActivityKind::Walking, ActivityKind::Running]
        );

        use crate::training::CaloriesCalculator;
        assert_eq!(samples[0].training().type_label(), "Плавание");
    }
}
