use crate::models::ActivityKind;
use crate::running::Running;
use crate::swimming::Swimming;
use crate::training::{CaloriesCalculator, Training};
use crate::walking::Walking;

/// Any supported workout, for heterogeneous collections
#[derive(Debug, Clone, PartialEq)]
pub enum Activity {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::Running(_) => ActivityKind::Running,
            Activity::Walking(_) => ActivityKind::Walking,
            Activity::Swimming(_) => ActivityKind::Swimming,
        }
    }

    fn as_calculator(&self) -> &dyn CaloriesCalculator {
        match self {
            Activity::Running(running) => running,
            Activity::Walking(walking) => walking,
            Activity::Swimming(swimming) => swimming,
        }
    }
}

impl CaloriesCalculator for Activity {
    fn training(&self) -> &Training {
        self.as_calculator().training()
    }

    fn distance(&self) -> f64 {
        self.as_calculator().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_calculator().mean_speed()
    }

    fn calories(&self) -> f64 {
        self.as_calculator().calories()
    }
}

impl From<Running> for Activity {
    fn from(running: Running) -> Self {
        Activity::Running(running)
    }
}

impl From<Walking> for Activity {
    fn from(walking: Walking) -> Self {
        Activity::Walking(walking)
    }
}

impl From<Swimming> for Activity {
    fn from(swimming: Swimming) -> Self {
        Activity::Swimming(swimming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_dispatch_uses_variant_speed() {
        let swimming =
            Swimming::new("Swimming", 2000, 1.38, Duration::from_secs(5400), 85.0, 50, 5).unwrap();
        let activity = Activity::from(swimming.clone());

        assert_eq!(activity.kind(), ActivityKind::Swimming);
        assert_eq!(activity.mean_speed(), swimming.mean_speed());
        assert_eq!(activity.summarize(), swimming.summarize());
    }

    #[test]
    fn test_kinds() {
        let half_hour = Duration::from_secs(1800);
        let running: Activity = Running::new("Running", 10, 0.65, half_hour, 70.0).unwrap().into();
        let walking: Activity = Walking::new("Walking", 10, 0.65, half_hour, 70.0, 170.0)
            .unwrap()
            .into();

        assert_eq!(running.kind(), ActivityKind::Running);
        assert_eq!(walking.kind(), ActivityKind::Walking);
        assert_eq!(walking.training().type_label(), "Walking");
    }
}
