use serde::{Deserialize, Serialize};

/// Workout types supported by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    /// Human-readable workout name in the given locale
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ActivityKind::Running, Locale::English) => "Running",
            (ActivityKind::Walking, Locale::English) => "Walking",
            (ActivityKind::Swimming, Locale::English) => "Swimming",
            (ActivityKind::Running, Locale::Russian) => "Бег",
            (ActivityKind::Walking, Locale::Russian) => "Ходьба",
            (ActivityKind::Swimming, Locale::Russian) => "Плавание",
        }
    }
}

/// Language used for rendered summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::English
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ru" | "russian" => Ok(Locale::Russian),
            _ => Err(format!("Invalid locale: {}", s)),
        }
    }
}
