// Library interface for TrainMeter modules
// The binary and the integration tests both go through this crate root

pub mod activity;
pub mod config;
pub mod demo;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod running;
pub mod summary;
pub mod swimming;
pub mod training;
pub mod walking;

// Re-export commonly used types for convenience
pub use activity::Activity;
pub use config::AppConfig;
pub use error::{Result, TrainMeterError};
pub use export::{render_summaries, ExportFormat};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{ActivityKind, Locale};
pub use running::Running;
pub use summary::{describe, describe_localized, TrainingSummary};
pub use swimming::Swimming;
pub use training::{CaloriesCalculator, Training};
pub use walking::Walking;
