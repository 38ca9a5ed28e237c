use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::Locale;
use crate::summary::{SummaryLabels, TrainingSummary};

fn summary_row(summary: &TrainingSummary) -> [String; 5] {
    [
        summary.type_label().to_string(),
        summary.duration_minutes().to_string(),
        format!("{:.2}", summary.distance_km()),
        format!("{:.2}", summary.speed_kmh()),
        format!("{:.2}", summary.calories()),
    ]
}

/// Render summaries side by side with localized column headers
pub fn render_table(summaries: &[TrainingSummary], locale: Locale) -> String {
    let labels = SummaryLabels::for_locale(locale);
    let header = [
        labels.training_type.to_string(),
        format!("{}, {}", labels.duration, labels.minutes),
        format!("{}, {}", labels.distance, labels.kilometers.trim_end_matches('.')),
        format!("{}, {}", labels.speed, labels.speed_unit),
        labels.calories.to_string(),
    ];

    let mut builder = Builder::default();
    builder.push_record(header);
    for summary in summaries {
        builder.push_record(summary_row(summary));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
