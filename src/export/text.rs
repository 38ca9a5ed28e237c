use crate::models::Locale;
use crate::summary::TrainingSummary;

/// Render every summary as its text block, each followed by a blank line
pub fn render_text(summaries: &[TrainingSummary], locale: Locale) -> String {
    summaries
        .iter()
        .map(|summary| format!("{}\n", summary.render(locale)))
        .collect()
}
