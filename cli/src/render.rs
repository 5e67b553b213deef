use crate::ui;
use colored::Colorize;
use sentiment_client::{
    AnalysisResult, DistributionCounts, ErrorDescription, HistorySnapshot, SentimentLabel,
    SessionState,
};

const BAR_WIDTH: usize = 30;
const EMPTY_HISTORY: &str = "No analysis history yet";

/// Rendered form of the most recent analysis
pub fn result_block(result: &AnalysisResult) -> String {
    let mut lines = vec![
        format!("  {} {}", "Text:".bold(), result.text),
        format!("  {} {}", "Sentiment:".bold(), ui::paint_label(&result.sentiment)),
    ];
    if let Some(polarity) = result.polarity_display() {
        lines.push(format!("  {} {}", "Polarity:".bold(), polarity));
    }
    lines.join("\n")
}

/// One bar per bucket with count and percentage
pub fn distribution_block(counts: &DistributionCounts) -> String {
    if counts.is_empty() {
        return format!("  {}", EMPTY_HISTORY.dimmed());
    }

    [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ]
    .iter()
    .map(|label| {
        let share = counts.share(label);
        format!(
            "  {:<9} {} {:>4} ({:>5.1}%)",
            ui::paint_label(label),
            bar(share, BAR_WIDTH),
            counts.count(label),
            share
        )
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// History entries in service order
pub fn history_block(history: &HistorySnapshot) -> String {
    if history.is_empty() {
        return format!("  {}", EMPTY_HISTORY.dimmed());
    }

    history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let polarity = entry
                .polarity_display()
                .map(|p| format!(" ({p})"))
                .unwrap_or_default();
            format!(
                "  {:>3}. [{}]{} {}",
                i + 1,
                ui::paint_label(&entry.sentiment),
                polarity,
                entry.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn error_line(error: &ErrorDescription) -> String {
    format!("{} {}", format!("[{}]", error.kind).red(), error.message.red().bold())
}

/// Print the whole dashboard for a session snapshot
pub fn print_dashboard(state: &SessionState) {
    if let Some(result) = &state.last_result {
        ui::section_header("Latest Result");
        println!("{}", result_block(result));
    }

    ui::section_header(&format!("Sentiment Distribution ({} total)", state.history.len()));
    println!("{}", distribution_block(&state.distribution()));

    ui::section_header("History");
    println!("{}", history_block(&state.history));

    if let Some(error) = &state.last_error {
        println!();
        eprintln!("{}", error_line(error));
    }
}

fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0 * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_client::ErrorKind;

    fn plain() {
        colored::control::set_override(false);
    }

    fn entry(text: &str, label: SentimentLabel, polarity: Option<f64>) -> AnalysisResult {
        AnalysisResult {
            text: text.to_string(),
            sentiment: label,
            polarity,
        }
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0.0, 10), "░".repeat(10));
        assert_eq!(bar(100.0, 10), "█".repeat(10));
        assert_eq!(bar(50.0, 10).chars().filter(|c| *c == '█').count(), 5);
    }

    #[test]
    fn test_result_block_formats_polarity() {
        plain();
        let block = result_block(&entry("I love this!", SentimentLabel::Positive, Some(0.8)));
        assert!(block.contains("I love this!"));
        assert!(block.contains("positive"));
        assert!(block.contains("0.80"));

        let block = result_block(&entry("hm", SentimentLabel::Neutral, None));
        assert!(!block.contains("Polarity"));
    }

    #[test]
    fn test_empty_states() {
        plain();
        assert!(distribution_block(&DistributionCounts::default()).contains(EMPTY_HISTORY));
        assert!(history_block(&HistorySnapshot::default()).contains(EMPTY_HISTORY));
    }

    #[test]
    fn test_distribution_percentages() {
        plain();
        let counts = DistributionCounts {
            positive: 1,
            negative: 1,
            neutral: 2,
        };
        let block = distribution_block(&counts);
        assert!(block.contains("25.0%"));
        assert!(block.contains("50.0%"));
    }

    #[test]
    fn test_history_keeps_unknown_label() {
        plain();
        let history = HistorySnapshot::new(vec![
            entry("first", SentimentLabel::Negative, Some(-0.5)),
            entry("second", SentimentLabel::Unrecognized("mixed".to_string()), None),
        ]);
        let block = history_block(&history);
        let lines: Vec<&str> = block.lines().collect();
        assert!(lines[0].contains("first") && lines[0].contains("-0.50"));
        assert!(lines[1].contains("[mixed]"));
    }

    #[test]
    fn test_error_line() {
        plain();
        let line = error_line(&ErrorDescription::new(ErrorKind::ServerError, "rate limited"));
        assert_eq!(line, "[ServerError] rate limited");
    }
}
