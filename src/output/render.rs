//! Terminal rendering of a match report

use crate::processing::analyzer::MatchReport;
use colored::{Color, Colorize};

const GAUGE_WIDTH: usize = 50;

/// Color band for a 0-100 score: red below 50, yellow below 75, green above.
fn band_color(value: f64) -> Color {
    if value < 50.0 {
        Color::Red
    } else if value < 75.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Horizontal gauge over the three score bands.
fn gauge(value: f64) -> String {
    let filled = ((value / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    let filled = filled.min(GAUGE_WIDTH);

    let mut bar = String::new();
    for i in 0..GAUGE_WIDTH {
        let band_value = (i as f64 + 0.5) / GAUGE_WIDTH as f64 * 100.0;
        let segment = if i < filled { "█" } else { "░" };
        bar.push_str(&format!("{}", segment.color(band_color(band_value))));
    }
    bar
}

/// Render the full report: score card, gauge, metric pair, skill lists.
pub fn render_report(report: &MatchReport) {
    let headline = format!("{:.2}%", report.final_score);

    println!();
    println!("{}", "Overall candidate match".bold());
    println!(
        "  {}  {}",
        headline.color(band_color(report.final_score)).bold(),
        "final candidate match score".dimmed()
    );
    println!();
    println!("  0 {} 100", gauge(report.final_score));
    println!();

    println!("{}", "Detailed breakdown".bold());
    println!(
        "  Semantic similarity  {}",
        format!("{:.2}%", report.semantic_similarity)
            .color(band_color(report.semantic_similarity))
    );
    println!(
        "  Skill match          {}",
        format!("{:.2}%", report.skill_match).color(band_color(report.skill_match))
    );
    println!();

    println!("{}", "Skill analysis".bold());
    if report.matched_skills.is_empty() {
        println!("  {} No strong matches detected.", "✓".green());
    } else {
        println!(
            "  {} Matched: {}",
            "✓".green(),
            report.matched_skills.join(", ").green()
        );
    }
    if report.missing_skills.is_empty() {
        println!("  {} No major skill gaps detected.", "✓".green());
    } else {
        println!(
            "  {} Missing: {}",
            "✗".red(),
            report.missing_skills.join(", ").red()
        );
    }
    println!();
}

/// Render a failure message in place of a report.
pub fn render_failure(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_colors() {
        assert_eq!(band_color(0.0), Color::Red);
        assert_eq!(band_color(49.99), Color::Red);
        assert_eq!(band_color(50.0), Color::Yellow);
        assert_eq!(band_color(74.99), Color::Yellow);
        assert_eq!(band_color(75.0), Color::Green);
        assert_eq!(band_color(100.0), Color::Green);
    }

    #[test]
    fn test_gauge_is_fixed_width() {
        for value in [0.0, 33.3, 50.0, 75.0, 100.0] {
            let bar = gauge(value);
            let glyphs = bar.matches('█').count() + bar.matches('░').count();
            assert_eq!(glyphs, GAUGE_WIDTH);
        }
    }

    #[test]
    fn test_gauge_fill_tracks_value() {
        assert_eq!(gauge(0.0).matches('█').count(), 0);
        assert_eq!(gauge(100.0).matches('█').count(), GAUGE_WIDTH);
        assert_eq!(gauge(50.0).matches('█').count(), GAUGE_WIDTH / 2);
    }
}
