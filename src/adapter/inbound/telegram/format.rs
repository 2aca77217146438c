//! Message formatting for Telegram replies.

use std::fmt::Write as _;

use crate::application::calculator::EvReport;

/// Longest bet name shown in a reply title.
const MAX_NAME_CHARS: usize = 60;

/// Render an EV report as a Telegram `MarkdownV2` message.
#[must_use]
pub fn format_report(report: &EvReport) -> String {
    let result = &report.result;
    let name = truncate(&report.name, MAX_NAME_CHARS);

    let mut msg = format!(
        "📊 *{}*\n\
        _EV Calc \\(Probit\\)_ ✅\n\
        \n\
        *Input*\n\
        Payout: `{:+}`\n\
        FV Odds: `{}`\n",
        escape_markdown(&name),
        report.payout_odds,
        report.legs_display(),
    );
    if report.boost != 0 {
        let _ = writeln!(msg, "Boost: `{:+}`", report.boost);
    }

    let _ = write!(
        msg,
        "\n\
        *Result*\n\
        %EV: `{:.1}%`\n\
        WinProb: `{:.1}%`\n\
        FairVal: `{}`\n\
        \n\
        *Kelly Values / Return* \\({}u bankroll\\)\n",
        result.ev_percent,
        result.win_probability_percent,
        result.fair_odds,
        escape_markdown(&report.bankroll.normalize().to_string()),
    );

    for line in &report.kelly {
        let _ = writeln!(
            msg,
            "{}: `{:.2}u -> {:.2}u`",
            escape_markdown(line.fraction.label()),
            line.stake,
            line.payout
        );
    }

    msg
}

/// Plain-text reply for a failed calculation or malformed command.
#[must_use]
pub fn format_error(message: impl std::fmt::Display) -> String {
    format!("⚠️ Error: {message}")
}

/// Truncate a string with ellipsis (Unicode-safe).
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::calculator::{EvCalculator, EvRequest};
    use rust_decimal_macros::dec;

    fn report(request: EvRequest) -> EvReport {
        EvCalculator::new(dec!(100)).evaluate(request).unwrap()
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("hello"), "hello");
        assert_eq!(escape_markdown("hello_world"), "hello\\_world");
        assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
        assert_eq!(escape_markdown("1/2 (ML)"), "1/2 \\(ML\\)");
        assert_eq!(escape_markdown("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 5), "hello...");
        assert_eq!(truncate("🎯🚀💰", 2), "🎯🚀...");
    }

    #[test]
    fn report_has_all_sections() {
        let text = format_report(&report(
            EvRequest::new(100, vec![-110]).with_name("Knicks +3.5"),
        ));

        assert!(text.starts_with("📊 *Knicks \\+3\\.5*"), "{text}");
        assert!(text.contains("Payout: `+100`"));
        assert!(text.contains("FV Odds: `-110`"));
        assert!(!text.contains("Boost:"));
        assert!(text.contains("%EV: `4.8%`"));
        assert!(text.contains("WinProb: `52.4%`"));
        assert!(text.contains("FairVal: `-110`"));
        assert!(text.contains("\\(100u bankroll\\)"));
        for label in ["Full: `", "1/2: `", "1/4: `", "1/8: `"] {
            assert!(text.contains(label), "missing {label} in {text}");
        }
    }

    #[test]
    fn report_shows_boost_when_set() {
        let text = format_report(&report(EvRequest::new(100, vec![-110]).with_boost(20)));
        assert!(text.contains("Boost: `+20`"));
        assert!(text.contains("📊 *Unnamed Bet*"));
    }

    #[test]
    fn no_edge_renders_zero_stakes() {
        let text = format_report(&report(EvRequest::new(100, vec![100])));
        assert!(text.contains("Full: `0.00u -> 0.00u`"), "{text}");
        assert!(text.contains("%EV: `0.0%`"));
    }

    #[test]
    fn positive_underdog_fair_value_has_plus_sign() {
        let text = format_report(&report(EvRequest::new(300, vec![-110, -110])));
        assert!(text.contains("FairVal: `+264`"), "{text}");
    }

    #[test]
    fn error_reply() {
        assert_eq!(format_error("boom"), "⚠️ Error: boom");
    }
}
