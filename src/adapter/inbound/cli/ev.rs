//! Handler for the `ev` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::EvArgs;
use crate::adapter::inbound::cli::output;
use crate::application::calculator::{EvCalculator, EvReport, EvRequest};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct KellyRow {
    #[tabled(rename = "Kelly")]
    fraction: &'static str,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Return")]
    payout: String,
}

/// Execute the ev command.
pub fn execute(args: &EvArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let bankroll = args.bankroll.unwrap_or(config.kelly.bankroll);

    let mut request = EvRequest::parse(args.payout_odds, &args.fv_odds)?.with_boost(args.boost);
    if let Some(name) = &args.name {
        request = request.with_name(name.as_str());
    }

    let report = EvCalculator::new(bankroll).evaluate(request)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "ev",
            "report": serde_json::to_value(&report)?,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        println!("{}", summary_line(&report));
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

/// One-line summary printed in quiet mode.
fn summary_line(report: &EvReport) -> String {
    let result = &report.result;
    format!(
        "EV {:.1}% | WinProb {:.1}% | FairVal {}",
        result.ev_percent, result.win_probability_percent, result.fair_odds
    )
}

fn print_report(report: &EvReport) {
    let result = &report.result;

    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&format!("📊 {}", report.name));
    output::field("Payout", format!("{:+}", report.payout_odds));
    output::field("FV Odds", report.legs_display());
    if report.boost != 0 {
        output::field("Boost", format!("{:+}", report.boost));
    }

    output::section("Result");
    let ev = format!("{:.1}%", result.ev_percent);
    let ev = if result.is_positive() {
        output::positive(ev)
    } else {
        output::negative(ev)
    };
    output::field("%EV", ev);
    output::field("WinProb", format!("{:.1}%", result.win_probability_percent));
    output::field("FairVal", result.fair_odds);

    output::section(&format!(
        "Kelly Values / Return {}",
        output::muted(format!("({}u bankroll)", report.bankroll.normalize()))
    ));
    let rows: Vec<KellyRow> = report
        .kelly
        .iter()
        .map(|line| KellyRow {
            fraction: line.fraction.label(),
            stake: format!("{:.2}u", line.stake),
            payout: format!("{:.2}u", line.payout),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    if !result.is_positive() {
        output::hint("no edge at this price, Kelly stakes nothing");
    }
}
