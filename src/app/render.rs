//! Probe result rendering.

use std::fmt::Write as _;
use std::net::Ipv4Addr;

use colored::*;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::probe::ProbeResult;

#[derive(Serialize)]
struct ProbeLine<'a> {
    tick: u64,
    target_ip: Ipv4Addr,
    #[serde(flatten)]
    result: &'a ProbeResult,
}

/// Formats one probe for stdout, without a trailing newline.
pub fn format_probe(
    result: &ProbeResult,
    tick: u64,
    target_ip: Ipv4Addr,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => {
            let line = ProbeLine {
                tick,
                target_ip,
                result,
            };
            serde_json::to_string(&line).unwrap_or_else(|_| "{}".into())
        }
        OutputFormat::Plain => format_plain(result, tick, target_ip),
    }
}

fn format_plain(result: &ProbeResult, tick: u64, target_ip: Ipv4Addr) -> String {
    let width = result
        .outcomes()
        .iter()
        .map(|o| o.resolver_name.len())
        .max()
        .unwrap_or(0);

    let summary = format!(
        "[tick {}] {}/{} resolvers return {}",
        tick,
        result.resolved_count(),
        result.outcomes().len(),
        target_ip
    );
    let mut out = if result.fully_propagated() {
        summary.green().bold().to_string()
    } else {
        summary.yellow().to_string()
    };

    for outcome in result.outcomes() {
        let name = format!("{:width$}", outcome.resolver_name);
        let answer = match (outcome.observed_ip, outcome.failure) {
            (Some(ip), _) => ip.to_string(),
            (None, Some(failure)) => format!("({failure})"),
            (None, None) => "(no answer)".to_string(),
        };
        let line = if outcome.resolved {
            format!("  ✔ {name}  {answer}").green()
        } else {
            format!("  ✘ {name}  {answer}").red()
        };
        let _ = write!(out, "\n{line}");
    }
    out
}
