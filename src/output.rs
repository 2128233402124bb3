//! CLI output formatting.
//!
//! Everything here writes to stdout; logs and the progress bar use stderr.

use std::io::Write;

use anyhow::Result;
use fusker_core::{DownloadOutcome, OutcomeSummary};

/// Message when no input was provided at all.
pub const NO_INPUT_GUIDANCE: &str =
    "No patterns provided. Pass them as arguments or pipe them via stdin.";

/// Example for passing a pattern as an argument.
pub const INPUT_ARG_EXAMPLE: &str =
    "Example: fusker -o ./pics 'https://example.com/img[001-020].jpg'";

/// Example for piping patterns.
pub const INPUT_PIPE_EXAMPLE: &str = "Example: cat patterns.txt | fusker --dry-run";

pub fn print_quick_start_guidance() {
    for line in [NO_INPUT_GUIDANCE, INPUT_ARG_EXAMPLE, INPUT_PIPE_EXAMPLE] {
        println!("{line}");
    }
}

/// Writes one URL per line.
pub fn write_urls<W: Write>(out: &mut W, urls: &[String]) -> Result<()> {
    for url in urls {
        writeln!(out, "{url}")?;
    }
    Ok(())
}

pub(crate) fn outcome_line(outcome: &DownloadOutcome) -> String {
    match outcome {
        DownloadOutcome::Succeeded { local_path, .. } => format!("ok {}", local_path.display()),
        DownloadOutcome::Failed { url, error, .. } => format!("failed {url}: {error}"),
    }
}

pub(crate) fn summary_line(summary: &OutcomeSummary) -> String {
    let mut line = format!(
        "{} of {} downloaded, {} failed",
        summary.succeeded,
        summary.total(),
        summary.failed
    );
    if summary.cancelled > 0 {
        line.push_str(&format!(" ({} cancelled)", summary.cancelled));
    }
    line
}

/// Writes the batch result: a JSON array with `json`, otherwise one line per
/// outcome followed by a summary line.
pub fn write_outcomes<W: Write>(out: &mut W, outcomes: &[DownloadOutcome], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, outcomes)?;
        writeln!(out)?;
        return Ok(());
    }
    for outcome in outcomes {
        writeln!(out, "{}", outcome_line(outcome))?;
    }
    writeln!(
        out,
        "{}",
        summary_line(&OutcomeSummary::from_outcomes(outcomes))
    )?;
    Ok(())
}
