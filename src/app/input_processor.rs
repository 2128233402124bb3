//! Assembly of the pattern list from positional arguments and/or stdin.

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use fusker_core::split_pattern_list;

use crate::cli::Args;

/// Collects patterns from the command line, falling back to piped stdin.
///
/// Stdin is read only when no positional pattern was given and stdin is not
/// a terminal. Returns an empty list when there is no input at all.
pub(crate) fn collect_patterns(args: &Args) -> Result<Vec<String>> {
    if !args.patterns.is_empty() {
        return Ok(patterns_from_text(&args.patterns.join("\n")));
    }
    if io::stdin().is_terminal() {
        return Ok(Vec::new());
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read patterns from stdin")?;
    Ok(patterns_from_text(&buffer))
}

fn patterns_from_text(text: &str) -> Vec<String> {
    split_pattern_list(text)
}
