//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Expand bracketed URL range patterns and download every resulting file.
///
/// A pattern such as `https://example.com/img[001-120].jpg` expands to 120
/// URLs. Digit ranges (`[1-10]`, `[-7]`), lowercase ranges (`[a-z]`) and
/// uppercase ranges (`[A-Z]`) are supported. Several patterns may be passed
/// as arguments, separated by commas, or piped through stdin.
#[derive(Parser, Debug, Clone)]
#[command(name = "fusker")]
#[command(author, version, about)]
pub struct Args {
    /// Patterns to expand (reads stdin when omitted)
    #[arg(value_name = "PATTERNS")]
    pub patterns: Vec<String>,

    /// Directory to save downloaded files into (must already exist)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the expanded URLs without downloading anything
    #[arg(long)]
    pub dry_run: bool,

    /// Append every expanded URL to FILE, one per line
    #[arg(long, value_name = "FILE")]
    pub save_list: Option<PathBuf>,

    /// Print download outcomes as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Expand mixed-class patterns into their full cross product
    #[arg(long)]
    pub cross_product: bool,

    /// Follow HTTP redirects instead of treating them as failures
    #[arg(long)]
    pub follow_redirects: bool,

    /// Connect timeout in seconds (1-3600)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub connect_timeout: Option<u64>,

    /// Whole-request timeout in seconds (1-3600)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub timeout: Option<u64>,
}
