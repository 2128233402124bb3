//! CLI/config-file merge rules and the derived runtime settings.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::{ArgMatches, CommandFactory, FromArgMatches, parser::ValueSource};
use fusker_core::download::constants::{CONNECT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use fusker_core::{ExpansionMode, TransportOptions};

use crate::app_config::{FileConfig, VerbositySetting};
use crate::cli::Args;

/// Which arguments were given explicitly on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CliValueSources {
    pub(crate) output_dir: bool,
    pub(crate) verbose: bool,
    pub(crate) quiet: bool,
    pub(crate) cross_product: bool,
    pub(crate) follow_redirects: bool,
    pub(crate) connect_timeout: bool,
    pub(crate) timeout: bool,
}

pub(crate) fn parse_cli_with_sources() -> (Args, CliValueSources) {
    let command = Args::command();
    let matches = command.get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());
    let sources = cli_value_sources(&matches);
    (args, sources)
}

fn cli_value_sources(matches: &ArgMatches) -> CliValueSources {
    CliValueSources {
        output_dir: is_commandline_value(matches, "output_dir"),
        verbose: is_commandline_value(matches, "verbose"),
        quiet: is_commandline_value(matches, "quiet"),
        cross_product: is_commandline_value(matches, "cross_product"),
        follow_redirects: is_commandline_value(matches, "follow_redirects"),
        connect_timeout: is_commandline_value(matches, "connect_timeout"),
        timeout: is_commandline_value(matches, "timeout"),
    }
}

fn is_commandline_value(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

/// Fills every argument not given on the command line from the config file.
pub(crate) fn apply_config_defaults(
    mut args: Args,
    cli_sources: &CliValueSources,
    file_config: Option<&FileConfig>,
) -> Result<Args> {
    if let Some(file_config) = file_config {
        if !cli_sources.output_dir
            && args.output_dir.is_none()
            && let Some(output_dir) = &file_config.output_dir
        {
            args.output_dir = Some(output_dir.clone());
        }

        if !cli_sources.cross_product
            && let Some(cross_product) = file_config.cross_product
        {
            args.cross_product = cross_product;
        }

        if !cli_sources.follow_redirects
            && let Some(follow_redirects) = file_config.follow_redirects
        {
            args.follow_redirects = follow_redirects;
        }

        if !cli_sources.connect_timeout
            && let Some(secs) = file_config.connect_timeout_secs
        {
            args.connect_timeout = Some(secs);
        }

        if !cli_sources.timeout
            && let Some(secs) = file_config.read_timeout_secs
        {
            args.timeout = Some(secs);
        }

        if !cli_sources.verbose
            && !cli_sources.quiet
            && let Some(verbosity) = file_config.verbosity
        {
            apply_config_verbosity(&mut args, verbosity);
        }
    }

    for (name, value) in [
        ("connect_timeout", args.connect_timeout),
        ("timeout", args.timeout),
    ] {
        if let Some(value) = value
            && !(1..=MAX_TIMEOUT_SECS).contains(&value)
        {
            bail!("Invalid effective {name} value: {value}. Expected range: 1..={MAX_TIMEOUT_SECS}");
        }
    }

    Ok(args)
}

fn apply_config_verbosity(args: &mut Args, verbosity: VerbositySetting) {
    match verbosity {
        VerbositySetting::Default => {
            args.quiet = false;
            args.verbose = 0;
        }
        VerbositySetting::Verbose => {
            args.quiet = false;
            args.verbose = 1;
        }
        VerbositySetting::Quiet => {
            args.quiet = true;
            args.verbose = 0;
        }
        VerbositySetting::Debug => {
            args.quiet = false;
            args.verbose = 2;
        }
    }
}

pub(crate) fn resolve_default_log_level(args: &Args) -> &'static str {
    if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

pub(crate) fn should_force_cli_log_level(cli_sources: &CliValueSources) -> bool {
    cli_sources.verbose || cli_sources.quiet
}

pub(crate) fn resolve_transport_options(args: &Args) -> TransportOptions {
    TransportOptions {
        connect_timeout: Duration::from_secs(args.connect_timeout.unwrap_or(CONNECT_TIMEOUT_SECS)),
        read_timeout: Duration::from_secs(args.timeout.unwrap_or(READ_TIMEOUT_SECS)),
        follow_redirects: args.follow_redirects,
    }
}

pub(crate) fn resolve_expansion_mode(args: &Args) -> ExpansionMode {
    if args.cross_product {
        ExpansionMode::CrossProduct
    } else {
        ExpansionMode::PerClass
    }
}

pub(crate) fn resolve_output_dir(args: &Args) -> PathBuf {
    args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
}
