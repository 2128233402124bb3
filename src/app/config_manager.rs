//! Configuration lifecycle: load file config, merge CLI, resolve runtime settings.

use std::path::PathBuf;

use anyhow::Result;
use fusker_core::{ExpansionMode, TransportOptions};

use crate::app::config_runtime::{self, CliValueSources};
use crate::app_config::{FileConfig, load_default_file_config};
use crate::cli::Args;

/// Resolved configuration bundle used by the runtime.
pub(crate) struct ResolvedConfig {
    pub(crate) args: Args,
    pub(crate) output_dir: PathBuf,
    pub(crate) transport: TransportOptions,
    pub(crate) mode: ExpansionMode,
}

/// Loads the default config file (if any) and merges CLI overrides on top.
pub(crate) fn resolve_config(args: Args, cli_sources: &CliValueSources) -> Result<ResolvedConfig> {
    let file_config = load_default_file_config()?;
    resolve_with_file_config(args, cli_sources, file_config.as_ref())
}

fn resolve_with_file_config(
    args: Args,
    cli_sources: &CliValueSources,
    file_config: Option<&FileConfig>,
) -> Result<ResolvedConfig> {
    let args = config_runtime::apply_config_defaults(args, cli_sources, file_config)?;
    Ok(ResolvedConfig {
        output_dir: config_runtime::resolve_output_dir(&args),
        transport: config_runtime::resolve_transport_options(&args),
        mode: config_runtime::resolve_expansion_mode(&args),
        args,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::time::Duration;

    #[test]
    fn test_resolve_without_config_file_returns_defaults() {
        let args = Args::try_parse_from(["fusker"]).unwrap();
        let resolved =
            resolve_with_file_config(args, &CliValueSources::default(), None).unwrap();

        assert_eq!(resolved.output_dir, PathBuf::from("."));
        assert_eq!(resolved.mode, ExpansionMode::PerClass);
        assert_eq!(resolved.transport, TransportOptions::default());
    }

    #[test]
    fn test_resolve_applies_file_config() {
        let args = Args::try_parse_from(["fusker"]).unwrap();
        let config = FileConfig {
            output_dir: Some(PathBuf::from("/data/pics")),
            read_timeout_secs: Some(45),
            cross_product: Some(true),
            ..FileConfig::default()
        };
        let resolved =
            resolve_with_file_config(args, &CliValueSources::default(), Some(&config)).unwrap();

        assert_eq!(resolved.output_dir, PathBuf::from("/data/pics"));
        assert_eq!(resolved.mode, ExpansionMode::CrossProduct);
        assert_eq!(resolved.transport.read_timeout, Duration::from_secs(45));
        assert_eq!(resolved.transport.connect_timeout, Duration::from_secs(30));
    }
}
