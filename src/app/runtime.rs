use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result, bail};
use fusker_core::{DownloadPipeline, HttpClient, OutcomeSummary, PatternExpander, append_urls};
use tracing::{debug, info, warn};

use crate::app::{
    config_manager, config_runtime, exit_handler, input_processor, progress_manager, terminal,
};
use crate::{ProcessExit, output};

pub(crate) async fn run_fusker() -> Result<ProcessExit> {
    let (args, cli_sources) = config_runtime::parse_cli_with_sources();
    let resolved = config_manager::resolve_config(args, &cli_sources)?;

    let default_level = config_runtime::resolve_default_log_level(&resolved.args);
    let force_cli_log_level = config_runtime::should_force_cli_log_level(&cli_sources);
    terminal::init_tracing(
        default_level,
        force_cli_log_level,
        terminal::no_color_env_requested(),
    );

    debug!(args = ?resolved.args, "CLI arguments resolved");

    let patterns = input_processor::collect_patterns(&resolved.args)?;
    if patterns.is_empty() {
        output::print_quick_start_guidance();
        return Ok(ProcessExit::Success);
    }

    let expander = PatternExpander::new(resolved.mode);
    let urls = expander
        .expand_all(&patterns)
        .context("Failed to expand patterns")?;
    info!(
        patterns = patterns.len(),
        urls = urls.len(),
        mode = resolved.mode.as_str(),
        "Patterns expanded"
    );

    if let Some(list_path) = &resolved.args.save_list {
        append_urls(list_path, &urls).await?;
        info!(path = %list_path.display(), count = urls.len(), "Saved URL list");
    }

    if resolved.args.dry_run {
        output::write_urls(&mut io::stdout().lock(), &urls)?;
        return Ok(ProcessExit::Success);
    }

    let output_dir = &resolved.output_dir;
    if !output_dir.is_dir() {
        bail!(
            "Output directory '{}' does not exist or is not a directory",
            output_dir.display()
        );
    }

    let client = HttpClient::with_options(resolved.transport)
        .context("Failed to build HTTP client")?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_signal = Arc::clone(&interrupted);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupted_signal.store(true, Ordering::SeqCst);
        }
    });

    let use_progress_bar = terminal::should_use_progress_bar(
        io::stderr().is_terminal(),
        resolved.args.quiet,
        terminal::is_dumb_terminal(),
    );
    let progress = progress_manager::DownloadProgress::new(use_progress_bar, urls.len());

    let pipeline = DownloadPipeline::new(client).with_interrupt(Arc::clone(&interrupted));
    let outcomes = pipeline
        .run_with_observer(output_dir, &urls, |_, outcome| progress.record(outcome))
        .await;
    progress.finish();

    output::write_outcomes(&mut io::stdout().lock(), &outcomes, resolved.args.json)?;

    let summary = OutcomeSummary::from_outcomes(&outcomes);
    if interrupted.load(Ordering::SeqCst) {
        warn!(
            succeeded = summary.succeeded,
            cancelled = summary.cancelled,
            "Interrupted before all downloads ran"
        );
    }

    Ok(exit_handler::determine_exit_outcome(&summary))
}
