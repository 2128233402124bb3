//! Maps a finished batch onto the process exit outcome.

use fusker_core::OutcomeSummary;

use crate::ProcessExit;

/// Success when nothing failed (an empty batch included), partial when some
/// downloads landed, failure otherwise. Cancelled items count as failed.
pub(crate) fn determine_exit_outcome(summary: &OutcomeSummary) -> ProcessExit {
    match (summary.succeeded, summary.failed) {
        (_, 0) => ProcessExit::Success,
        (0, _) => ProcessExit::Failure,
        _ => ProcessExit::Partial,
    }
}
