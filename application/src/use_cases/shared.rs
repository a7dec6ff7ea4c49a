//! Shared utilities for use cases.
//!
//! Contains cancellation checking and a cancellable await helper used by
//! both the demonstration run and the interactive loop.

use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
pub(crate) fn is_cancelled(token: &Option<CancellationToken>) -> bool {
    token.as_ref().is_some_and(CancellationToken::is_cancelled)
}

/// Await `fut` unless the token fires first.
///
/// Returns `None` when cancelled; the in-flight request is dropped.
pub(crate) async fn run_cancellable<F: Future>(
    token: &Option<CancellationToken>,
    fut: F,
) -> Option<F::Output> {
    match token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => None,
            output = fut => Some(output),
        },
        None => Some(fut.await),
    }
}
