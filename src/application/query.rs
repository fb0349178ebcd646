//! Deadline and metrics wrapper for top-level queries.

use std::future::Future;
use std::time::{Duration, Instant};

use serde_json::json;

use crate::error::AppError;

/// Runs a query future under a deadline and records its outcome.
///
/// Emits `film_queries_total{operation, outcome}` and
/// `film_query_duration_seconds{operation}`. A query that outlives `timeout`
/// is dropped and reported as [`AppError::Internal`].
///
/// # Errors
///
/// Returns the query's own error, or [`AppError::Internal`] on timeout.
pub async fn run_query<T, F>(
    operation: &'static str,
    timeout: Duration,
    query: F,
) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    let started = Instant::now();

    let result = match tokio::time::timeout(timeout, query).await {
        Ok(result) => result,
        Err(_) => {
            let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
            tracing::warn!(operation, timeout_ms, "Query deadline exceeded");
            Err(AppError::internal(
                "Query deadline exceeded",
                json!({ "operation": operation, "timeout_ms": timeout_ms }),
            ))
        }
    };

    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.code(),
    };

    metrics::counter!("film_queries_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("film_query_duration_seconds", "operation" => operation)
        .record(started.elapsed().as_secs_f64());

    result
}
