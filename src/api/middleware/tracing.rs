//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

type MakeQuerySpan = fn(&Request<axum::body::Body>) -> Span;

/// Creates a tracing middleware for query requests.
///
/// Every request gets an `INFO` span carrying the method, the route path, and
/// the raw query string, so a slow ranking call can be traced back to its
/// parameters. Responses are logged at `INFO` with latency in milliseconds;
/// 5xx responses are additionally logged at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO query{method=GET path=/films/popular params=count=5}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeQuerySpan> {
    TraceLayer::new_for_http()
        .make_span_with(query_span as MakeQuerySpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn query_span(request: &Request<axum::body::Body>) -> Span {
    tracing::info_span!(
        "query",
        method = %request.method(),
        path = request.uri().path(),
        params = request.uri().query().unwrap_or(""),
    )
}

