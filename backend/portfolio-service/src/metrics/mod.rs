//! Prometheus metrics for portfolio-service.
//!
//! Exposes HTTP and content collectors and an HTTP handler for the `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// HTTP requests by method and response status.
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "portfolio_http_requests_total",
        "Total HTTP requests segmented by method and status",
        &["method", "status"]
    )
    .expect("failed to register portfolio_http_requests_total");

    /// HTTP request latency by method.
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "portfolio_http_request_duration_seconds",
        "HTTP request duration segmented by method",
        &["method"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
    )
    .expect("failed to register portfolio_http_request_duration_seconds");

    /// Records created per collection (blog, timeline, media, contact).
    pub static ref RECORDS_CREATED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "portfolio_records_created_total",
        "Records created segmented by collection",
        &["collection"]
    )
    .expect("failed to register portfolio_records_created_total");

    /// Payloads rejected by validation per collection.
    pub static ref VALIDATION_FAILURES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "portfolio_validation_failures_total",
        "Create payloads rejected by validation segmented by collection",
        &["collection"]
    )
    .expect("failed to register portfolio_validation_failures_total");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
