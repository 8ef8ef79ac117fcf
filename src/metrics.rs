//! Export outcome counters.

use actix_web::{HttpResponse, Responder};
use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref EXPORTS_TOTAL: IntCounterVec = {
        let counter = IntCounterVec::new(
            Opts::new("exports_total", "PDF export requests by report and outcome")
                .namespace("catalog_export_server"),
            &["report", "outcome"],
        )
        .expect("exports_total metric definition is valid");
        REGISTRY
            .register(Box::new(counter.clone()))
            .expect("exports_total registered once");
        counter
    };
}

pub fn record_export(report: &str, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    EXPORTS_TOTAL.with_label_values(&[report, outcome]).inc();
}

/// GET /metrics/exports
pub async fn export_metrics() -> impl Responder {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&REGISTRY.gather(), &mut buffer) {
        log::error!("Failed to encode export metrics: {}", e);
        return HttpResponse::InternalServerError().finish();
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
