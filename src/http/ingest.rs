//! Ingestion endpoint for Node.js request-telemetry events.

use actix_web::{post, web, HttpResponse, Responder};
use chrono::{SecondsFormat, TimeZone, Utc};
use serde::Deserialize;

use crate::metrics::RequestMetrics;

/// One request-telemetry event as posted by the Node.js side. Every field
/// arrives as a string, including the numeric ones.
#[derive(Debug, Deserialize)]
pub struct RequestEvent {
    pub route: String,
    pub code: String,
    pub method: String,
    /// Unix timestamp in seconds.
    pub date: String,
    /// Request duration in seconds.
    pub duration: String,
}

#[post("/nodejs-requests")]
pub async fn ingest(
    metrics: web::Data<RequestMetrics>,
    body: web::Json<RequestEvent>,
) -> impl Responder {
    record(&metrics, body.into_inner())
}

/// Older clients post to `/requests`; same contract.
#[post("/requests")]
pub async fn ingest_alias(
    metrics: web::Data<RequestMetrics>,
    body: web::Json<RequestEvent>,
) -> impl Responder {
    record(&metrics, body.into_inner())
}

fn record(metrics: &RequestMetrics, event: RequestEvent) -> HttpResponse {
    // Series values must never go negative, so a negative or non-finite
    // duration is as invalid as an unparseable one.
    let duration = match event.duration.parse::<f64>() {
        Ok(d) if d.is_finite() && d >= 0.0 => d,
        _ => return HttpResponse::BadRequest().body("Invalid duration value"),
    };

    let timestamp = match event.date.parse::<i64>() {
        Ok(t) => t,
        Err(_) => return HttpResponse::BadRequest().body("Invalid parse date"),
    };

    // Normalize the timestamp to whole-second RFC3339 so the date label
    // stays bounded to timestamp granularity instead of arbitrary strings.
    let date = match Utc.timestamp_opt(timestamp, 0).single() {
        Some(t) => t.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => return HttpResponse::BadRequest().body("Invalid parse date"),
    };

    metrics.record_request(&event.route, &event.code, &event.method, &date, duration);
    HttpResponse::Ok().finish()
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(ingest).service(ingest_alias);
}
