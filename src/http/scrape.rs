//! Prometheus exposition endpoint.

use actix_web::{get, web, HttpResponse, Responder};

use crate::config::Settings;
use crate::metrics::RequestMetrics;

#[get("/metrics")]
pub async fn scrape(
    metrics: web::Data<RequestMetrics>,
    settings: web::Data<Settings>,
) -> impl Responder {
    let body = if settings.clean_after_scrape {
        metrics.render_and_reset()
    } else {
        metrics.render()
    };

    HttpResponse::Ok()
        .content_type(prometheus::TEXT_FORMAT)
        .body(body)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(scrape);
}
