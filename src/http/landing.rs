//! Static landing page pointing scrapers at `/metrics`.

use actix_web::{get, web, HttpResponse, Responder};

const LANDING_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Node.js Request Exporter</title>
</head>
<body>
  <h1>Node.js Request Exporter</h1>
  <p>Prometheus exporter for Node.js request telemetry.</p>
  <ul>
    <li><a href="/metrics">Metrics</a></li>
  </ul>
</body>
</html>
"#;

#[get("/")]
pub async fn landing() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(LANDING_HTML)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(landing);
}
