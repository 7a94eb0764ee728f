use actix_web::{middleware::Logger, web, App, HttpServer};
use nodejs_request_exporter::config::Settings;
use nodejs_request_exporter::http;
use nodejs_request_exporter::metrics::RequestMetrics;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = Settings::load();
    log::info!(
        "starting on 0.0.0.0:{} (clean after scrape: {}, histogram: {})",
        settings.port,
        settings.clean_after_scrape,
        settings.include_histogram
    );

    let metrics = web::Data::new(RequestMetrics::new(settings.include_histogram)?);
    let port = settings.port;
    let settings = web::Data::new(settings);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(metrics.clone())
            .app_data(settings.clone())
            .configure(http::routes::init_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
