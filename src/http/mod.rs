pub mod ingest;
pub mod landing;
pub mod routes;
pub mod scrape;
