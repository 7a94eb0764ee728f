//! In-memory bridge that receives request telemetry from a Node.js
//! application over HTTP and republishes it as Prometheus metrics.

pub mod config;
pub mod http;
pub mod metrics;
