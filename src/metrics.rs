//! Prometheus metric registry for ingested request telemetry.

use std::sync::RwLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

/// Counter and histogram series fed by the ingestion endpoint, shared across
/// all HTTP workers behind `web::Data`.
pub struct RequestMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    /// `None` when the exporter runs in counter-only mode.
    request_duration: Option<HistogramVec>,
    /// Recorders hold the read lock, snapshot-and-reset holds the write
    /// lock. An increment concurrent with a reset is therefore either
    /// visible in the returned snapshot or survives into the next one.
    reset_gate: RwLock<()>,
}

impl RequestMetrics {
    pub fn new(include_histogram: bool) -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new(
                "nodejs_requests_total",
                "Total number of requests processed by Node.js",
            ),
            &["route", "code", "method", "date"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let request_duration = if include_histogram {
            let hist = HistogramVec::new(
                HistogramOpts::new(
                    "nodejs_request_duration_seconds",
                    "Time taken to process a request",
                ),
                &["route", "method"],
            )?;
            registry.register(Box::new(hist.clone()))?;
            Some(hist)
        } else {
            None
        };

        Ok(RequestMetrics {
            registry,
            requests_total,
            request_duration,
            reset_gate: RwLock::new(()),
        })
    }

    /// Increment the counter series for the label tuple by 1 and observe the
    /// duration on the matching histogram series. Inputs are validated by
    /// the ingestion endpoint before they reach this point.
    pub fn record_request(
        &self,
        route: &str,
        code: &str,
        method: &str,
        date: &str,
        duration_seconds: f64,
    ) {
        let _gate = self.reset_gate.read().unwrap();

        self.requests_total
            .with_label_values(&[route, code, method, date])
            .inc();

        if let Some(hist) = &self.request_duration {
            hist.with_label_values(&[route, method])
                .observe(duration_seconds);
        }
    }

    /// Snapshot of every registered series in the exposition text format.
    pub fn render(&self) -> Vec<u8> {
        let _gate = self.reset_gate.read().unwrap();
        self.encode()
    }

    /// Snapshot, then zero every series. The two steps happen under the
    /// write lock so the snapshot and the reset are consistent.
    pub fn render_and_reset(&self) -> Vec<u8> {
        let _gate = self.reset_gate.write().unwrap();
        let body = self.encode();
        self.reset_locked();
        body
    }

    /// Drop every series from both vecs.
    pub fn reset(&self) {
        let _gate = self.reset_gate.write().unwrap();
        self.reset_locked();
    }

    fn reset_locked(&self) {
        self.requests_total.reset();
        if let Some(hist) = &self.request_duration {
            hist.reset();
        }
    }

    fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(err) = encoder.encode(&self.registry.gather(), &mut buf) {
            log::error!("failed to encode metrics: {err}");
        }
        buf
    }
}
