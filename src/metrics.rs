//! Prometheus metrics & middleware helper.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

/// Registry shared by the request middleware and the domain counters below.
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Players accepted by `POST /players`.
pub static PLAYERS_CREATED: Lazy<IntCounter> = Lazy::new(|| {
    let counter = IntCounter::new("roster_players_created_total", "Players created")
        .expect("players_created counter");
    REGISTRY
        .register(Box::new(counter.clone()))
        .expect("register players_created");
    counter
});

/// Request middleware; also serves everything in [`REGISTRY`] on `/metrics`.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("roster")
        .registry(REGISTRY.clone())
        .endpoint("/metrics")
        .build()
        .expect("metrics builder")
});
