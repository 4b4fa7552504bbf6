//! Prometheus metrics collection for the JSON result responder
//!
//! Counts requests and negotiation outcomes. Metrics are exposed via a
//! `/metrics` endpoint that can be scraped by Prometheus.

use prometheus::{register_int_counter_with_registry, IntCounter, Registry};
use std::sync::OnceLock;

/// Global Prometheus registry for responder metrics
static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Metrics structure containing all Prometheus metrics
pub struct ConnegMetrics {
    /// Total number of requests handled by the responder
    pub requests_total: IntCounter,
    /// Total number of responses whose content type echoed the Accept header
    pub negotiated_echo_total: IntCounter,
    /// Total number of responses that fell back to the default content type
    pub negotiated_fallback_total: IntCounter,
    /// Total number of responses using a declared content type
    pub declared_content_type_total: IntCounter,
    /// Total number of JSON bodies written
    pub bodies_written_total: IntCounter,
}

impl ConnegMetrics {
    /// Initialize metrics with a new registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = REGISTRY.get_or_init(Registry::new);

        let requests_total = register_int_counter_with_registry!(
            "conneg_requests_total",
            "Total number of requests handled by the responder",
            registry
        )?;

        let negotiated_echo_total = register_int_counter_with_registry!(
            "conneg_negotiated_echo_total",
            "Total number of responses whose content type echoed the Accept header",
            registry
        )?;

        let negotiated_fallback_total = register_int_counter_with_registry!(
            "conneg_negotiated_fallback_total",
            "Total number of responses that fell back to the default content type",
            registry
        )?;

        let declared_content_type_total = register_int_counter_with_registry!(
            "conneg_declared_content_type_total",
            "Total number of responses using a declared content type",
            registry
        )?;

        let bodies_written_total = register_int_counter_with_registry!(
            "conneg_bodies_written_total",
            "Total number of JSON bodies written",
            registry
        )?;

        Ok(Self {
            requests_total,
            negotiated_echo_total,
            negotiated_fallback_total,
            declared_content_type_total,
            bodies_written_total,
        })
    }

    /// Get the global metrics instance
    ///
    /// # Panics
    ///
    /// Panics if metrics initialization fails. Prometheus metric
    /// registration only fails on duplicate registration or serious
    /// system issues, and the singleton guards against the former.
    pub fn get() -> &'static Self {
        static METRICS: OnceLock<ConnegMetrics> = OnceLock::new();
        METRICS.get_or_init(|| {
            ConnegMetrics::new().expect("Failed to initialize Prometheus metrics")
        })
    }

    /// Record a request being handled
    pub fn record_request(&self) {
        self.requests_total.inc();
    }

    /// Record a negotiation that echoed an Accept media type
    pub fn record_echo(&self) {
        self.negotiated_echo_total.inc();
    }

    /// Record a negotiation that fell back to the default content type
    pub fn record_fallback(&self) {
        self.negotiated_fallback_total.inc();
    }

    /// Record a response that used a declared content type
    pub fn record_declared(&self) {
        self.declared_content_type_total.inc();
    }

    /// Record a JSON body being written
    pub fn record_body_written(&self) {
        self.bodies_written_total.inc();
    }
}

/// Get the Prometheus registry
pub fn get_registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

/// Collect all metrics in Prometheus text format
#[must_use]
pub fn collect_metrics() -> String {
    let registry = get_registry();
    let encoder = prometheus::TextEncoder::new();
    encoder
        .encode_to_string(&registry.gather())
        .unwrap_or_else(|e| format!("Error encoding metrics: {e}"))
}
