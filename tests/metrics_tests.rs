//! Tests for Prometheus metrics collection
//!
//! Counters are process-global, so assertions compare deltas rather
//! than absolute values; other tests may run concurrently.

mod tests {
    use json_conneg::conneg::{collect_metrics, ConnegMetrics};
    use json_conneg::{respond, JsonResult, SiteConfig};
    use http::HeaderMap;

    #[test]
    fn test_metrics_singleton_access() {
        let metrics1 = ConnegMetrics::get();
        let metrics2 = ConnegMetrics::get();
        assert_eq!(metrics1.requests_total.get(), metrics2.requests_total.get());
    }

    #[test]
    fn test_respond_records_request_and_body() {
        let metrics = ConnegMetrics::get();
        let initial_requests = metrics.requests_total.get();
        let initial_bodies = metrics.bodies_written_total.get();

        let config = SiteConfig::default();
        respond(&JsonResult::null(), &HeaderMap::new(), &config)
            .expect("respond must not fail");

        assert!(
            metrics.requests_total.get() > initial_requests,
            "Request counter should advance"
        );
        assert!(
            metrics.bodies_written_total.get() > initial_bodies,
            "Body counter should advance"
        );
    }

    #[test]
    fn test_fallback_counter_advances_on_mismatch() {
        let metrics = ConnegMetrics::get();
        let initial = metrics.negotiated_fallback_total.get();

        let config = SiteConfig::default();
        let mut headers = HeaderMap::new();
        headers.insert(http::header::ACCEPT, "application/xml".parse().unwrap());
        respond(&JsonResult::null(), &headers, &config).expect("respond must not fail");

        assert!(
            metrics.negotiated_fallback_total.get() > initial,
            "Fallback counter should advance on an unsupported Accept"
        );
    }

    #[test]
    fn test_declared_counter_advances_on_override() {
        let metrics = ConnegMetrics::get();
        let initial = metrics.declared_content_type_total.get();

        let config = SiteConfig::default();
        let result = JsonResult::null().with_content_type("application/message+json");
        respond(&result, &HeaderMap::new(), &config).expect("respond must not fail");

        assert!(
            metrics.declared_content_type_total.get() > initial,
            "Declared counter should advance when a declared type is used"
        );
    }

    #[test]
    fn test_collect_metrics_text_format() {
        let config = SiteConfig::default();
        respond(&JsonResult::null(), &HeaderMap::new(), &config)
            .expect("respond must not fail");

        let output = collect_metrics();
        assert!(output.contains("conneg_requests_total"));
        assert!(output.contains("conneg_bodies_written_total"));
        assert!(
            output.contains("# TYPE conneg_requests_total counter"),
            "Output should be in Prometheus text exposition format"
        );
    }
}
