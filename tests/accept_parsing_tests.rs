//! Tests for Accept header parsing and the negotiation policy
//!
//! Exercises the header interpretation path the way clients actually
//! send it: lists, q-values, wildcards, odd spacing, and malformed
//! segments.

mod tests {
    use json_conneg::conneg::quality_for;
    use json_conneg::{negotiate, parse_accept, SiteConfig};

    #[test]
    fn test_parse_accept_realistic_browser_header() {
        let header = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
        let ranges = parse_accept(Some(header));
        assert_eq!(ranges.len(), 4);
        assert_eq!(quality_for(&ranges, "text/html"), 1.0);
        assert_eq!(quality_for(&ranges, "application/xml"), 0.9);
        assert_eq!(quality_for(&ranges, "*/*"), 0.8);
    }

    #[test]
    fn test_parse_accept_spacing_variants() {
        let variants = vec![
            "application/json,text/json",
            "application/json, text/json",
            "application/json ,  text/json",
        ];
        for header in variants {
            let ranges = parse_accept(Some(header));
            assert_eq!(ranges.len(), 2, "Header '{header}' should parse two ranges");
            assert_eq!(ranges[0].media_type, "application/json");
            assert_eq!(ranges[1].media_type, "text/json");
        }
    }

    #[test]
    fn test_parse_accept_ignores_non_q_parameters() {
        let ranges = parse_accept(Some("application/json;charset=utf-8;q=0.7"));
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].media_type, "application/json");
        assert_eq!(ranges[0].quality, 0.7);
    }

    #[test]
    fn test_parse_accept_malformed_q_defaults_to_one() {
        let ranges = parse_accept(Some("application/json;q=abc"));
        assert_eq!(ranges[0].quality, 1.0, "Unparseable q-value keeps the default");
    }

    #[test]
    fn test_negotiation_scenarios() {
        let config = SiteConfig::default();

        // (accept header, expected content type)
        let cases = vec![
            (None, "application/json"),
            (Some("application/json"), "application/json"),
            (Some("text/json"), "text/json"),
            (Some("application/xml"), "application/json"),
            (Some("text/xml"), "application/json"),
            (Some("*/*"), "application/json"),
            (Some("text/xml, text/json"), "text/json"),
            (Some("text/json;q=0.1, application/json;q=0.2"), "application/json"),
            (Some("application/json;q=0, text/xml"), "application/json"),
        ];

        for (accept, expected) in cases {
            let ranges = parse_accept(accept);
            let (content_type, _) = negotiate(None, &ranges, &config);
            assert_eq!(
                content_type, expected,
                "Accept {accept:?} should negotiate to {expected}"
            );
        }
    }

    #[test]
    fn test_negotiation_with_custom_supported_set() {
        let config = SiteConfig::new(
            "application/json",
            vec!["application/json".to_string()],
        );
        let ranges = parse_accept(Some("text/json"));
        let (content_type, _) = negotiate(None, &ranges, &config);
        assert_eq!(
            content_type, "application/json",
            "text/json is not supported in the custom set"
        );
    }
}
