//! Request handler implementation

use crate::config::{validate_header_value, SiteConfig};
use crate::conneg::accept::parse_accept;
use crate::conneg::error::Result;
use crate::conneg::logging::log_debug;
use crate::conneg::metrics::ConnegMetrics;
use crate::conneg::policy::{negotiate, NegotiationOutcome};
use crate::conneg::result::JsonResult;
use crate::conneg::writer::write_json;
use axum::body::Body;
use axum::response::Response;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, StatusCode};

/// Produce the HTTP response for a JSON result
///
/// This is the complete responder flow:
/// 1. Parse the request's `Accept` header into ordered media ranges
/// 2. Run the negotiation policy to choose the content type
/// 3. Serialize the result's value with its serializer options
/// 4. Build a 200 response carrying the chosen content type and body
///
/// The status is always 200 in this flow. Unsatisfiable negotiation
/// degrades to the default content type, never to a 406, and null or
/// string values produce JSON bodies, never a 204 or an empty body.
///
/// # Arguments
/// - `result`: The endpoint's result configuration
/// - `headers`: Request headers (only `Accept` is consulted)
/// - `config`: Site configuration with the supported set and default
///
/// # Errors
/// - Returns error if the chosen content type is not a valid header value
/// - Returns error if serialization fails
/// - Returns error if the response cannot be built
pub fn respond(result: &JsonResult, headers: &HeaderMap, config: &SiteConfig) -> Result<Response> {
    let metrics = ConnegMetrics::get();
    metrics.record_request();

    let accept_header = headers.get(ACCEPT).and_then(|v| v.to_str().ok());
    let accept = parse_accept(accept_header);

    let (content_type, outcome) = negotiate(result.content_type(), &accept, config);
    match outcome {
        NegotiationOutcome::Declared => metrics.record_declared(),
        NegotiationOutcome::Echoed => metrics.record_echo(),
        NegotiationOutcome::Fallback => metrics.record_fallback(),
    }

    log_debug(&format!(
        "negotiated content type {content_type} ({outcome:?}) for accept {accept_header:?}"
    ));

    // The echoed value came off the wire; keep it out of the response if
    // it cannot be a header value
    validate_header_value(&content_type)?;

    let body = write_json(result.value(), result.options())?;
    metrics.record_body_written();

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body))?;

    Ok(response)
}
