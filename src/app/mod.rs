//! Sample site exposing the JSON result endpoints
//!
//! A small axum application wiring one route per result configuration.
//! Every route funnels through [`respond`], so the wire behavior of the
//! responder can be exercised in process (via `tower::ServiceExt::
//! oneshot`) or over a real socket (via [`serve`]).

use crate::config::SiteConfig;
use crate::conneg::error::Result;
use crate::conneg::logging::log_info;
use crate::conneg::metrics::collect_metrics;
use crate::conneg::result::{JsonResult, SerializerOptions};
use crate::conneg::respond;
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use http::HeaderMap;
use serde::Serialize;
use std::sync::Arc;

/// Body payload used by the object-valued endpoints
#[derive(Debug, Clone, Serialize)]
struct Reply {
    #[serde(rename = "Message")]
    message: String,
}

impl Reply {
    fn hello() -> Self {
        Self {
            message: "hello".to_string(),
        }
    }
}

/// Build the sample site router with the default configuration
#[must_use]
pub fn router() -> Router {
    router_with_config(SiteConfig::default())
}

/// Build the sample site router with a custom configuration
#[must_use]
pub fn router_with_config(config: SiteConfig) -> Router {
    let config = Arc::new(config);
    Router::new()
        .route("/JsonResult/Plain", get(plain))
        .route("/JsonResult/Null", get(null))
        .route("/JsonResult/String", get(string))
        .route("/JsonResult/CustomFormatter", get(custom_formatter))
        .route(
            "/JsonResult/CustomSerializerSettings",
            get(custom_serializer_settings),
        )
        .route("/JsonResult/CustomContentType", get(custom_content_type))
        .route("/metrics", get(metrics))
        .with_state(config)
}

/// Serve the sample site on the given address
///
/// # Errors
/// - Returns error if the listener cannot bind
/// - Returns error if the server loop fails
pub async fn serve(addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;
    log_info(&format!("sample site listening on {addr}"));
    axum::serve(listener, router())
        .await
        .map_err(|e| format!("Server error: {e}").into())
}

async fn plain(State(config): State<Arc<SiteConfig>>, headers: HeaderMap) -> Result<Response> {
    respond(&JsonResult::new(Reply::hello()), &headers, &config)
}

async fn null(State(config): State<Arc<SiteConfig>>, headers: HeaderMap) -> Result<Response> {
    respond(&JsonResult::null(), &headers, &config)
}

async fn string(State(config): State<Arc<SiteConfig>>, headers: HeaderMap) -> Result<Response> {
    respond(&JsonResult::new("hello"), &headers, &config)
}

async fn custom_formatter(
    State(config): State<Arc<SiteConfig>>,
    headers: HeaderMap,
) -> Result<Response> {
    let result = JsonResult::new(Reply::hello()).with_options(SerializerOptions::lowercase());
    respond(&result, &headers, &config)
}

async fn custom_serializer_settings(
    State(config): State<Arc<SiteConfig>>,
    headers: HeaderMap,
) -> Result<Response> {
    let result = JsonResult::new(Reply::hello()).with_options(SerializerOptions::lowercase());
    respond(&result, &headers, &config)
}

async fn custom_content_type(
    State(config): State<Arc<SiteConfig>>,
    headers: HeaderMap,
) -> Result<Response> {
    let result =
        JsonResult::new(Reply::hello()).with_content_type("application/message+json");
    respond(&result, &headers, &config)
}

/// Metrics handler exposing Prometheus metrics
async fn metrics() -> ([(http::HeaderName, &'static str); 1], String) {
    (
        [(
            http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        collect_metrics(),
    )
}
