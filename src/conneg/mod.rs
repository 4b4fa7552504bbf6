//! JSON result content negotiation
//!
//! Implements the observable contract of a JSON action result: an
//! endpoint hands the responder a [`JsonResult`] (the value to
//! serialize, an optional declared content type, optional serializer
//! options) and the responder produces a 200 response whose content
//! type follows a soft negotiation policy and whose body is the value
//! as a single compact JSON document.
//!
//! The policy ([`policy::negotiate`]) echoes a supported `Accept` media
//! type back exactly, falls back to the default type on any mismatch,
//! and is bypassed entirely by a declared content type. It never turns
//! a mismatch into an error response.

pub mod accept;
pub mod error;
pub mod handler;
pub mod logging;
pub mod metrics;
pub mod policy;
pub mod result;
pub mod writer;

// Re-export public types and functions
pub use accept::{parse_accept, quality_for, MediaRange};
pub use error::{ResponderError, Result};
pub use handler::respond;
pub use logging::{log_debug, log_error, log_info, log_warn};
pub use metrics::{collect_metrics, ConnegMetrics};
pub use policy::{negotiate, NegotiationOutcome};
pub use result::{JsonResult, PropertyNaming, SerializerOptions};
pub use writer::write_json;
