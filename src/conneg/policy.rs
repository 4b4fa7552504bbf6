//! Content negotiation policy
//!
//! Chooses the response content type from the result configuration and
//! the request's `Accept` header. This is soft negotiation: an
//! unsatisfiable `Accept` header falls back to the default type, it
//! never fails the request.

use crate::config::SiteConfig;
use crate::conneg::accept::MediaRange;

/// Outcome of a negotiation, used for logging and metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationOutcome {
    /// The result declared an explicit content type; negotiation skipped
    Declared,
    /// A supported media type from the `Accept` header was echoed back
    Echoed,
    /// No supported match; the default content type was used
    Fallback,
}

/// Select the response content type
///
/// Policy, in priority order:
/// 1. A declared content type on the result is used verbatim; the
///    `Accept` header is ignored.
/// 2. The highest-quality `Accept` range naming a supported media type
///    (quality > 0) is echoed back exactly as the client spelled it.
///    Quality ties break in favor of the first-listed range.
/// 3. Otherwise the configured default content type is used. Unsupported
///    types, wildcards, and q=0 entries all land here.
///
/// The choice is independent of the value being serialized; null and
/// string values negotiate exactly like objects.
///
/// # Arguments
/// - `declared`: Declared content type from the result configuration
/// - `accept`: Parsed `Accept` header ranges, in header order
/// - `config`: Site configuration with the supported set and default
///
/// # Returns
/// - The chosen content type and how it was chosen
#[must_use]
pub fn negotiate(
    declared: Option<&str>,
    accept: &[MediaRange],
    config: &SiteConfig,
) -> (String, NegotiationOutcome) {
    if let Some(content_type) = declared {
        return (content_type.to_string(), NegotiationOutcome::Declared);
    }

    let mut best: Option<&MediaRange> = None;
    for range in accept {
        if range.quality <= 0.0 || !config.supports(&range.media_type) {
            continue;
        }
        // Strict comparison keeps the first-listed range on quality ties
        if best.is_none_or(|b| range.quality > b.quality) {
            best = Some(range);
        }
    }

    match best {
        Some(range) => (range.media_type.clone(), NegotiationOutcome::Echoed),
        None => (
            config.default_content_type.clone(),
            NegotiationOutcome::Fallback,
        ),
    }
}
