//! Site-level configuration for the JSON result responder

mod validation;

pub use validation::{validate_header_value, validate_media_type};

use serde::{Deserialize, Serialize};

/// Configuration shared by every endpoint of a site
///
/// Holds the negotiation defaults: the media types the JSON writer is
/// willing to echo back from an `Accept` header, and the content type
/// used when negotiation finds no match. Constructed once at startup
/// and shared read-only across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Content type used when negotiation finds no supported match
    pub default_content_type: String,
    /// Media types that may be echoed back from the `Accept` header
    pub supported_media_types: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_content_type: "application/json".to_string(),
            supported_media_types: vec![
                "application/json".to_string(),
                "text/json".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    /// Create a configuration with a custom supported set
    ///
    /// # Arguments
    /// - `default_content_type`: fallback content type
    /// - `supported_media_types`: media types eligible for echoing
    pub fn new(
        default_content_type: impl Into<String>,
        supported_media_types: Vec<String>,
    ) -> Self {
        Self {
            default_content_type: default_content_type.into(),
            supported_media_types,
        }
    }

    /// Whether a media type is in the supported set (case-insensitive)
    #[must_use]
    pub fn supports(&self, media_type: &str) -> bool {
        self.supported_media_types
            .iter()
            .any(|m| m.eq_ignore_ascii_case(media_type))
    }

    /// Validate the configuration's media type strings
    ///
    /// # Returns
    /// - `Ok(())` if the default and every supported type are well-formed
    /// - `Err` naming the first invalid entry
    pub fn validate(&self) -> crate::conneg::Result<()> {
        validate_media_type(&self.default_content_type)?;
        for media_type in &self.supported_media_types {
            validate_media_type(media_type)?;
        }
        Ok(())
    }
}
