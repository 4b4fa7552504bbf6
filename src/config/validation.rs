//! Validation functions for configuration values
//!
//! These functions validate media type and header strings before they
//! are used. They are public to allow testing.

use crate::conneg::error::{ResponderError, Result};

// RFC 7230 token characters, the set allowed in type and subtype names
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

/// Validate a media type string (`type/subtype`)
///
/// # Arguments
/// - `media_type`: Media type string to validate (no parameters)
///
/// # Returns
/// - `Ok(())` if the string is a well-formed type/subtype pair
/// - `Err` if the string is empty, missing a slash, or contains
///   characters outside the token set
pub fn validate_media_type(media_type: &str) -> Result<()> {
    if media_type.is_empty() {
        return Err(ResponderError::from("Media type cannot be empty"));
    }

    let mut parts = media_type.splitn(2, '/');
    let main_type = parts.next().unwrap_or("");
    let Some(sub_type) = parts.next() else {
        return Err(ResponderError::from(format!(
            "Media type must be type/subtype: {media_type}"
        )));
    };

    if main_type.is_empty() || sub_type.is_empty() {
        return Err(ResponderError::from(format!(
            "Media type has an empty component: {media_type}"
        )));
    }

    if !main_type.chars().all(is_token_char) || !sub_type.chars().all(is_token_char) {
        return Err(ResponderError::from(format!(
            "Media type contains invalid characters: {media_type}"
        )));
    }

    Ok(())
}

/// Validate a header value before echoing it into a response
///
/// # Arguments
/// - `value`: Header value to validate
///
/// # Returns
/// - `Ok(())` if the value is safe to place in a response header
/// - `Err` if the value is empty, oversized, or contains control
///   characters (header injection)
pub fn validate_header_value(value: &str) -> Result<()> {
    // Reasonable limit for a single media type; real Accept headers are
    // far shorter
    const MAX_HEADER_VALUE_LENGTH: usize = 1024;

    if value.trim().is_empty() {
        return Err(ResponderError::from("Header value cannot be empty"));
    }

    if value.len() > MAX_HEADER_VALUE_LENGTH {
        return Err(ResponderError::from(format!(
            "Header value too large: maximum is {} bytes, got {}",
            MAX_HEADER_VALUE_LENGTH,
            value.len()
        )));
    }

    if value.chars().any(|c| c.is_control()) {
        return Err(ResponderError::from(
            "Header value contains control characters",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_media_type_accepts_common_types() {
        for media_type in [
            "application/json",
            "text/json",
            "application/message+json",
            "application/xml",
        ] {
            assert!(
                validate_media_type(media_type).is_ok(),
                "Should accept {media_type}"
            );
        }
    }

    #[test]
    fn test_validate_media_type_rejects_malformed() {
        for media_type in ["", "json", "/json", "application/", "not a/type"] {
            assert!(
                validate_media_type(media_type).is_err(),
                "Should reject {media_type:?}"
            );
        }
    }

    #[test]
    fn test_validate_header_value_rejects_injection() {
        assert!(validate_header_value("application/json").is_ok());
        assert!(validate_header_value("bad\r\nSet-Cookie: x").is_err());
        assert!(validate_header_value("").is_err());
    }

    #[test]
    fn test_validate_header_value_rejects_oversized() {
        let value = "a".repeat(2048);
        assert!(validate_header_value(&value).is_err());
    }
}
