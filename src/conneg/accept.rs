//! Accept header parsing
//!
//! Parses the request's `Accept` header into an ordered list of media
//! ranges with q-values. Parsing is lenient: malformed segments are
//! skipped rather than rejected, so a bad header can never fail a
//! request.

/// One media range from an `Accept` header
///
/// `position` is the zero-based index of the range within the header,
/// used to break quality ties in favor of the first-listed type.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRange {
    pub media_type: String,
    pub quality: f64,
    pub position: usize,
}

/// Parse an `Accept` header value into ordered media ranges
///
/// # Arguments
/// - `header`: Raw header value, or `None` if the request carried no
///   `Accept` header
///
/// # Returns
/// - Media ranges in header order. Empty if the header is absent, empty,
///   or contains no parseable segment.
#[must_use]
pub fn parse_accept(header: Option<&str>) -> Vec<MediaRange> {
    let Some(header) = header else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    for (position, part) in header.split(',').enumerate() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        // Split media type and parameters
        let mut segments = part.split(';');
        let media_type = segments.next().unwrap_or("").trim();

        // A media type must be type/subtype; skip anything else
        if media_type.is_empty() || !media_type.contains('/') {
            continue;
        }

        // Parse q-value (default to 1.0)
        let mut quality = 1.0;
        for param in segments {
            let param = param.trim();
            if let Some(stripped) = param.strip_prefix("q=") {
                if let Ok(q) = stripped.trim().parse::<f64>() {
                    quality = q.clamp(0.0, 1.0);
                }
            }
        }

        ranges.push(MediaRange {
            media_type: media_type.to_string(),
            quality,
            position,
        });
    }

    ranges
}

/// Get the quality (q-value) a set of ranges assigns to a media type
///
/// # Arguments
/// - `ranges`: Parsed media ranges
/// - `media_type`: Exact media type to look up (e.g., "application/json")
///
/// # Returns
/// - The q-value of the first exact match, or 0.0 if the type does not
///   appear. Wildcard ranges are not consulted: only an exact match
///   counts toward negotiation.
#[must_use]
pub fn quality_for(ranges: &[MediaRange], media_type: &str) -> f64 {
    ranges
        .iter()
        .find(|r| r.media_type.eq_ignore_ascii_case(media_type))
        .map_or(0.0, |r| r.quality)
}
