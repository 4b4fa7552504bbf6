#![doc = include_str!("../README.md")]

pub mod app;
pub mod config;
pub mod conneg;

// Re-export validation functions for testing
pub use config::{validate_header_value, validate_media_type};

// Re-export conneg types and functions
pub use conneg::{negotiate, parse_accept, respond, write_json};
pub use conneg::{JsonResult, MediaRange, PropertyNaming, Result, SerializerOptions};

// Re-export commonly used types
pub use config::SiteConfig;
