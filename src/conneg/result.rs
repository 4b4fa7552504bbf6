//! Result configuration types
//!
//! A [`JsonResult`] describes how one endpoint's output is rendered: the
//! value to serialize, an optional declared content type that bypasses
//! negotiation, and optional serializer options. Instances are immutable
//! once constructed, so sharing one across concurrent requests is safe
//! by construction.

use serde::Serialize;
use serde_json::Value;

/// Property naming convention applied when serializing objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyNaming {
    /// Emit property names exactly as declared on the value
    #[default]
    Preserve,
    /// Emit property names lower-cased (applied to nested objects too)
    Lowercase,
}

/// Serializer options for a single result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerializerOptions {
    pub naming: PropertyNaming,
}

impl SerializerOptions {
    /// Options that lower-case all property names
    #[must_use]
    pub fn lowercase() -> Self {
        Self {
            naming: PropertyNaming::Lowercase,
        }
    }
}

/// Per-endpoint result configuration
///
/// # Fields
/// - `value`: the object to serialize; may be JSON null, a string, or a
///   structured value
/// - `content_type`: declared content type; when set it is used verbatim
///   and the `Accept` header is ignored
/// - `options`: custom serializer options; `None` means the default
///   convention (property names preserved)
#[derive(Debug, Clone)]
pub struct JsonResult {
    value: Value,
    content_type: Option<String>,
    options: Option<SerializerOptions>,
}

impl JsonResult {
    /// Create a result for a value using default rendering
    ///
    /// # Panics
    /// Panics if the value fails to convert to a JSON tree. That only
    /// happens for values whose `Serialize` impl itself errors (e.g., a
    /// map with a non-string key), which is a programming error in the
    /// endpoint, not a request-time condition.
    #[must_use]
    pub fn new<T: Serialize>(value: T) -> Self {
        Self {
            value: serde_json::to_value(value)
                .expect("endpoint value must convert to a JSON tree"),
            content_type: None,
            options: None,
        }
    }

    /// Create a result holding JSON null
    #[must_use]
    pub fn null() -> Self {
        Self {
            value: Value::Null,
            content_type: None,
            options: None,
        }
    }

    /// Declare an explicit content type, bypassing negotiation
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Attach custom serializer options
    #[must_use]
    pub fn with_options(mut self, options: SerializerOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// The value to serialize
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Declared content type, if any
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Custom serializer options, if any
    #[must_use]
    pub fn options(&self) -> Option<&SerializerOptions> {
        self.options.as_ref()
    }
}
