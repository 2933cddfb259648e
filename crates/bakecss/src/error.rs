//! Error types for style compilation.
//!
//! Every error is compile-time and synchronous. Errors carry the offending
//! property (and, once lifted by [`NamespaceError`], the namespace) so a caller
//! that knows where the definition was authored can attach a source location.

use thiserror::Error;

/// Errors raised while compiling a single declaration.
///
/// # Examples
///
/// ```rust
/// use bakecss::normalize::normalize_value;
/// use bakecss::{CompilationError, CompileOptions};
///
/// let result = normalize_value("width", "calc(100% - 10px", &CompileOptions::default());
/// assert!(matches!(result, Err(CompilationError::MalformedValue { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompilationError {
    /// The value text could not be parsed, e.g. a function call was never closed.
    #[error("malformed value `{value}` for `{property}`: {reason}")]
    MalformedValue {
        property: String,
        value: String,
        reason: String,
    },

    /// A fallback list was given to a shorthand property.
    ///
    /// Shorthands are split into longhands before fallbacks could apply, so a
    /// list has no well-defined expansion.
    #[error("fallback arrays are not allowed for shorthand property `{property}`")]
    ArrayNotAllowedForShorthand { property: String },

    /// The value expression is not a literal, a list of literals, or a conditional map.
    #[error("unsupported value type for `{property}`: {found}")]
    UnsupportedValueType { property: String, found: String },
}

impl CompilationError {
    /// The property the error was raised for.
    pub fn property(&self) -> &str {
        match self {
            Self::MalformedValue { property, .. }
            | Self::ArrayNotAllowedForShorthand { property }
            | Self::UnsupportedValueType { property, .. } => property,
        }
    }

    pub(crate) fn malformed(property: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::MalformedValue {
            property: property.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(property: &str, found: impl Into<String>) -> Self {
        Self::UnsupportedValueType {
            property: property.to_string(),
            found: found.into(),
        }
    }
}

/// A [`CompilationError`] tagged with the namespace it was raised in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("in namespace `{namespace}`: {error}")]
pub struct NamespaceError {
    pub namespace: String,
    #[source]
    pub error: CompilationError,
}

impl NamespaceError {
    pub fn new(namespace: impl Into<String>, error: CompilationError) -> Self {
        Self {
            namespace: namespace.into(),
            error,
        }
    }

    /// The property the underlying error was raised for.
    pub fn property(&self) -> &str {
        self.error.property()
    }
}
