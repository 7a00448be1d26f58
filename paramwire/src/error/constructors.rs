//! Convenience constructors for `WireError`.

use camino::Utf8Path;

use super::{BoxError, WireError};

impl WireError {
    /// Construct a [`WireError::DocumentFormat`] with no underlying cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramwire::WireError;
    /// let err = WireError::document_format("expect properties as root node");
    /// assert!(matches!(err, WireError::DocumentFormat { source: None, .. }));
    /// ```
    #[must_use]
    pub fn document_format(message: impl Into<String>) -> Self {
        Self::DocumentFormat {
            message: message.into(),
            source: None,
        }
    }

    /// Construct a [`WireError::DocumentFormat`] wrapping a parser failure.
    #[must_use]
    pub fn unparseable(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::DocumentFormat {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Construct a [`WireError::Io`] for `path`.
    #[must_use]
    pub fn io(path: &Utf8Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Construct a [`WireError::NotFound`] for `tag`.
    #[must_use]
    pub fn not_found(tag: impl Into<String>) -> Self {
        Self::NotFound { tag: tag.into() }
    }

    /// Construct a [`WireError::DuplicateDefinition`] for `tag`.
    #[must_use]
    pub fn duplicate(tag: impl Into<String>) -> Self {
        Self::DuplicateDefinition { tag: tag.into() }
    }

    /// Returns the tag, class, or parameter name the error refers to, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramwire::WireError;
    /// assert_eq!(WireError::not_found("fetcher").subject(), Some("fetcher"));
    /// ```
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::NotFound { tag }
            | Self::DuplicateDefinition { tag }
            | Self::MissingTypeIdentifier { tag } => Some(tag.as_str()),
            Self::Resolution { class, .. }
            | Self::TypeConstraint { class, .. }
            | Self::Instantiation { class, .. }
            | Self::IncompatibleCompositeConstructor { class, .. } => Some(class.as_str()),
            Self::MalformedMapEntry { parameter, .. }
            | Self::NoMatchingMutator { parameter, .. }
            | Self::Coercion { parameter, .. }
            | Self::MutatorRejected { parameter, .. } => Some(parameter.as_str()),
            Self::Lifecycle { component, .. } => Some(*component),
            Self::Io { path, .. } => Some(path.as_str()),
            Self::DocumentFormat { .. } => None,
        }
    }
}
