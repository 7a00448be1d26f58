//! Primary error enum for document loading and component construction.

use std::fmt;

use camino::Utf8PathBuf;
use thiserror::Error;

use super::BoxError;
use crate::value::ValueKind;

/// Phase of the lifecycle that failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LifecycleStage {
    /// [`crate::Initializable::initialize`].
    Initialize,
    /// [`crate::Initializable::check_initialization`].
    CheckInitialization,
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Initialize => "initialization",
            Self::CheckInitialization => "validation",
        })
    }
}

/// Errors that abort a build.
///
/// Every variant names the tag, class, or parameter that caused it. A build
/// never returns a partial result alongside one of these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WireError {
    /// The source could not be read as a properties document.
    #[error("malformed configuration document: {message}")]
    DocumentFormat {
        /// Description of the structural problem.
        message: String,
        /// Underlying parser failure, when there is one.
        #[source]
        source: Option<BoxError>,
    },

    /// Reading a document from disk failed.
    #[error("failed to read configuration document '{path}': {source}")]
    Io {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// No section with the expected tag exists.
    #[error("could not find '{tag}'")]
    NotFound {
        /// Tag that was looked up.
        tag: String,
    },

    /// More than one section with the expected tag exists.
    #[error("there can only be one '{tag}' in a configuration")]
    DuplicateDefinition {
        /// Tag that appeared more than once.
        tag: String,
    },

    /// A buildable section has no `class` attribute, or it is empty.
    #[error("element '{tag}' must have a non-empty 'class' attribute")]
    MissingTypeIdentifier {
        /// Tag of the section lacking a class.
        tag: String,
    },

    /// The class identifier is not registered.
    #[error("problem loading '{tag}': unknown class '{class}'")]
    Resolution {
        /// Tag of the section being built.
        tag: String,
        /// Unregistered class identifier.
        class: String,
    },

    /// The class is registered but does not provide the required capability.
    #[error("'{tag}' with class name '{class}' must be of type '{capability}'")]
    TypeConstraint {
        /// Tag of the section being built.
        tag: String,
        /// Offending class identifier.
        class: String,
        /// Capability the caller required.
        capability: &'static str,
    },

    /// The class has no default construction path, or its factory failed.
    #[error("problem instantiating '{class}' for '{tag}': {reason}")]
    Instantiation {
        /// Tag of the section being built.
        tag: String,
        /// Class identifier that failed to instantiate.
        class: String,
        /// Short description of the failure.
        reason: String,
        /// Factory failure, when the factory ran.
        #[source]
        source: Option<BoxError>,
    },

    /// A map entry lacks its key or value attribute.
    #[error("must specify a '{missing}' value in map entry <{entry}> of '{parameter}'")]
    MalformedMapEntry {
        /// Parameter whose entries are being read.
        parameter: String,
        /// Tag of the offending entry.
        entry: String,
        /// Attribute spellings that were absent, e.g. `key' or 'from`.
        missing: &'static str,
    },

    /// The component exposes no mutator for the parameter and value shape.
    #[error("couldn't find setter '{mutator}' accepting {shape} on {component}")]
    NoMatchingMutator {
        /// Parameter name from the document.
        parameter: String,
        /// Mutator name derived from the parameter.
        mutator: String,
        /// Description of the value shape that was offered.
        shape: &'static str,
        /// Type name of the target component.
        component: &'static str,
    },

    /// A scalar could not be parsed as the kind its mutator accepts.
    #[error("bad parameter '{parameter}': '{value}' is not a valid {expected}")]
    Coercion {
        /// Parameter name from the document.
        parameter: String,
        /// Raw text that failed to parse.
        value: String,
        /// Kind the selected mutator accepts.
        expected: ValueKind,
        /// Parse failure.
        #[source]
        source: BoxError,
    },

    /// A mutator refused a well-typed value.
    #[error("can't set '{parameter}' via '{mutator}': {source}")]
    MutatorRejected {
        /// Parameter name from the document.
        parameter: String,
        /// Mutator that refused the value.
        mutator: String,
        /// Reason supplied by the component.
        #[source]
        source: BoxError,
    },

    /// The composite class cannot be constructed from a list of children of
    /// the requested capability.
    #[error("can't build composite class '{class}' for '{tag}' from a list of '{child_capability}'")]
    IncompatibleCompositeConstructor {
        /// Tag of the composite section.
        tag: String,
        /// Composite class identifier.
        class: String,
        /// Capability of the child items.
        child_capability: &'static str,
    },

    /// Initialization or validation of a configured component failed.
    #[error("{stage} of {component} failed: {source}")]
    Lifecycle {
        /// Type name of the component.
        component: &'static str,
        /// Which lifecycle step failed.
        stage: LifecycleStage,
        /// Failure reported by the component.
        #[source]
        source: BoxError,
    },
}
