//! The mutator contract that parameters are applied through.
//!
//! A component exposes named mutators, each accepting one or more
//! [`ValueKind`]s. Parameter `foo` is routed to mutator `setFoo`; see
//! [`setter_name`]. Most components derive the implementation with
//! `#[derive(Configurable)]`, which maps each field to a mutator.

use thiserror::Error;

use crate::BoxError;
use crate::value::{ParamValue, ValueKind};

/// Prefix prepended to a capitalised parameter name to form its mutator.
pub const SETTER_PREFIX: &str = "set";

/// Returns the mutator name for `parameter`.
///
/// # Examples
///
/// ```
/// use paramwire::setter_name;
/// assert_eq!(setter_name("spoolToTemp"), "setSpoolToTemp");
/// assert_eq!(setter_name("Region"), "setRegion");
/// ```
#[must_use]
pub fn setter_name(parameter: &str) -> String {
    let mut chars = parameter.chars();
    chars.next().map_or_else(
        || SETTER_PREFIX.to_owned(),
        |first| format!("{SETTER_PREFIX}{}{}", first.to_uppercase(), chars.as_str()),
    )
}

/// Failure reported by [`Configurable::set`].
#[derive(Debug, Error)]
pub enum MutatorError {
    /// The mutator does not exist or does not take this kind of value.
    #[error("no mutator '{mutator}' accepts {kind}")]
    Unsupported {
        /// Mutator that was invoked.
        mutator: String,
        /// Kind of the offered value.
        kind: ValueKind,
    },
    /// The mutator exists but refused the value.
    #[error(transparent)]
    Rejected(BoxError),
}

impl MutatorError {
    /// Construct [`MutatorError::Unsupported`] for `value` offered to
    /// `mutator`.
    #[must_use]
    pub fn unsupported(mutator: &str, value: &ParamValue) -> Self {
        Self::Unsupported {
            mutator: mutator.to_owned(),
            kind: value.kind(),
        }
    }

    /// Construct [`MutatorError::Rejected`] from any error or message.
    #[must_use]
    pub fn rejected(reason: impl Into<BoxError>) -> Self {
        Self::Rejected(reason.into())
    }
}

/// A target whose state is set through named mutators.
pub trait Configurable {
    /// Returns `true` when `mutator` exists and takes values of `kind`.
    fn accepts(&self, mutator: &str, kind: ValueKind) -> bool;

    /// Invokes `mutator` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`MutatorError::Unsupported`] when the mutator does not take
    /// this kind of value, or [`MutatorError::Rejected`] when it refuses it.
    fn set(&mut self, mutator: &str, value: ParamValue) -> Result<(), MutatorError>;

    /// Name used for this component in diagnostics.
    fn component_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
