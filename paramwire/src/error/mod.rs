//! Error types produced while loading documents and building components.

mod constructors;
mod types;

pub use types::{LifecycleStage, WireError};

/// Boxed error supplied by collaborators (factories, mutators, lifecycle
/// hooks).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used throughout the crate.
pub type WireResult<T> = Result<T, WireError>;

#[cfg(test)]
mod tests;
