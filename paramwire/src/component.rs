//! The capability every buildable type provides.

use std::any::Any;

use crate::configurable::Configurable;
use crate::lifecycle::Initializable;

/// A type the registry can instantiate and the builders can configure.
///
/// Components that need post-configuration checks return themselves from
/// [`Component::as_initializable`]:
///
/// ```
/// use paramwire::{BoxError, Component, Configurable, Initializable, ProblemHandler, TextMap};
///
/// #[derive(Default, Configurable)]
/// struct Spool {
///     directory: String,
/// }
///
/// impl Initializable for Spool {
///     fn initialize(&mut self, _params: &TextMap) -> Result<(), BoxError> {
///         Ok(())
///     }
///
///     fn check_initialization(&self, handler: ProblemHandler) -> Result<(), BoxError> {
///         if self.directory.is_empty() {
///             handler.handle(self.component_name(), "directory must be set")?;
///         }
///         Ok(())
///     }
/// }
///
/// impl Component for Spool {
///     fn as_initializable(&mut self) -> Option<&mut dyn Initializable> {
///         Some(self)
///     }
/// }
/// ```
pub trait Component: Configurable + Any {
    /// Returns the lifecycle hooks, when the component has any.
    fn as_initializable(&mut self) -> Option<&mut dyn Initializable> {
        None
    }
}
