//! Post-configuration initialization and validation.
//!
//! After parameters are applied, a component that exposes [`Initializable`]
//! is initialized with an empty parameter map and then validated under
//! [`ProblemHandler::Throw`]. Either step failing aborts the build.

use crate::component::Component;
use crate::error::LifecycleStage;
use crate::value::TextMap;
use crate::{BoxError, WireError, WireResult};

/// Hooks run once a component's parameters have been applied.
pub trait Initializable {
    /// Completes setup from the configured state.
    ///
    /// # Errors
    ///
    /// Returns any failure that leaves the component unusable.
    fn initialize(&mut self, params: &TextMap) -> Result<(), BoxError>;

    /// Checks that required state is present, reporting each problem
    /// through `handler`.
    ///
    /// # Errors
    ///
    /// Returns the first problem `handler` escalates.
    fn check_initialization(&self, handler: ProblemHandler) -> Result<(), BoxError>;
}

/// Policy for problems found by [`Initializable::check_initialization`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ProblemHandler {
    /// Drop the problem silently.
    Ignore,
    /// Log the problem at info level.
    Info,
    /// Log the problem at warn level.
    Warn,
    /// Fail with the problem.
    #[default]
    Throw,
}

impl ProblemHandler {
    /// Applies the policy to `problem` found on `component`.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramwire::ProblemHandler;
    /// assert!(ProblemHandler::Warn.handle("demo", "bucket unset").is_ok());
    /// assert!(ProblemHandler::Throw.handle("demo", "bucket unset").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `problem` as an error under [`ProblemHandler::Throw`].
    pub fn handle(self, component: &str, problem: impl Into<String>) -> Result<(), BoxError> {
        let message: String = problem.into();
        match self {
            Self::Ignore => Ok(()),
            Self::Info => {
                tracing::info!(component, problem = %message, "initialization problem");
                Ok(())
            }
            Self::Warn => {
                tracing::warn!(component, problem = %message, "initialization problem");
                Ok(())
            }
            Self::Throw => Err(message.into()),
        }
    }
}

/// Fails unless `value` is present and not blank.
///
/// # Errors
///
/// Returns a message naming `name` when the value is missing or blank.
pub fn must_not_be_empty(name: &str, value: Option<&str>) -> Result<(), BoxError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(format!("parameter '{name}' must be set in the config file").into()),
    }
}

/// Runs the lifecycle on `component`, if it has one.
///
/// # Errors
///
/// Returns [`WireError::Lifecycle`] naming the failed stage.
pub fn run_lifecycle(component: &mut dyn Component) -> WireResult<()> {
    let name = component.component_name();
    let Some(target) = component.as_initializable() else {
        return Ok(());
    };
    tracing::debug!(component = name, "initializing component");
    target
        .initialize(&TextMap::new())
        .map_err(|source| WireError::Lifecycle {
            component: name,
            stage: LifecycleStage::Initialize,
            source,
        })?;
    target
        .check_initialization(ProblemHandler::Throw)
        .map_err(|source| WireError::Lifecycle {
            component: name,
            stage: LifecycleStage::CheckInitialization,
            source,
        })
}
