//! Core crate for the `paramwire` component builder.
//!
//! A properties document names, for each section, the class of component to
//! build and the parameters to set on it. This crate resolves each class
//! through a [`ComponentRegistry`], applies the parameters through the
//! component's [`Configurable`] mutators, runs the optional
//! [`Initializable`] lifecycle, and hands the result back as the capability
//! the caller asked for.
//!
//! ```
//! use paramwire::{Component, ComponentBuilder, ComponentRegistry, Configurable};
//!
//! trait Fetcher {
//!     fn describe(&self) -> String;
//! }
//!
//! #[derive(Default, Configurable)]
//! struct FileFetcher {
//!     base_path: String,
//!     retries: i32,
//! }
//!
//! impl Component for FileFetcher {}
//!
//! impl Fetcher for FileFetcher {
//!     fn describe(&self) -> String {
//!         format!("{} x{}", self.base_path, self.retries)
//!     }
//! }
//!
//! let mut registry = ComponentRegistry::new();
//! registry
//!     .register::<FileFetcher>("demo.FileFetcher")
//!     .provides::<dyn Fetcher, _>(|fetcher| fetcher);
//!
//! let fetcher = ComponentBuilder::new(&registry).build_single_from_str::<dyn Fetcher>(
//!     "fetcher",
//!     r#"<properties>
//!          <fetcher class="demo.FileFetcher">
//!            <params><basePath>/srv</basePath><retries>3</retries></params>
//!          </fetcher>
//!        </properties>"#,
//! )?;
//! assert_eq!(fetcher.describe(), "/srv x3");
//! # Ok::<(), paramwire::WireError>(())
//! ```
//!
//! The `Configurable` derive lives in the companion `paramwire_macros`
//! crate.

pub use paramwire_macros::Configurable;

mod apply;
mod build;
mod classify;
mod component;
mod configurable;
mod document;
mod error;
mod lifecycle;
mod registry;
mod self_config;
mod settings;
mod value;

pub use apply::{DeclaredParam, apply_all, apply_param, apply_params, declared_params};
pub use build::{ComponentBuilder, ComponentSpec, CompositeSpec};
pub use classify::{KEY_ATTRIBUTES, ParamShape, VALUE_ATTRIBUTES, classify};
pub use component::Component;
pub use configurable::{Configurable, MutatorError, SETTER_PREFIX, setter_name};
pub use document::{CLASS_ATTRIBUTE, ConfigDocument, Content, Element, PARAMS_TAG, ROOT_TAG};
pub use error::{BoxError, LifecycleStage, WireError, WireResult};
pub use lifecycle::{Initializable, ProblemHandler, must_not_be_empty, run_lifecycle};
pub use registry::{ComponentRegistry, Registration, RegistrationBuilder, Resolved};
pub use self_config::SelfConfiguring;
pub use settings::SettingsRecord;
pub use value::{ParamValue, TextMap, ValueKind};
