//! Single-item and composite builders.
//!
//! Each section is built on its own: its class is resolved first, then its
//! parameters are classified and applied, then the lifecycle runs. A
//! composite's children are built this way one at a time in document order,
//! so the first failing child ends the build. Nothing is handed back until
//! the whole graph is built.

mod spec;

use std::io::Read;

use camino::Utf8Path;

pub use spec::{ComponentSpec, CompositeSpec};

use spec::type_identifier;

use crate::apply::{DeclaredParam, apply_all, declared_params};
use crate::document::{ConfigDocument, Element};
use crate::lifecycle::run_lifecycle;
use crate::registry::{ComponentRegistry, Resolved};
use crate::settings::SettingsRecord;
use crate::WireResult;

/// Builds configured components from documents using a registry.
///
/// The builder holds no state between calls; each build owns its own
/// settings record and returns an independent component graph.
#[derive(Clone, Copy, Debug)]
pub struct ComponentBuilder<'r> {
    registry: &'r ComponentRegistry,
}

impl<'r> ComponentBuilder<'r> {
    /// Creates a builder resolving classes through `registry`.
    #[must_use]
    pub const fn new(registry: &'r ComponentRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry used for resolution.
    #[must_use]
    pub const fn registry(&self) -> &'r ComponentRegistry {
        self.registry
    }

    /// Builds the only section named `tag` as capability `C`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WireError::NotFound`] or
    /// [`crate::WireError::DuplicateDefinition`] when there is not exactly
    /// one such section, and otherwise the first failure from reading,
    /// resolution, parameter application, or the lifecycle.
    pub fn build_single<C: ?Sized + 'static>(
        &self,
        tag: &str,
        document: &ConfigDocument,
    ) -> WireResult<Box<C>> {
        self.build_section(document.unique_section(tag)?)
    }

    /// Builds one component from an already-read record.
    ///
    /// # Errors
    ///
    /// Propagates resolution, parameter application, and lifecycle
    /// failures.
    pub fn build_spec<C: ?Sized + 'static>(&self, spec: ComponentSpec) -> WireResult<Box<C>> {
        let ComponentSpec { tag, class, params } = spec;
        let resolved = self.registry.resolve::<C>(&tag, &class)?;
        configure(resolved, params)
    }

    /// Builds the composite section named `composite_tag` as capability
    /// `C`, wrapping each of its `child_tag` sections built as `Child`.
    ///
    /// Children are built in document order. The composite's own
    /// parameters are applied after construction, skipping `child_tag`.
    ///
    /// # Errors
    ///
    /// Returns the cardinality errors of [`ComponentBuilder::build_single`]
    /// for the composite section, any failure building a child, and
    /// [`crate::WireError::IncompatibleCompositeConstructor`] when the
    /// composite class cannot be assembled from `Child` items.
    pub fn build_composite<C, Child>(
        &self,
        child_tag: &str,
        composite_tag: &str,
        document: &ConfigDocument,
    ) -> WireResult<Box<C>>
    where
        C: ?Sized + 'static,
        Child: ?Sized + 'static,
    {
        let section = document.unique_section(composite_tag)?;
        let items = section
            .children_named(child_tag)
            .map(|child| self.build_section::<Child>(child))
            .collect::<WireResult<Vec<_>>>()?;
        let resolved = self.registry.resolve_composite::<C, Child>(
            section.name(),
            type_identifier(section)?,
            items,
        )?;
        configure(resolved, declared_params(section, Some(child_tag))?)
    }

    fn build_section<C: ?Sized + 'static>(&self, section: &Element) -> WireResult<Box<C>> {
        let resolved = self
            .registry
            .resolve::<C>(section.name(), type_identifier(section)?)?;
        configure(resolved, declared_params(section, None)?)
    }

    /// Parses `source` and builds the section named `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WireError::DocumentFormat`] for a malformed source,
    /// then as [`ComponentBuilder::build_single`].
    pub fn build_single_from_str<C: ?Sized + 'static>(
        &self,
        tag: &str,
        source: &str,
    ) -> WireResult<Box<C>> {
        self.build_single(tag, &ConfigDocument::parse(source)?)
    }

    /// Reads a document from `reader` and builds the section named `tag`.
    ///
    /// # Errors
    ///
    /// As [`ComponentBuilder::build_single_from_str`].
    pub fn build_single_from_reader<C: ?Sized + 'static>(
        &self,
        tag: &str,
        reader: impl Read,
    ) -> WireResult<Box<C>> {
        self.build_single(tag, &ConfigDocument::from_reader(reader)?)
    }

    /// Loads the document at `path` and builds the section named `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WireError::Io`] when the file cannot be read, then
    /// as [`ComponentBuilder::build_single_from_str`].
    pub fn build_single_from_path<C: ?Sized + 'static>(
        &self,
        tag: &str,
        path: &Utf8Path,
    ) -> WireResult<Box<C>> {
        self.build_single(tag, &ConfigDocument::load(path)?)
    }

    /// Parses `source` and builds a composite from it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WireError::DocumentFormat`] for a malformed source,
    /// then as [`ComponentBuilder::build_composite`].
    pub fn build_composite_from_str<C, Child>(
        &self,
        child_tag: &str,
        composite_tag: &str,
        source: &str,
    ) -> WireResult<Box<C>>
    where
        C: ?Sized + 'static,
        Child: ?Sized + 'static,
    {
        self.build_composite::<C, Child>(child_tag, composite_tag, &ConfigDocument::parse(source)?)
    }

    /// Reads a document from `reader` and builds a composite from it.
    ///
    /// # Errors
    ///
    /// As [`ComponentBuilder::build_composite_from_str`].
    pub fn build_composite_from_reader<C, Child>(
        &self,
        child_tag: &str,
        composite_tag: &str,
        reader: impl Read,
    ) -> WireResult<Box<C>>
    where
        C: ?Sized + 'static,
        Child: ?Sized + 'static,
    {
        self.build_composite::<C, Child>(
            child_tag,
            composite_tag,
            &ConfigDocument::from_reader(reader)?,
        )
    }

    /// Loads the document at `path` and builds a composite from it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WireError::Io`] when the file cannot be read, then
    /// as [`ComponentBuilder::build_composite`].
    pub fn build_composite_from_path<C, Child>(
        &self,
        child_tag: &str,
        composite_tag: &str,
        path: &Utf8Path,
    ) -> WireResult<Box<C>>
    where
        C: ?Sized + 'static,
        Child: ?Sized + 'static,
    {
        self.build_composite::<C, Child>(child_tag, composite_tag, &ConfigDocument::load(path)?)
    }
}

fn configure<C: ?Sized + 'static>(
    mut resolved: Resolved<'_, C>,
    params: Vec<DeclaredParam>,
) -> WireResult<Box<C>> {
    let mut settings = SettingsRecord::new();
    apply_all(resolved.component_mut(), params, &mut settings)?;
    run_lifecycle(resolved.component_mut())?;
    tracing::debug!(?resolved, applied = settings.len(), "configured component");
    resolved.into_capability()
}
