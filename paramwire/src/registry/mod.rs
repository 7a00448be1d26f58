//! Class resolution through an explicit registry.
//!
//! Each class identifier maps to a [`Registration`] recording how to
//! construct the type and which capabilities it may be handed out as. A
//! capability is any `'static` type, usually a trait object such as
//! `dyn Fetcher`; providing it means supplying an upcast from the concrete
//! type.
//!
//! ```
//! use paramwire::{Component, ComponentRegistry, Configurable};
//!
//! trait Greeter {
//!     fn greet(&self) -> String;
//! }
//!
//! #[derive(Default, Configurable)]
//! struct English {
//!     name: String,
//! }
//!
//! impl Component for English {}
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         format!("hello {}", self.name)
//!     }
//! }
//!
//! let mut registry = ComponentRegistry::new();
//! registry
//!     .register::<English>("demo.English")
//!     .provides::<dyn Greeter, _>(|english| english);
//! assert!(registry.contains("demo.English"));
//! ```

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::component::Component;
use crate::{BoxError, WireError, WireResult};

type Factory = Box<dyn Fn() -> Result<Box<dyn Component>, BoxError> + Send + Sync>;
type Upcast<C> = Box<dyn Fn(Box<dyn Component>) -> Option<Box<C>> + Send + Sync>;
type Assemble<Child> = Box<dyn Fn(Vec<Box<Child>>) -> Box<dyn Component> + Send + Sync>;
type Erased = Box<dyn Any + Send + Sync>;

/// How one class identifier is constructed and what it provides.
pub struct Registration {
    type_name: &'static str,
    factory: Option<Factory>,
    upcasts: HashMap<TypeId, Erased>,
    assemblers: HashMap<TypeId, Erased>,
    capabilities: Vec<&'static str>,
    composite_children: Vec<&'static str>,
}

impl Registration {
    fn new<T: Component>(factory: Option<Factory>) -> Self {
        let mut registration = Self {
            type_name: type_name::<T>(),
            factory,
            upcasts: HashMap::new(),
            assemblers: HashMap::new(),
            capabilities: Vec::new(),
            composite_children: Vec::new(),
        };
        registration.insert_upcast::<T, T, _>(|component| component);
        registration.insert_upcast::<T, dyn Component, _>(|component| component);
        registration
    }

    fn insert_upcast<T, C, F>(&mut self, upcast: F)
    where
        T: Component,
        C: ?Sized + 'static,
        F: Fn(Box<T>) -> Box<C> + Send + Sync + 'static,
    {
        let erased: Upcast<C> = Box::new(move |component: Box<dyn Component>| {
            let any: Box<dyn Any> = component;
            any.downcast::<T>().ok().map(&upcast)
        });
        if self
            .upcasts
            .insert(TypeId::of::<C>(), Box::new(erased))
            .is_none()
        {
            self.capabilities.push(type_name::<C>());
        }
    }

    /// Type name of the registered component.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` when the class can be built as a single item.
    #[must_use]
    pub const fn is_constructible(&self) -> bool {
        self.factory.is_some()
    }

    /// Names of the capabilities the class provides, in registration order.
    #[must_use]
    pub fn capabilities(&self) -> &[&'static str] {
        &self.capabilities
    }

    /// Names of the child capabilities the class can be assembled from.
    #[must_use]
    pub fn composite_children(&self) -> &[&'static str] {
        &self.composite_children
    }

    fn upcast<C: ?Sized + 'static>(&self) -> Option<&Upcast<C>> {
        self.upcasts.get(&TypeId::of::<C>())?.downcast_ref()
    }

    fn assembler<Child: ?Sized + 'static>(&self) -> Option<&Assemble<Child>> {
        self.assemblers.get(&TypeId::of::<Child>())?.downcast_ref()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("type_name", &self.type_name)
            .field("constructible", &self.is_constructible())
            .field("capabilities", &self.capabilities)
            .field("composite_children", &self.composite_children)
            .finish()
    }
}

/// Adds capabilities and composite constructors to a fresh registration.
pub struct RegistrationBuilder<'a, T> {
    registration: &'a mut Registration,
    marker: PhantomData<fn() -> T>,
}

impl<T: Component> RegistrationBuilder<'_, T> {
    /// Declares that `T` can be handed out as capability `C`.
    ///
    /// Every registration already provides `T` itself and `dyn Component`.
    pub fn provides<C, F>(self, upcast: F) -> Self
    where
        C: ?Sized + 'static,
        F: Fn(Box<T>) -> Box<C> + Send + Sync + 'static,
    {
        self.registration.insert_upcast::<T, C, F>(upcast);
        self
    }

    /// Declares that `T` can be constructed from an ordered list of
    /// children of capability `Child`.
    pub fn composite_of<Child, F>(self, assemble: F) -> Self
    where
        Child: ?Sized + 'static,
        F: Fn(Vec<Box<Child>>) -> T + Send + Sync + 'static,
    {
        let erased: Assemble<Child> =
            Box::new(move |children| -> Box<dyn Component> { Box::new(assemble(children)) });
        if self
            .registration
            .assemblers
            .insert(TypeId::of::<Child>(), Box::new(erased))
            .is_none()
        {
            self.registration.composite_children.push(type_name::<Child>());
        }
        self
    }
}

impl<T> fmt::Debug for RegistrationBuilder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegistrationBuilder")
            .field(&self.registration)
            .finish()
    }
}

/// A freshly instantiated, not yet configured component.
///
/// Configure it through [`Resolved::component_mut`], then hand it out with
/// [`Resolved::into_capability`].
pub struct Resolved<'r, C: ?Sized> {
    tag: String,
    class: String,
    component: Box<dyn Component>,
    upcast: &'r Upcast<C>,
}

impl<C: ?Sized + 'static> Resolved<'_, C> {
    /// The component, for parameter application and lifecycle hooks.
    pub fn component_mut(&mut self) -> &mut dyn Component {
        self.component.as_mut()
    }

    /// Converts the component into capability `C`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Instantiation`] if the component is not the
    /// registered type. Factories and assemblers are typed to return the
    /// registered type, so this only guards the type-erased upcast table.
    pub fn into_capability(self) -> WireResult<Box<C>> {
        let Self {
            tag,
            class,
            component,
            upcast,
        } = self;
        // Unreachable through `register`, `register_with` or `composite_of`:
        // each boxes a value of the type the upcast downcasts to.
        upcast(component).ok_or_else(|| WireError::Instantiation {
            tag,
            class,
            reason: "factory produced a value of an unexpected type".to_owned(),
            source: None,
        })
    }
}

impl<C: ?Sized> fmt::Debug for Resolved<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("tag", &self.tag)
            .field("class", &self.class)
            .field("component", &self.component.component_name())
            .finish_non_exhaustive()
    }
}

/// Catalogue of buildable classes, keyed by identifier.
///
/// Lookups take `&self`, so one registry can serve concurrent builds.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    entries: IndexMap<String, Registration>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under `class`, constructed with [`Default`].
    pub fn register<T: Component + Default>(
        &mut self,
        class: impl Into<String>,
    ) -> RegistrationBuilder<'_, T> {
        self.insert::<T>(
            class.into(),
            Some(Box::new(|| Ok(Box::new(T::default()) as Box<dyn Component>))),
        )
    }

    /// Registers `T` under `class`, constructed by a fallible `factory`.
    pub fn register_with<T, F>(
        &mut self,
        class: impl Into<String>,
        factory: F,
    ) -> RegistrationBuilder<'_, T>
    where
        T: Component,
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.insert::<T>(
            class.into(),
            Some(Box::new(move || {
                factory().map(|component| Box::new(component) as Box<dyn Component>)
            })),
        )
    }

    /// Registers `T` under `class` without a default construction path.
    ///
    /// Such classes can only be built as composites; see
    /// [`RegistrationBuilder::composite_of`].
    pub fn declare<T: Component>(&mut self, class: impl Into<String>) -> RegistrationBuilder<'_, T> {
        self.insert::<T>(class.into(), None)
    }

    fn insert<T: Component>(
        &mut self,
        class: String,
        factory: Option<Factory>,
    ) -> RegistrationBuilder<'_, T> {
        let registration = Registration::new::<T>(factory);
        let slot = match self.entries.entry(class) {
            Entry::Occupied(mut occupied) => {
                tracing::debug!(class = %occupied.key(), "replacing registration");
                occupied.insert(registration);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(registration),
        };
        RegistrationBuilder {
            registration: slot,
            marker: PhantomData,
        }
    }

    /// Returns `true` when `class` is registered.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.entries.contains_key(class)
    }

    /// Returns the registration for `class`.
    #[must_use]
    pub fn get(&self, class: &str) -> Option<&Registration> {
        self.entries.get(class)
    }

    /// Registered class identifiers, in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn lookup<C: ?Sized + 'static>(
        &self,
        tag: &str,
        class: &str,
    ) -> WireResult<(&Registration, &Upcast<C>)> {
        let registration = self.entries.get(class).ok_or_else(|| WireError::Resolution {
            tag: tag.to_owned(),
            class: class.to_owned(),
        })?;
        let upcast = registration
            .upcast::<C>()
            .ok_or_else(|| WireError::TypeConstraint {
                tag: tag.to_owned(),
                class: class.to_owned(),
                capability: type_name::<C>(),
            })?;
        Ok((registration, upcast))
    }

    /// Resolves `class` and instantiates it for capability `C`.
    ///
    /// The factory only runs once the class is known to provide `C`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Resolution`] for an unknown class,
    /// [`WireError::TypeConstraint`] when it does not provide `C`, and
    /// [`WireError::Instantiation`] when it has no default construction path
    /// or its factory fails.
    pub fn resolve<C: ?Sized + 'static>(&self, tag: &str, class: &str) -> WireResult<Resolved<'_, C>> {
        let (registration, upcast) = self.lookup::<C>(tag, class)?;
        let instantiation = |reason: &str, source| WireError::Instantiation {
            tag: tag.to_owned(),
            class: class.to_owned(),
            reason: reason.to_owned(),
            source,
        };
        let factory = registration
            .factory
            .as_ref()
            .ok_or_else(|| instantiation("no default construction path", None))?;
        let component = factory().map_err(|err| instantiation("factory failed", Some(err)))?;
        tracing::debug!(tag, class, component = registration.type_name, "instantiated component");
        Ok(Resolved {
            tag: tag.to_owned(),
            class: class.to_owned(),
            component,
            upcast,
        })
    }

    /// Resolves composite `class` for capability `C` and constructs it from
    /// `children`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Resolution`] and [`WireError::TypeConstraint`]
    /// as [`ComponentRegistry::resolve`] does, and
    /// [`WireError::IncompatibleCompositeConstructor`] when the class cannot
    /// be assembled from a list of `Child`.
    pub fn resolve_composite<C, Child>(
        &self,
        tag: &str,
        class: &str,
        children: Vec<Box<Child>>,
    ) -> WireResult<Resolved<'_, C>>
    where
        C: ?Sized + 'static,
        Child: ?Sized + 'static,
    {
        let (registration, upcast) = self.lookup::<C>(tag, class)?;
        let assemble = registration.assembler::<Child>().ok_or_else(|| {
            WireError::IncompatibleCompositeConstructor {
                tag: tag.to_owned(),
                class: class.to_owned(),
                child_capability: type_name::<Child>(),
            }
        })?;
        tracing::debug!(
            tag,
            class,
            component = registration.type_name,
            children = children.len(),
            "assembled composite"
        );
        Ok(Resolved {
            tag: tag.to_owned(),
            class: class.to_owned(),
            component: assemble(children),
            upcast,
        })
    }
}

#[cfg(test)]
mod tests;
