//! Configuration of an existing value from a document.
//!
//! Types that own their own construction can still take their settings from
//! a properties document. Implement [`SelfConfiguring`] and call
//! [`SelfConfiguring::configure`]; override
//! [`SelfConfiguring::handle_settings`] to react to which parameters the
//! document supplied.

use camino::Utf8Path;

use crate::apply::apply_params;
use crate::component::Component;
use crate::document::ConfigDocument;
use crate::lifecycle::run_lifecycle;
use crate::settings::SettingsRecord;
use crate::WireResult;

/// A component that configures itself in place.
///
/// # Examples
///
/// ```
/// use paramwire::{Component, ConfigDocument, Configurable, SelfConfiguring};
///
/// #[derive(Default, Configurable)]
/// struct Limits {
///     max_depth: i32,
/// }
///
/// impl Component for Limits {}
/// impl SelfConfiguring for Limits {}
///
/// let doc = ConfigDocument::parse(
///     "<properties><limits><params><maxDepth>4</maxDepth></params></limits></properties>",
/// )?;
/// let mut limits = Limits::default();
/// let settings = limits.configure("limits", &doc)?;
/// assert_eq!(limits.max_depth, 4);
/// assert!(settings.contains("maxDepth"));
/// # Ok::<(), paramwire::WireError>(())
/// ```
pub trait SelfConfiguring: Component + Sized {
    /// Applies the parameters of every section named `tag`, in document
    /// order, running the lifecycle after each section. Sections need no
    /// `class` attribute and may repeat.
    ///
    /// Returns the names of all parameters applied, after passing them to
    /// [`SelfConfiguring::handle_settings`].
    ///
    /// # Errors
    ///
    /// Returns the first parameter application or lifecycle failure.
    fn configure(&mut self, tag: &str, document: &ConfigDocument) -> WireResult<SettingsRecord> {
        let mut settings = SettingsRecord::new();
        for section in document.sections(tag) {
            apply_params(self, section, None, &mut settings)?;
            run_lifecycle(self)?;
        }
        tracing::debug!(
            component = self.component_name(),
            tag,
            applied = settings.len(),
            "configured in place"
        );
        self.handle_settings(&settings);
        Ok(settings)
    }

    /// Loads the document at `path` and configures from it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WireError::Io`] or
    /// [`crate::WireError::DocumentFormat`] when the document cannot be
    /// loaded, then as [`SelfConfiguring::configure`].
    fn configure_from_path(&mut self, tag: &str, path: &Utf8Path) -> WireResult<SettingsRecord> {
        self.configure(tag, &ConfigDocument::load(path)?)
    }

    /// Called with the applied parameter names once configuration succeeds.
    fn handle_settings(&mut self, _settings: &SettingsRecord) {}
}
