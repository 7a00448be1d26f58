//! Record of the parameters explicitly supplied during a configure pass.

use indexmap::IndexSet;
use serde::Serialize;

/// Names of parameters that were successfully applied, in the order they
/// were applied. Recording a name twice keeps its first position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SettingsRecord {
    names: IndexSet<String>,
}

impl SettingsRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name`. Returns `false` if it was already present.
    pub fn record(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Returns `true` when `name` was applied.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of distinct names recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` when nothing was applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the recorded names in application order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Extend<String> for SettingsRecord {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.names.extend(iter);
    }
}

impl<'a> IntoIterator for &'a SettingsRecord {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
