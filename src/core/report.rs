use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::table::Table;

/// All recognised sections of one report, keyed by logical section name.
///
/// Only sections actually present in the input have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParsedReport {
    sections: BTreeMap<String, Table>,
}

impl ParsedReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a section, returning the table it replaced (if any)
    pub fn insert(&mut self, name: impl Into<String>, table: Table) -> Option<Table> {
        self.sections.insert(name.into(), table)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.sections.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Logical names of the sections present, sorted
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.sections.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// Number of sections
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
