//! Section specifications: which marker lines start which tables.

use serde::{Deserialize, Serialize};

/// How to choose between several prefixes that all match one marker line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixPolicy {
    /// The first declared prefix that matches wins
    #[default]
    FirstMatch,
    /// The longest matching prefix wins (ties go to the first declared)
    LongestMatch,
}

/// A single `prefix -> logical name` mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    /// Literal prefix of the marker line that introduces the section
    pub prefix: String,
    /// Logical name the parsed table is stored under
    pub name: String,
}

/// Ordered mapping from marker-line prefixes to logical section names.
///
/// # Example
///
/// ```
/// use recal_report::parsing::section::SectionSpec;
///
/// let spec = SectionSpec::new()
///     .with_section("#:GATKTable:RecalTable0:", "recal_table_0")
///     .with_section("#:GATKTable:RecalTable1:", "recal_table_1");
///
/// assert_eq!(spec.match_line("#:GATKTable:RecalTable1:"), Some("recal_table_1"));
/// assert_eq!(spec.match_line("#:GATKReport.v1.1:5"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    entries: Vec<SectionEntry>,
    #[serde(default)]
    policy: PrefixPolicy,
}

impl SectionSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section; declaration order matters under [`PrefixPolicy::FirstMatch`]
    #[must_use]
    pub fn with_section(mut self, prefix: impl Into<String>, name: impl Into<String>) -> Self {
        self.entries.push(SectionEntry {
            prefix: prefix.into(),
            name: name.into(),
        });
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: PrefixPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn policy(&self) -> PrefixPolicy {
        self.policy
    }

    pub fn entries(&self) -> impl Iterator<Item = &SectionEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logical section name for a marker line, or `None` if no prefix matches
    #[must_use]
    pub fn match_line(&self, line: &str) -> Option<&str> {
        let mut candidates = self.entries.iter().filter(|e| line.starts_with(&e.prefix));

        let entry = match self.policy {
            PrefixPolicy::FirstMatch => candidates.next(),
            // max_by_key keeps the last maximum, so fold to keep the first
            PrefixPolicy::LongestMatch => {
                candidates.fold(None::<&SectionEntry>, |best, e| match best {
                    Some(b) if b.prefix.len() >= e.prefix.len() => Some(b),
                    _ => Some(e),
                })
            }
        };

        entry.map(|e| e.name.as_str())
    }

    /// Marker prefix declared for a logical section name
    #[must_use]
    pub fn prefix_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.prefix.as_str())
    }
}
