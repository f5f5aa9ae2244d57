//! Non-fatal data quality events.
//!
//! The parser, the sample set, and the series extractor never log directly.
//! They hand every [`Diagnostic`] to a caller-supplied [`DiagnosticSink`], so
//! the library stays free of global logging state. Use [`TracingSink`] to route
//! diagnostics to `tracing`, or a `Vec<Diagnostic>` to collect them.

use serde::Serialize;
use tracing::{debug, warn};

/// A recoverable problem found while reading or transforming report data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A data row's token count differs from the header; the row was skipped
    RowShapeMismatch {
        section: String,
        /// 1-based line number in the input
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A header row repeated a column name; only the first column was kept
    DuplicateColumn {
        section: String,
        line: usize,
        column: String,
    },

    /// A section appeared twice in one report; the later one was kept
    DuplicateSection { section: String, line: usize },

    /// A sample was inserted twice; the later report was kept
    DuplicateSample { sample: String },

    /// A cell could not be read as an integer; the (x, y) pair was skipped
    CoercionFailure {
        sample: String,
        section: String,
        x: String,
        y: String,
    },

    /// No recognised sections were found; the report was not added
    EmptyReport { sample: String },
}

/// Severity used when routing diagnostics to a logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Warning,
}

impl Diagnostic {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::DuplicateSection { .. } | Self::EmptyReport { .. } => Severity::Debug,
            Self::RowShapeMismatch { .. }
            | Self::DuplicateColumn { .. }
            | Self::DuplicateSample { .. }
            | Self::CoercionFailure { .. } => Severity::Warning,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RowShapeMismatch {
                section,
                line,
                expected,
                found,
            } => write!(
                f,
                "Skipping line {line} in section '{section}': {found} fields, expected {expected}"
            ),
            Self::DuplicateColumn {
                section,
                line,
                column,
            } => write!(
                f,
                "Column '{column}' repeated in header of section '{section}' on line {line}, keeping the first"
            ),
            Self::DuplicateSection { section, line } => {
                write!(f, "Section '{section}' repeated on line {line}, overwriting")
            }
            Self::DuplicateSample { sample } => {
                write!(f, "Duplicate sample name found! Overwriting: {sample}")
            }
            Self::CoercionFailure {
                sample,
                section,
                x,
                y,
            } => write!(
                f,
                "Skipping non-integer point ({x}, {y}) in '{section}' for sample '{sample}'"
            ),
            Self::EmptyReport { sample } => {
                write!(f, "No recognised tables found for sample '{sample}'")
            }
        }
    }
}

/// Receiver for diagnostics
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Logs each diagnostic through `tracing` and counts them
#[derive(Debug, Default)]
pub struct TracingSink {
    warnings: usize,
}

impl TracingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of warning-level diagnostics seen so far
    #[must_use]
    pub fn warnings(&self) -> usize {
        self.warnings
    }
}

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Debug => debug!("{diagnostic}"),
            Severity::Warning => {
                self.warnings += 1;
                warn!("{diagnostic}");
            }
        }
    }
}
