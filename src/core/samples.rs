use std::collections::BTreeMap;

use crate::core::report::ParsedReport;
use crate::parsing::diagnostics::{Diagnostic, DiagnosticSink};

/// Parsed reports keyed by sample name, one report per sample.
///
/// Mutation takes `&mut self`, so callers that parse files in parallel must
/// funnel inserts through a single owner (or wrap the set in a lock).
#[derive(Debug, Clone, Default)]
pub struct SampleReportSet {
    reports: BTreeMap<String, ParsedReport>,
    /// Where each sample's report was read from
    sources: BTreeMap<String, String>,
}

impl SampleReportSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a report, overwriting any existing report for the same sample.
    ///
    /// An overwrite is reported as [`Diagnostic::DuplicateSample`] and the
    /// replaced report is returned.
    pub fn insert(
        &mut self,
        sample: impl Into<String>,
        report: ParsedReport,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<ParsedReport> {
        let sample = sample.into();
        let previous = self.reports.insert(sample.clone(), report);
        if previous.is_some() {
            self.sources.remove(&sample);
            sink.emit(Diagnostic::DuplicateSample { sample });
        }
        previous
    }

    /// Add the result of parsing one file.
    ///
    /// Reports with no recognised sections are not added and return `false`;
    /// everything else is inserted (see [`insert`](Self::insert)) and returns `true`.
    pub fn accept(
        &mut self,
        sample: impl Into<String>,
        source: Option<String>,
        report: ParsedReport,
        sink: &mut dyn DiagnosticSink,
    ) -> bool {
        let sample = sample.into();
        if report.is_empty() {
            sink.emit(Diagnostic::EmptyReport { sample });
            return false;
        }

        self.insert(sample.clone(), report, sink);
        if let Some(source) = source {
            self.sources.insert(sample, source);
        }
        true
    }

    #[must_use]
    pub fn get(&self, sample: &str) -> Option<&ParsedReport> {
        self.reports.get(sample)
    }

    /// Source path recorded for a sample, if any
    #[must_use]
    pub fn source(&self, sample: &str) -> Option<&str> {
        self.sources.get(sample).map(String::as_str)
    }

    /// Remove a sample and its source
    pub fn remove(&mut self, sample: &str) -> Option<ParsedReport> {
        self.sources.remove(sample);
        self.reports.remove(sample)
    }

    /// Keep only the samples for which `keep` returns true
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &ParsedReport) -> bool,
    {
        self.reports.retain(|sample, report| keep(sample.as_str(), &*report));
        let reports = &self.reports;
        self.sources.retain(|sample, _| reports.contains_key(sample));
    }

    /// Iterate over `(sample, report)` sorted by sample name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParsedReport)> {
        self.reports
            .iter()
            .map(|(sample, report)| (sample.as_str(), report))
    }

    pub fn samples(&self) -> impl Iterator<Item = &str> {
        self.reports.keys().map(String::as_str)
    }

    #[must_use]
    pub fn reports(&self) -> &BTreeMap<String, ParsedReport> {
        &self.reports
    }

    #[must_use]
    pub fn sources(&self) -> &BTreeMap<String, String> {
        &self.sources
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::Table;

    fn report_with(section: &str, header: &str) -> ParsedReport {
        let mut report = ParsedReport::new();
        report.insert(section, Table::from_header_line(header));
        report
    }

    #[test]
    fn test_duplicate_sample_overwrites() {
        let mut set = SampleReportSet::new();
        let mut sink: Vec<Diagnostic> = Vec::new();

        assert!(set.accept("A", Some("a1.table".to_string()), report_with("first", "X"), &mut sink));
        assert!(set.accept("A", Some("a2.table".to_string()), report_with("second", "X"), &mut sink));

        assert_eq!(set.len(), 1);
        let kept = set.get("A").unwrap();
        assert!(kept.contains("second"));
        assert!(!kept.contains("first"));
        assert_eq!(set.source("A"), Some("a2.table"));
        assert_eq!(
            sink,
            vec![Diagnostic::DuplicateSample {
                sample: "A".to_string()
            }]
        );
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut set = SampleReportSet::new();
        let mut sink: Vec<Diagnostic> = Vec::new();

        assert!(set.insert("A", report_with("first", "X"), &mut sink).is_none());
        let previous = set.insert("A", report_with("second", "X"), &mut sink);
        assert!(previous.unwrap().contains("first"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty_report_is_excluded() {
        let mut set = SampleReportSet::new();
        let mut sink: Vec<Diagnostic> = Vec::new();

        assert!(!set.accept("B", None, ParsedReport::new(), &mut sink));
        assert!(set.is_empty());
        assert_eq!(
            sink,
            vec![Diagnostic::EmptyReport {
                sample: "B".to_string()
            }]
        );
    }

    #[test]
    fn test_retain_and_remove() {
        let mut set = SampleReportSet::new();
        let mut sink: Vec<Diagnostic> = Vec::new();
        for sample in ["A", "B", "C"] {
            set.accept(sample, Some(format!("{sample}.table")), report_with("s", "X"), &mut sink);
        }

        set.retain(|sample, _| sample != "B");
        assert_eq!(set.samples().collect::<Vec<_>>(), vec!["A", "C"]);
        assert!(set.source("B").is_none());

        assert!(set.remove("A").is_some());
        assert!(set.remove("A").is_none());
        assert_eq!(set.len(), 1);
        assert_eq!(set.sources().len(), 1);
    }
}
