use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::samples::SampleReportSet;
use crate::parsing::diagnostics::{Diagnostic, DiagnosticSink};

/// Points for one sample, ordered by x
pub type Points = BTreeMap<i64, i64>;

/// Per-sample numeric (x, y) data ready for a line chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Series {
    samples: BTreeMap<String, Points>,
}

impl Series {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a point; a repeated x for the same sample replaces the earlier y
    pub fn insert_point(&mut self, sample: &str, x: i64, y: i64) {
        self.samples
            .entry(sample.to_string())
            .or_default()
            .insert(x, y);
    }

    #[must_use]
    pub fn get(&self, sample: &str) -> Option<&Points> {
        self.samples.get(sample)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Points)> {
        self.samples
            .iter()
            .map(|(sample, points)| (sample.as_str(), points))
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Build a series from two columns of one section across all samples.
///
/// Samples without the section, or without either column, are left out.
/// Each (x, y) cell pair is converted to integers; a pair that does not
/// convert is skipped and reported as [`Diagnostic::CoercionFailure`], the
/// rest of that sample's points are kept.
pub fn extract_series(
    samples: &SampleReportSet,
    section: &str,
    x_column: &str,
    y_column: &str,
    sink: &mut dyn DiagnosticSink,
) -> Series {
    let mut series = Series::new();

    for (sample, report) in samples.iter() {
        let Some(table) = report.get(section) else {
            continue;
        };
        let (Some(xs), Some(ys)) = (table.column(x_column), table.column(y_column)) else {
            continue;
        };

        let points = series.samples.entry(sample.to_string()).or_default();
        for (x, y) in xs.into_iter().zip(ys) {
            match (x.trim().parse::<i64>(), y.trim().parse::<i64>()) {
                (Ok(x), Ok(y)) => {
                    points.insert(x, y);
                }
                _ => sink.emit(Diagnostic::CoercionFailure {
                    sample: sample.to_string(),
                    section: section.to_string(),
                    x: x.to_string(),
                    y: y.to_string(),
                }),
            }
        }
    }

    series
}
