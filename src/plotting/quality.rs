//! The "Observed Quality Scores" plot: reads per observed base quality.

use crate::core::samples::SampleReportSet;
use crate::parsing::diagnostics::DiagnosticSink;
use crate::parsing::recal::QUALITY_QUANTIZATION_MAP;
use crate::plotting::config::{LinePlot, LinePlotConfig};
use crate::plotting::series::extract_series;

pub const PLOT_NAME: &str = "Observed Quality Scores";

/// Quality score vs. number of observations, one line per sample
pub fn observed_quality_scores(
    samples: &SampleReportSet,
    sink: &mut dyn DiagnosticSink,
) -> LinePlot {
    LinePlot {
        data: extract_series(samples, QUALITY_QUANTIZATION_MAP, "QualityScore", "Count", sink),
        config: LinePlotConfig::integer_axes("Observed Quality Score", "Count"),
    }
}
