//! # recal-report
//!
//! A library for extracting tables from GATK `BaseRecalibrator` reports.
//!
//! `BaseRecalibrator` writes its recalibration tables as a multi-section text
//! report: each table is introduced by a `#:GATKTable:` marker line, followed
//! by a whitespace-delimited header row and data rows, and terminated by a
//! blank line. Real-world reports are not always tidy, so parsing degrades
//! gracefully: malformed rows are skipped and reported through a diagnostics
//! sink rather than aborting a batch run.
//!
//! ## Features
//!
//! - **Section parsing**: Caller-supplied header prefixes map tables to logical names
//! - **Raw cell fidelity**: Cells are kept as strings until the point of use
//! - **Sample accumulation**: One parsed report per sample, duplicates overwrite with a warning
//! - **Plot data**: Per-sample numeric series plus a line-plot configuration
//!
//! ## Example
//!
//! ```rust
//! use recal_report::parsing::diagnostics::Diagnostic;
//! use recal_report::parsing::recal::base_recalibrator_sections;
//! use recal_report::parsing::report::parse_report_text;
//! use recal_report::plotting::quality::observed_quality_scores;
//! use recal_report::SampleReportSet;
//!
//! let text = "#:GATKTable:Quantized:Quality quantization map\n\
//!             QualityScore Count\n\
//!             10 500\n\
//!             20 1200\n";
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let report = parse_report_text(text, &base_recalibrator_sections(), &mut diagnostics).unwrap();
//!
//! let mut samples = SampleReportSet::new();
//! samples.accept("sample1", None, report, &mut diagnostics);
//!
//! let plot = observed_quality_scores(&samples, &mut diagnostics);
//! assert_eq!(plot.data.get("sample1").unwrap()[&20], 1200);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Tables, parsed reports, and the per-sample report set
//! - [`parsing`]: Section specs, the report parser, diagnostics, and the `BaseRecalibrator` dialect
//! - [`plotting`]: Series extraction and line-plot configuration
//! - [`output`]: Aggregated data file writer
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod plotting;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::report::ParsedReport;
pub use core::samples::SampleReportSet;
pub use core::table::Table;
pub use parsing::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use parsing::section::{PrefixPolicy, SectionSpec};
pub use plotting::series::{extract_series, Series};
