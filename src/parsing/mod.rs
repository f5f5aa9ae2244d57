//! Parsers for multi-section tabular reports.
//!
//! This module provides:
//!
//! - **Section specs**: Map marker-line prefixes to logical section names
//! - **Report parser**: Turn report text into a [`ParsedReport`](crate::core::report::ParsedReport)
//! - **Diagnostics**: Non-fatal data quality events delivered to a caller-supplied sink
//! - **`BaseRecalibrator` dialect**: The section spec and file reader for GATK recalibration tables
//!
//! ## Example
//!
//! ```rust,no_run
//! use recal_report::parsing::diagnostics::TracingSink;
//! use recal_report::parsing::recal::parse_recal_file;
//! use std::path::Path;
//!
//! let mut sink = TracingSink::new();
//! let report = parse_recal_file(Path::new("sample.recal_data.table"), &mut sink).unwrap();
//! for (name, table) in report.iter() {
//!     println!("{name}: {} rows", table.len());
//! }
//! ```
//!
//! ## Format rules
//!
//! | Line | Meaning |
//! |------|---------|
//! | starts with a declared prefix | Starts a section (first declared match wins by default) |
//! | line after the marker | Header row, whitespace-delimited column names |
//! | following non-blank lines | Data rows; rows of the wrong width are skipped |
//! | blank line | Ends the section |

pub mod diagnostics;
pub mod recal;
pub mod report;
pub mod section;
