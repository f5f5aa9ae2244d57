//! Core data types for parsed recalibration reports.
//!
//! - [`Table`]: One report section as named columns of raw string cells
//! - [`ParsedReport`]: All recognised sections of one report, keyed by logical name
//! - [`SampleReportSet`]: One parsed report per sample
//!
//! ## Shape
//!
//! | Type | Keyed by | Holds |
//! |------|----------|-------|
//! | `SampleReportSet` | sample name | `ParsedReport` |
//! | `ParsedReport` | section name | `Table` |
//! | `Table` | column name | cells (`String`) |
//!
//! Cells are never converted while parsing. Numeric conversion happens where
//! the values are used, see [`crate::plotting::series`].
//!
//! [`Table`]: table::Table
//! [`ParsedReport`]: report::ParsedReport
//! [`SampleReportSet`]: samples::SampleReportSet

pub mod report;
pub mod samples;
pub mod table;
