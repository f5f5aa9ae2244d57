//! The GATK `BaseRecalibrator` report dialect.
//!
//! A recalibration report (`recal_data.table`) holds five tables:
//!
//! | Marker line | Section name |
//! |-------------|--------------|
//! | `#:GATKTable:Arguments:Recalibration argument collection values used in this run` | `arguments` |
//! | `#:GATKTable:Quantized:Quality quantization map` | `quality_quantization_map` |
//! | `#:GATKTable:RecalTable0:` | `recal_table_0` |
//! | `#:GATKTable:RecalTable1:` | `recal_table_1` |
//! | `#:GATKTable:RecalTable2:` | `recal_table_2` |
//!
//! Reports may be gzip or bgzip compressed.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::core::report::ParsedReport;
use crate::parsing::diagnostics::DiagnosticSink;
use crate::parsing::report::{parse_report, ParseError};
use crate::parsing::section::SectionSpec;
use crate::utils::validation::is_gzipped;

pub const ARGUMENTS: &str = "arguments";
pub const QUALITY_QUANTIZATION_MAP: &str = "quality_quantization_map";
pub const RECAL_TABLE_0: &str = "recal_table_0";
pub const RECAL_TABLE_1: &str = "recal_table_1";
pub const RECAL_TABLE_2: &str = "recal_table_2";

/// Section spec for `BaseRecalibrator` reports
#[must_use]
pub fn base_recalibrator_sections() -> SectionSpec {
    SectionSpec::new()
        .with_section(
            "#:GATKTable:Arguments:Recalibration argument collection values used in this run",
            ARGUMENTS,
        )
        .with_section(
            "#:GATKTable:Quantized:Quality quantization map",
            QUALITY_QUANTIZATION_MAP,
        )
        .with_section("#:GATKTable:RecalTable0:", RECAL_TABLE_0)
        .with_section("#:GATKTable:RecalTable1:", RECAL_TABLE_1)
        .with_section("#:GATKTable:RecalTable2:", RECAL_TABLE_2)
}

/// Parse a `BaseRecalibrator` report file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, decompressed, or read,
/// or `ParseError::TooManyRows` if a table exceeds the row limit.
pub fn parse_recal_file(
    path: &Path,
    sink: &mut dyn DiagnosticSink,
) -> Result<ParsedReport, ParseError> {
    let file = File::open(path)?;
    // bgzip files are a series of gzip members
    let reader: Box<dyn Read> = if is_gzipped(path) {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };

    parse_report(BufReader::new(reader), &base_recalibrator_sections(), sink)
}
