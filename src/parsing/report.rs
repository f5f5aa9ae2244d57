//! Parser for multi-section GATK-style table reports.
//!
//! A report is a sequence of sections. Each section starts with a marker line
//! matched by a [`SectionSpec`] prefix, followed by a header row and data rows:
//!
//! ```text
//! #:GATKTable:Quantized:Quality quantization map
//! QualityScore  Count  QuantizedScore
//! 10            500    10
//! 20            1200   20
//!
//! ```
//!
//! Marker prefixes are matched literally against the line as read (only a
//! trailing `\r` is removed). Header and data rows are split on runs of
//! whitespace; a repeated column name keeps its first column only. A section
//! ends at the first blank line or at the next marker line. Lines outside a
//! section are ignored, which covers the report preamble and tables with no
//! declared prefix.

use std::io::BufRead;
use thiserror::Error;

use crate::core::report::ParsedReport;
use crate::core::table::{RowWidthMismatch, Table};
use crate::parsing::diagnostics::{Diagnostic, DiagnosticSink};
use crate::parsing::section::SectionSpec;
use crate::utils::validation::{check_row_limit, MAX_TABLE_ROWS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Too many rows in section '{section}': exceeds maximum allowed ({max})", max = MAX_TABLE_ROWS)]
    TooManyRows { section: String },
}

/// Parse a report from a buffered reader.
///
/// Malformed rows are skipped and reported to `sink`; they never fail the parse.
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails (including invalid UTF-8), or
/// `ParseError::TooManyRows` if a section exceeds the row limit.
pub fn parse_report<R: BufRead>(
    reader: R,
    spec: &SectionSpec,
    sink: &mut dyn DiagnosticSink,
) -> Result<ParsedReport, ParseError> {
    let mut parser = ReportParser::new(spec);
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        // Line numbers in diagnostics are 1-based
        parser.feed(i + 1, &line, sink)?;
    }
    Ok(parser.finish(sink))
}

/// Parse a report from text already held in memory.
///
/// # Errors
///
/// Returns `ParseError::TooManyRows` if a section exceeds the row limit.
pub fn parse_report_text(
    text: &str,
    spec: &SectionSpec,
    sink: &mut dyn DiagnosticSink,
) -> Result<ParsedReport, ParseError> {
    let mut parser = ReportParser::new(spec);
    for (i, line) in text.lines().enumerate() {
        parser.feed(i + 1, line, sink)?;
    }
    Ok(parser.finish(sink))
}

/// Render a report back to text using the prefixes in `spec`.
///
/// Sections are written in spec declaration order, each as its marker line,
/// header, rows, and a blank separator. Sections whose name is not in `spec`
/// are left out. Parsing the output with the same spec gives back the same
/// report as long as no declared prefix shadows another.
#[must_use]
pub fn render_report_text(report: &ParsedReport, spec: &SectionSpec) -> String {
    let mut out = String::new();
    for entry in spec.entries() {
        let Some(table) = report.get(&entry.name) else {
            continue;
        };
        out.push_str(&entry.prefix);
        out.push('\n');
        for line in table.to_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

enum State {
    /// Between sections
    Outside,
    /// Marker seen, the next line is the header row
    AwaitingHeader { section: String, line: usize },
    /// Reading data rows
    InTable {
        section: String,
        line: usize,
        /// Token count of the header row
        width: usize,
        /// Token positions kept as columns (first occurrence of each name)
        columns: Vec<usize>,
        table: Table,
    },
}

struct ReportParser<'a> {
    spec: &'a SectionSpec,
    state: State,
    report: ParsedReport,
}

impl<'a> ReportParser<'a> {
    fn new(spec: &'a SectionSpec) -> Self {
        Self {
            spec,
            state: State::Outside,
            report: ParsedReport::new(),
        }
    }

    fn feed(
        &mut self,
        line_num: usize,
        raw: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), ParseError> {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let blank = line.trim().is_empty();

        if let Some(section) = self.spec.match_line(line).map(str::to_string) {
            self.close_section(sink);
            self.state = State::AwaitingHeader {
                section,
                line: line_num,
            };
            return Ok(());
        }

        match &mut self.state {
            State::Outside => {}
            State::AwaitingHeader { section, line: start } => {
                // A marker followed directly by a blank line has no header; drop it
                if blank {
                    self.state = State::Outside;
                    return Ok(());
                }

                let section = std::mem::take(section);
                let start = *start;
                let tokens: Vec<&str> = line.split_whitespace().collect();
                let mut columns = Vec::with_capacity(tokens.len());
                for (idx, name) in tokens.iter().enumerate() {
                    if tokens[..idx].contains(name) {
                        sink.emit(Diagnostic::DuplicateColumn {
                            section: section.clone(),
                            line: line_num,
                            column: (*name).to_string(),
                        });
                    } else {
                        columns.push(idx);
                    }
                }

                self.state = State::InTable {
                    section,
                    line: start,
                    width: tokens.len(),
                    table: Table::new(columns.iter().map(|&idx| tokens[idx])),
                    columns,
                };
            }
            State::InTable {
                section,
                width,
                columns,
                table,
                ..
            } => {
                if blank {
                    self.close_section(sink);
                    return Ok(());
                }

                if check_row_limit(table.len()).is_some() {
                    return Err(ParseError::TooManyRows {
                        section: section.clone(),
                    });
                }

                let tokens: Vec<&str> = line.split_whitespace().collect();
                let pushed = if tokens.len() == *width {
                    table.push_row(columns.iter().map(|&idx| tokens[idx].to_string()).collect())
                } else {
                    Err(RowWidthMismatch {
                        expected: *width,
                        found: tokens.len(),
                    })
                };
                if let Err(mismatch) = pushed {
                    sink.emit(Diagnostic::RowShapeMismatch {
                        section: section.clone(),
                        line: line_num,
                        expected: mismatch.expected,
                        found: mismatch.found,
                    });
                }
            }
        }

        Ok(())
    }

    fn close_section(&mut self, sink: &mut dyn DiagnosticSink) {
        if let State::InTable {
            section,
            line,
            table,
            ..
        } = std::mem::replace(&mut self.state, State::Outside)
        {
            if self.report.insert(section.clone(), table).is_some() {
                sink.emit(Diagnostic::DuplicateSection { section, line });
            }
        }
    }

    fn finish(mut self, sink: &mut dyn DiagnosticSink) -> ParsedReport {
        self.close_section(sink);
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quantized_spec() -> SectionSpec {
        SectionSpec::new()
            .with_section("#:GATKTable:Quantized:Quality quantization map", "quality_quantization_map")
            .with_section("#:GATKTable:RecalTable0:", "recal_table_0")
    }

    #[test]
    fn test_parse_quantization_map() {
        let text = "#:GATKTable:Quantized:Quality quantization map\n\
                    QualityScore Count\n\
                    10 500\n\
                    20 1200\n";

        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report_text(text, &quantized_spec(), &mut sink).unwrap();

        let table = report.get("quality_quantization_map").unwrap();
        assert_eq!(table.column("QualityScore").unwrap(), vec!["10", "20"]);
        assert_eq!(table.column("Count").unwrap(), vec!["500", "1200"]);
        assert_eq!(report.len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_short_row_is_skipped() {
        let text = "#:GATKTable:Quantized:Quality quantization map\n\
                    QualityScore Count\n\
                    10 500\n\
                    15\n\
                    20 1200\n";

        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report_text(text, &quantized_spec(), &mut sink).unwrap();

        let table = report.get("quality_quantization_map").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("QualityScore").unwrap(), vec!["10", "20"]);
        assert_eq!(
            sink,
            vec![Diagnostic::RowShapeMismatch {
                section: "quality_quantization_map".to_string(),
                line: 4,
                expected: 2,
                found: 1,
            }]
        );
    }

    #[test]
    fn test_blank_line_ends_section() {
        let text = "#:GATKTable:RecalTable0:\n\
                    ReadGroup EventType Observations\n\
                    rg1 M 100\n\
                    \n\
                    rg2 M 200\n";

        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report_text(text, &quantized_spec(), &mut sink).unwrap();
        assert_eq!(report.get("recal_table_0").unwrap().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_marker_ends_section_without_blank_line() {
        let text = "#:GATKTable:RecalTable0:\n\
                    ReadGroup Observations\n\
                    rg1 100\n\
                    #:GATKTable:Quantized:Quality quantization map\n\
                    QualityScore Count\n\
                    10 5\n";

        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report_text(text, &quantized_spec(), &mut sink).unwrap();
        assert_eq!(report.get("recal_table_0").unwrap().len(), 1);
        assert_eq!(report.get("quality_quantization_map").unwrap().len(), 1);
    }

    #[test]
    fn test_header_only_section_is_kept() {
        let text = "#:GATKTable:RecalTable0:\nReadGroup Observations\n\n";

        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report_text(text, &quantized_spec(), &mut sink).unwrap();
        let table = report.get("recal_table_0").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column("Observations").unwrap(), Vec::<&str>::new());
    }

    #[test]
    fn test_section_without_header_is_omitted() {
        let text = "#:GATKTable:RecalTable0:\n\n\
                    #:GATKTable:Quantized:Quality quantization map\n\
                    #:GATKTable:RecalTable0:\n";

        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report_text(text, &quantized_spec(), &mut sink).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_unrecognised_lines_are_ignored() {
        let text = "#:GATKReport.v1.1:5\n\
                    #:GATKTable:2:17:%s:%s:;\n\
                    #:GATKTable:Other:Not requested\n\
                    A B\n\
                    1 2\n";

        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report_text(text, &quantized_spec(), &mut sink).unwrap();
        assert!(report.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_duplicate_section_keeps_last() {
        let text = "#:GATKTable:RecalTable0:\nA\n1\n\n#:GATKTable:RecalTable0:\nA\n2\n3\n";

        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report_text(text, &quantized_spec(), &mut sink).unwrap();
        assert_eq!(report.get("recal_table_0").unwrap().column("A").unwrap(), vec!["2", "3"]);
        assert_eq!(
            sink,
            vec![Diagnostic::DuplicateSection {
                section: "recal_table_0".to_string(),
                line: 5,
            }]
        );
    }

    #[test]
    fn test_crlf_and_trailing_whitespace() {
        let text = "#:GATKTable:RecalTable0:  \r\nA   B \r\n1   2\r\n \r\n";

        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report_text(text, &quantized_spec(), &mut sink).unwrap();
        let table = report.get("recal_table_0").unwrap();
        assert_eq!(table.header(), &["A", "B"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_repeated_column_keeps_first() {
        let spec = SectionSpec::new().with_section("#:T", "t");

        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report_text("#:T\nA A B\n1 2 3\n4 5\n", &spec, &mut sink).unwrap();

        let table = report.get("t").unwrap();
        assert_eq!(table.header(), &["A", "B"]);
        assert_eq!(table.column("A").unwrap(), vec!["1"]);
        assert_eq!(table.column("B").unwrap(), vec!["3"]);

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"t":{"A":["1"],"B":["3"]}}"#);

        assert_eq!(
            sink,
            vec![
                Diagnostic::DuplicateColumn {
                    section: "t".to_string(),
                    line: 2,
                    column: "A".to_string(),
                },
                Diagnostic::RowShapeMismatch {
                    section: "t".to_string(),
                    line: 4,
                    expected: 3,
                    found: 2,
                },
            ]
        );
    }

    #[test]
    fn test_prefix_with_trailing_whitespace() {
        let spec = SectionSpec::new().with_section("## HIST ", "hist");

        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report_text("## HIST \nbin n\n1 2\n", &spec, &mut sink).unwrap();
        assert_eq!(report.get("hist").unwrap().column("n").unwrap(), vec!["2"]);

        // Rendering writes the prefix verbatim, so the section survives a round trip
        let rendered = render_report_text(&report, &spec);
        let reparsed = parse_report_text(&rendered, &spec, &mut sink).unwrap();
        assert_eq!(report, reparsed);

        // A line lacking the trailing space does not carry the literal prefix
        let report = parse_report_text("## HIST\nbin n\n1 2\n", &spec, &mut sink).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_row_limit() {
        let spec = SectionSpec::new().with_section("#:T", "t");
        let mut text = String::with_capacity(2 * MAX_TABLE_ROWS + 16);
        text.push_str("#:T\nA\n");
        for _ in 0..MAX_TABLE_ROWS {
            text.push_str("1\n");
        }

        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report_text(&text, &spec, &mut sink).unwrap();
        assert_eq!(report.get("t").unwrap().len(), MAX_TABLE_ROWS);
        drop(report);

        text.push_str("1\n");
        let err = parse_report_text(&text, &spec, &mut sink).unwrap_err();
        assert!(matches!(err, ParseError::TooManyRows { ref section } if section == "t"));
        assert!(err.to_string().contains(&MAX_TABLE_ROWS.to_string()));
    }

    #[test]
    fn test_parse_from_reader() {
        let text = "#:GATKTable:RecalTable0:\nA B\n1 2\n";
        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = parse_report(Cursor::new(text), &quantized_spec(), &mut sink).unwrap();
        assert_eq!(report.get("recal_table_0").unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_structural_error() {
        let bytes: &[u8] = b"#:GATKTable:RecalTable0:\nA B\n\xff\xfe 2\n";
        let mut sink: Vec<Diagnostic> = Vec::new();
        let result = parse_report(Cursor::new(bytes), &quantized_spec(), &mut sink);
        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[test]
    fn test_render_round_trip() {
        let text = "#:GATKReport.v1.1:5\n\
                    #:GATKTable:RecalTable0:\n\
                    ReadGroup   EventType  EmpiricalQuality  Observations\n\
                    rg1         M          29.0000           8273\n\
                    rg1         I          45.0000           8273\n\
                    \n\
                    #:GATKTable:Quantized:Quality quantization map\n\
                    QualityScore Count\n\
                    \n";

        let spec = quantized_spec();
        let mut sink: Vec<Diagnostic> = Vec::new();
        let first = parse_report_text(text, &spec, &mut sink).unwrap();
        let rendered = render_report_text(&first, &spec);
        let second = parse_report_text(&rendered, &spec, &mut sink).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert!(sink.is_empty());
    }
}
