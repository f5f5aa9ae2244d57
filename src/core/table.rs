use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A data row whose width does not match the table header
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("row has {found} fields but the header has {expected} columns")]
pub struct RowWidthMismatch {
    pub expected: usize,
    pub found: usize,
}

/// One section of a report: named columns of equal-length cell sequences.
///
/// Cells are stored row-major and kept as the raw tokens read from the report.
/// Every stored row has exactly `header.len()` cells; [`Table::push_row`]
/// refuses anything else, so columns can never drift to different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given column names.
    ///
    /// Column names are unique: a repeated name is dropped and only its first
    /// occurrence becomes a column.
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in header {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self {
            header: unique,
            rows: Vec::new(),
        }
    }

    /// Create an empty table from a whitespace-delimited header line,
    /// keeping the first occurrence of any repeated name
    #[must_use]
    pub fn from_header_line(line: &str) -> Self {
        Self::new(line.split_whitespace())
    }

    /// Column names in header order
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of columns
    #[must_use]
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row of cells.
    ///
    /// # Errors
    ///
    /// Returns `RowWidthMismatch` if the row does not have one cell per column.
    /// The table is left unchanged in that case.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), RowWidthMismatch> {
        if row.len() != self.header.len() {
            return Err(RowWidthMismatch {
                expected: self.header.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Iterate over data rows
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Position of a column by name (first occurrence)
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// All cells of a named column, top to bottom
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Iterate over `(column name, cells)` in header order
    pub fn columns(&self) -> impl Iterator<Item = (&str, Vec<&str>)> {
        self.header.iter().enumerate().map(|(idx, name)| {
            let cells = self.rows.iter().map(|row| row[idx].as_str()).collect();
            (name.as_str(), cells)
        })
    }

    /// Render the header and rows as whitespace-delimited lines
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        std::iter::once(self.header.join("  "))
            .chain(self.rows.iter().map(|row| row.join("  ")))
            .collect()
    }
}

/// Serialized as `{column: [cells...]}` with columns in header order
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.header.len()))?;
        for (name, cells) in self.columns() {
            map.serialize_entry(name, &cells)?;
        }
        map.end()
    }
}
