use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::report::ParsedReport;
use crate::core::samples::SampleReportSet;

#[derive(Error, Debug)]
pub enum DataFileError {
    #[error("Failed to write data file: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to serialize data file: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Data file format version
pub const DATA_FILE_VERSION: &str = "1.0.0";

/// Module name recorded in the data file
pub const MODULE_NAME: &str = "gatk_base_recalibrator";

/// Default data file name (without directory)
pub const DATA_FILE_NAME: &str = "multiqc_gatk_base_recalibrator.json";

/// Serializable snapshot of every sample's parsed report
#[derive(Debug, Serialize)]
pub struct ReportDataFile<'a> {
    pub version: String,
    pub created_at: String,
    pub module: String,
    /// Sample name -> file the report was read from
    pub sources: &'a BTreeMap<String, String>,
    /// Sample name -> section name -> column name -> cells
    pub samples: &'a BTreeMap<String, ParsedReport>,
}

impl<'a> ReportDataFile<'a> {
    #[must_use]
    pub fn new(samples: &'a SampleReportSet) -> Self {
        Self {
            version: DATA_FILE_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            module: MODULE_NAME.to_string(),
            sources: samples.sources(),
            samples: samples.reports(),
        }
    }

    /// Export to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `DataFileError::SerializeError` if serialization fails.
    pub fn to_json(&self) -> Result<String, DataFileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write [`DATA_FILE_NAME`] into `dir`, returning the path written
    ///
    /// # Errors
    ///
    /// Returns `DataFileError::WriteError` if the directory cannot be created
    /// or the file cannot be written.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, DataFileError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(DATA_FILE_NAME);
        std::fs::write(&path, self.to_json()?)?;
        Ok(path)
    }
}
