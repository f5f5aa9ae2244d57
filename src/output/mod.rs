//! Writers for aggregated report data.

pub mod data_file;
