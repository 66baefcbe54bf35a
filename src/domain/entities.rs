//! # Domain Entities
//!
//! Entities are the "Nouns" of this application: table references, export
//! requests, and the job handles the warehouse returns when it accepts one.
//! All of them are transient; nothing here outlives a single invocation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `ExportFormat` defines the file format the warehouse writes to storage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportFormat {
    /// Apache Parquet: a columnar format that is very efficient to scan.
    Parquet,
    /// Comma-separated values.
    Csv,
}

impl ExportFormat {
    /// File extension used in destination URIs.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Parquet => "parquet",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Parquet => write!(f, "PARQUET"),
            ExportFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// A single table discovered by listing a dataset. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    pub dataset_id: String,
    pub table_id: String,
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.dataset_id, self.table_id)
    }
}

/// `ExportRequest` is the full instruction for one extract job submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub table: TableRef,
    /// Wildcarded storage URI the warehouse writes shards into.
    pub destination_uri: String,
    pub format: ExportFormat,
    /// `None` means the format's default compression.
    pub compression: Option<String>,
}

/// Opaque identifier the warehouse returns once it has accepted a job.
///
/// Accepted is not completed: the export keeps running inside the warehouse
/// after this process has returned. The handle's life ends at the log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJobHandle {
    pub job_id: String,
}

/// Builds the destination URI pattern for one table.
///
/// The `*` wildcard is required so the warehouse can split large tables
/// into multiple output files.
pub fn destination_uri(bucket: &str, dataset: &str, table: &str, format: ExportFormat) -> String {
    format!(
        "gs://{}/{}/{}/*.{}",
        bucket,
        dataset,
        table,
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_uri_parquet() {
        let uri = destination_uri("b1", "d1", "orders", ExportFormat::Parquet);
        assert_eq!(uri, "gs://b1/d1/orders/*.parquet");
    }

    #[test]
    fn test_destination_uri_csv() {
        let uri = destination_uri("bkt", "sales", "items", ExportFormat::Csv);
        assert_eq!(uri, "gs://bkt/sales/items/*.csv");
    }

    #[test]
    fn test_format_display_matches_warehouse_flag() {
        assert_eq!(ExportFormat::Parquet.to_string(), "PARQUET");
        assert_eq!(ExportFormat::Csv.to_string(), "CSV");
    }

    #[test]
    fn test_table_ref_display() {
        let t = TableRef {
            dataset_id: "d1".to_string(),
            table_id: "orders".to_string(),
        };
        assert_eq!(t.to_string(), "d1.orders");
    }
}
