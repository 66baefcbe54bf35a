// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Infrastructure adapter that drives BigQuery through the `bq` CLI.
//!
//! Listing uses `bq ls --format=json`; submission uses `bq extract --nosync`,
//! which returns as soon as the extract job is created. Authentication is
//! whatever the ambient gcloud setup provides.

use crate::domain::entities::{ExportJobHandle, ExportRequest, TableRef};
use crate::domain::errors::{ExportError, Result};
use crate::ports::warehouse_port::WarehousePort;
use log::debug;
use serde::Deserialize;
use std::process::Command;

// bq ls caps its output at 50 rows unless told otherwise, which would
// silently drop tables in larger datasets.
const LIST_MAX_RESULTS: u32 = 10_000;

/// Concrete implementation of `WarehousePort` backed by the `bq` CLI.
///
/// Each adapter is scoped to one project and location; every spawned
/// command carries both so job locality matches the dataset region.
pub struct BqCliAdapter {
    project_id: String,
    location: String,
}

impl BqCliAdapter {
    pub fn new(project_id: String, location: String) -> Self {
        Self {
            project_id,
            location,
        }
    }

    fn bq_command(&self, subcommand: &str) -> Command {
        let mut cmd = Command::new("bq");
        cmd.arg(subcommand)
            .arg(format!("--project_id={}", self.project_id))
            .arg(format!("--location={}", self.location));
        cmd
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListedTable {
    table_reference: TableReference,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableReference {
    dataset_id: String,
    table_id: String,
}

/// Parses the JSON array printed by `bq ls --format=json`.
///
/// An empty dataset produces empty output rather than `[]`.
pub fn parse_table_listing(raw: &str) -> Result<Vec<TableRef>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(vec![]);
    }

    let entries: Vec<ListedTable> = serde_json::from_str(trimmed)
        .map_err(|e| ExportError::ParseError(format!("bad table listing: {}", e)))?;

    Ok(entries
        .into_iter()
        .map(|entry| TableRef {
            dataset_id: entry.table_reference.dataset_id,
            table_id: entry.table_reference.table_id,
        })
        .collect())
}

/// Extracts the job id from `bq extract --nosync` output, which looks like
/// `Successfully started extract bqjob_r12ab_0001`.
pub fn parse_job_id(stdout: &str) -> Result<String> {
    stdout
        .split_whitespace()
        .last()
        .filter(|token| token.contains("job"))
        .map(|token| token.trim_end_matches('.').to_string())
        .ok_or_else(|| {
            ExportError::ParseError(format!("no job id in warehouse response: {:?}", stdout))
        })
}

impl WarehousePort for BqCliAdapter {
    fn list_tables(&self, dataset_id: &str) -> Result<Vec<TableRef>> {
        debug!("Listing tables of dataset {}", dataset_id);

        let output = self
            .bq_command("ls")
            .arg("--format=json")
            .arg(format!("--max_results={}", LIST_MAX_RESULTS))
            .arg(dataset_id)
            .output()
            .map_err(|e| ExportError::ListingError(format!("failed to run bq: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::ListingError(format!(
                "bq ls {} exited with {}: {}",
                dataset_id,
                output.status,
                stderr.trim()
            )));
        }

        parse_table_listing(&String::from_utf8_lossy(&output.stdout))
    }

    fn submit_extract(&self, request: &ExportRequest) -> Result<ExportJobHandle> {
        let source = format!(
            "{}.{}",
            request.table.dataset_id, request.table.table_id
        );

        let mut cmd = self.bq_command("extract");
        cmd.arg("--nosync")
            .arg(format!("--destination_format={}", request.format));
        if let Some(compression) = &request.compression {
            cmd.arg(format!("--compression={}", compression));
        }
        cmd.arg(&source).arg(&request.destination_uri);

        let output = cmd.output().map_err(|e| ExportError::SubmissionError {
            table: request.table.table_id.clone(),
            reason: format!("failed to run bq: {}", e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::SubmissionError {
                table: request.table.table_id.clone(),
                reason: format!("bq extract exited with {}: {}", output.status, stderr.trim()),
            });
        }

        let job_id = parse_job_id(&String::from_utf8_lossy(&output.stdout))?;
        Ok(ExportJobHandle { job_id })
    }
}
