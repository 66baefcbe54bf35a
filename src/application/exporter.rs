//! The core application logic: one fire-and-forget export pass over a dataset.
//!
//! This module coordinates the warehouse port to discover tables and submit
//! one extract job per table. It submits and logs, nothing more: no waiting
//! on jobs, no retries, no status inspection.

use crate::config::ExporterConfig;
use crate::domain::entities::{destination_uri, ExportFormat, ExportRequest, TableRef};
use crate::domain::errors::Result;
use crate::ports::warehouse_port::WarehousePort;
use crate::trigger::{TriggerContext, TriggerEvent};
use log::{debug, error, info};
use std::sync::Arc;

/// Drives the whole export submission pass for a single invocation.
pub struct Exporter {
    warehouse: Arc<dyn WarehousePort>,
    config: ExporterConfig,
}

impl Exporter {
    pub fn new(warehouse: Arc<dyn WarehousePort>, config: ExporterConfig) -> Self {
        Self { warehouse, config }
    }

    /// Entry point, called once per trigger delivery.
    ///
    /// `event` and `context` are accepted for compatibility with the trigger
    /// mechanism and do not influence what gets exported. Every failure is
    /// caught and logged here; the caller never sees an error, so the
    /// trigger mechanism never re-delivers on internal failures.
    pub fn run(&self, _event: &TriggerEvent, context: &TriggerContext) {
        if let Err(e) = self.config.validate() {
            error!("{}", e);
            return;
        }

        if let Some(id) = &context.event_id {
            debug!("Triggered by event {}", id);
        }

        info!(
            "Starting export for dataset {} in project {} towards bucket {}",
            self.config.dataset_id, self.config.project_id, self.config.bucket_name
        );

        let tables = match self.warehouse.list_tables(&self.config.dataset_id) {
            Ok(t) => t,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };

        if tables.is_empty() {
            info!("No tables found in dataset {}", self.config.dataset_id);
            return;
        }

        info!("Found {} tables in the dataset", tables.len());

        // One submission failure abandons the remaining tables: the loop
        // shares a single failure boundary, so tables after the failing one
        // are not attempted.
        if let Err(e) = self.submit_all(&tables) {
            error!("Export aborted: {}", e);
        }

        info!("Export submission pass completed");
    }

    fn submit_all(&self, tables: &[TableRef]) -> Result<()> {
        for table in tables {
            let request = ExportRequest {
                table: table.clone(),
                destination_uri: destination_uri(
                    &self.config.bucket_name,
                    &self.config.dataset_id,
                    &table.table_id,
                    ExportFormat::Parquet,
                ),
                format: ExportFormat::Parquet,
                compression: None,
            };

            info!(
                "Exporting table {} to {}",
                table.table_id, request.destination_uri
            );

            let handle = self.warehouse.submit_extract(&request)?;

            // The job keeps running inside the warehouse; the handle's
            // usefulness ends at this log line.
            info!(
                "Export job started for table {}. Job ID: {}",
                table.table_id, handle.job_id
            );
        }
        Ok(())
    }
}
