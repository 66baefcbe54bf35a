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

//! # Warehouse Port
//!
//! In Hexagonal Architecture, a **Port** is like a "Slot" or a "Contract".
//!
//! This Port defines what it means to talk to the data warehouse: list the
//! tables of a dataset, and hand the warehouse one export job. It doesn't
//! care IF the warehouse is BigQuery behind a CLI, a REST client, or a Mock
//! for testing. Any struct that implements `WarehousePort` can be driven
//! by the Exporter.

use crate::domain::entities::{ExportJobHandle, ExportRequest, TableRef};
use crate::domain::errors::Result;

/// `WarehousePort` is a **Trait**. Think of it as an Interface.
///
/// `Send + Sync` lets implementations be shared behind an `Arc` across
/// threads, which the trigger harness may do.
pub trait WarehousePort: Send + Sync {
    /// Returns every table currently present in the dataset, in whatever
    /// order the warehouse yields them.
    fn list_tables(&self, dataset_id: &str) -> Result<Vec<TableRef>>;

    /// Submits one asynchronous export job.
    ///
    /// Returns as soon as the warehouse has *accepted* the job. The export
    /// itself keeps running inside the warehouse; nobody waits for it here.
    fn submit_extract(&self, request: &ExportRequest) -> Result<ExportJobHandle>;
}
