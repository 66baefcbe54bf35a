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

//! Core error definitions for the dataset exporter.
//!
//! This module provides a centralized `ExportError` enum and a `Result` type
//! used throughout the application to handle configuration, listing, and
//! job-submission errors.

use thiserror::Error;

/// Error types encountered while submitting dataset exports.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Table listing failed: {0}")]
    ListingError(String),

    #[error("Export submission failed for {table}: {reason}")]
    SubmissionError { table: String, reason: String },

    #[error("Unparseable warehouse response: {0}")]
    ParseError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for the dataset exporter.
pub type Result<T> = std::result::Result<T, ExportError>;
