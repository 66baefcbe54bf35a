//! # BigQuery Dataset Exporter
//!
//! An event-triggered utility that submits one asynchronous extract job per
//! table in a configured BigQuery dataset, targeting Parquet files in a
//! Cloud Storage bucket.
//!
//! This application follows the **Hexagonal Architecture** (Ports and
//! Adapters) to maintain a strict separation between the export logic and
//! the warehouse integration.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod trigger;

use crate::application::exporter::Exporter;
use crate::config::{CliArgs, ExporterConfig};
use crate::infrastructure::bigquery::bq_cli_adapter::BqCliAdapter;
use crate::infrastructure::bigquery::check_bq_availability;
use crate::trigger::{TriggerContext, TriggerEvent};
use clap::Parser;
use log::warn;
use std::sync::Arc;

fn main() {
    // 1. Initialize Logging
    env_logger::init();

    // 2. Parse Arguments
    let args = CliArgs::parse();

    // 3. Load Config (env first, CLI overrides on top)
    let mut config = ExporterConfig::from_env();
    config.merge_cli(&args);

    // 4. Load the trigger payload. The payload is opaque and ignored, so a
    //    bad payload degrades to defaults instead of blocking the export.
    let (event, context) = match trigger::load_event(args.event_file.as_deref()) {
        Ok(pair) => pair,
        Err(e) => {
            warn!("Ignoring trigger payload: {}", e);
            (TriggerEvent::default(), TriggerContext::default())
        }
    };

    if !check_bq_availability() {
        warn!("bq CLI not found on PATH; warehouse calls will fail");
    }

    // 5. Wire the warehouse adapter and run. All failures are logged inside
    //    run; the trigger mechanism always observes a clean exit.
    let warehouse = Arc::new(BqCliAdapter::new(
        config.project_id.clone(),
        config.location.clone(),
    ));
    let exporter = Exporter::new(warehouse, config);
    exporter.run(&event, &context);
}
