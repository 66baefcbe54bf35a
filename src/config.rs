use crate::domain::errors::{ExportError, Result};
use clap::Parser;
use std::env;

/// Environment variable carrying the warehouse project id.
pub const ENV_PROJECT: &str = "GCP_PROJECT";
/// Environment variable carrying the dataset to enumerate.
pub const ENV_DATASET: &str = "SOURCE_DATASET_ID";
/// Environment variable carrying the destination bucket name.
pub const ENV_BUCKET: &str = "DESTINATION_BUCKET_NAME";
/// Environment variable carrying the warehouse region. Optional.
pub const ENV_LOCATION: &str = "BIGQUERY_LOCATION";

/// Region used when `BIGQUERY_LOCATION` is unset.
pub const DEFAULT_LOCATION: &str = "US";

/// Runtime configuration for one invocation.
///
/// Constructed once at process entry and passed into the Exporter; the
/// operation itself never touches the process environment, so tests inject
/// a config directly instead of mutating env vars.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    pub project_id: String,
    pub dataset_id: String,
    pub bucket_name: String,
    pub location: String,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to a JSON file with the trigger event payload (optional)
    #[arg(short, long)]
    pub event_file: Option<String>,

    // Overrides for ad-hoc runs
    #[arg(long)]
    pub project: Option<String>,
    #[arg(long)]
    pub dataset: Option<String>,
    #[arg(long)]
    pub bucket: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
}

impl ExporterConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Missing variables become empty strings; `validate` decides whether
    /// the result is usable. Only the location gets a default.
    pub fn from_env() -> Self {
        let location = env::var(ENV_LOCATION).unwrap_or_default();
        Self {
            project_id: env::var(ENV_PROJECT).unwrap_or_default(),
            dataset_id: env::var(ENV_DATASET).unwrap_or_default(),
            bucket_name: env::var(ENV_BUCKET).unwrap_or_default(),
            location: if location.is_empty() {
                DEFAULT_LOCATION.to_string()
            } else {
                location
            },
        }
    }

    pub fn merge_cli(&mut self, args: &CliArgs) {
        if let Some(p) = &args.project {
            self.project_id = p.clone();
        }
        if let Some(d) = &args.dataset {
            self.dataset_id = d.clone();
        }
        if let Some(b) = &args.bucket {
            self.bucket_name = b.clone();
        }
        if let Some(l) = &args.location {
            self.location = l.clone();
        }
    }

    /// Checks that every required field is present.
    ///
    /// The error message names all missing variables at once so a
    /// misconfigured deployment is fixable in a single pass.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.project_id.is_empty() {
            missing.push(ENV_PROJECT);
        }
        if self.dataset_id.is_empty() {
            missing.push(ENV_DATASET);
        }
        if self.bucket_name.is_empty() {
            missing.push(ENV_BUCKET);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ExportError::ConfigError(format!(
                "{} must be set in the environment",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> ExporterConfig {
        ExporterConfig {
            project_id: "p1".to_string(),
            dataset_id: "d1".to_string(),
            bucket_name: "b1".to_string(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_full_config() {
        assert!(full_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_missing_field() {
        for field in ["project", "dataset", "bucket"] {
            let mut config = full_config();
            match field {
                "project" => config.project_id.clear(),
                "dataset" => config.dataset_id.clear(),
                _ => config.bucket_name.clear(),
            }
            assert!(config.validate().is_err(), "missing {} accepted", field);
        }
    }

    #[test]
    fn test_validate_names_all_missing_fields() {
        let config = ExporterConfig {
            project_id: String::new(),
            dataset_id: String::new(),
            bucket_name: "b1".to_string(),
            location: DEFAULT_LOCATION.to_string(),
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains(ENV_PROJECT));
        assert!(err.contains(ENV_DATASET));
        assert!(!err.contains(ENV_BUCKET));
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = full_config();
        let args = CliArgs {
            event_file: None,
            project: Some("p2".to_string()),
            dataset: None,
            bucket: Some("b2".to_string()),
            location: Some("EU".to_string()),
        };
        config.merge_cli(&args);
        assert_eq!(config.project_id, "p2");
        assert_eq!(config.dataset_id, "d1");
        assert_eq!(config.bucket_name, "b2");
        assert_eq!(config.location, "EU");
    }
}
