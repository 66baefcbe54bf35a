pub mod bigquery;
