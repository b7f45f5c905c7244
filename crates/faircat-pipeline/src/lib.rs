//! Faircat Pipeline
//!
//! Batch orchestration of the core: raw per-source record collections go
//! through grouping, integration, batch metrics, indicator evaluation,
//! and aggregation, producing scored instances plus a structured batch
//! report. Identity groups are independent units of work and run on a
//! rayon worker pool; the only shared state is the read-only metrics,
//! registry, and configuration.

pub mod batch;
pub mod config;
pub mod report;

pub use batch::{run_batch, BatchOutcome, ScoredInstance};
pub use config::PipelineConfig;
pub use report::BatchReport;
