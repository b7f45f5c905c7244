//! Faircat Integration Layer
//!
//! Resolves which raw metadata records from different sources describe the
//! same tool and merges each identity group into one canonical
//! [`IntegratedInstance`](faircat_domain::IntegratedInstance) under
//! deterministic, field-specific merge policies, recording provenance and
//! every recoverable merge conflict along the way.
//!
//! The layer is a pure batch transform: no I/O, no shared mutable state,
//! and no failure in one group's merge ever aborts another group.

pub mod authors;
pub mod config;
pub mod docs_os;
pub mod error;
pub mod grouper;
pub mod integrator;
pub mod licenses;
pub mod policies;
pub mod publications;
pub mod sources;

pub use config::{IntegrationConfig, PublicationIdField};
pub use error::{MalformedRecord, MergeConflict};
pub use grouper::{group_records, GroupingOutcome, PreIntegrationGroups};
pub use integrator::{IntegrationOutcome, Integrator};
