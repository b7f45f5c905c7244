//! Faircat Domain Layer
//!
//! This crate contains the core data model for faircat: the raw metadata
//! records harvested from software registries, the canonical integrated
//! instance they merge into, and the FAIR scoring value objects.
//!
//! ## Key Concepts
//!
//! - **RawRecord**: one source's observation of one tool version
//! - **IdentityKey**: the (name, type) pair that groups records describing
//!   the same tool
//! - **IntegratedInstance**: the canonical merged record, with provenance
//! - **IndicatorResult / ScoreSheet**: graded FAIR judgments and their
//!   principle-level aggregates
//!
//! ## Architecture
//!
//! Pure data model and trait seams only. Integration policies live in
//! `faircat-integration`, scoring rules in `faircat-scoring`, and the
//! harvester / persistence collaborators behind the traits in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod identity;
pub mod instance;
pub mod provenance;
pub mod record;
pub mod score;
pub mod traits;

// Re-exports for convenience
pub use identity::IdentityKey;
pub use instance::{Author, AuthorKind, IntegratedInstance, License};
pub use provenance::Provenance;
pub use record::{Documentation, FormatTerm, Publication, RawRecord};
pub use score::{Grade, IndicatorResult, Principle, PrincipleScore, ScoreSheet};
