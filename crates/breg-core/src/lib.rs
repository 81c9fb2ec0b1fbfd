//! # breg-core — Foundational Filing-Validation Types
//!
//! Shared primitives for registry filing validation:
//!
//! - [`LegalType`] — the single enumeration of entity-type wire codes.
//!   Every rule that branches on legal type matches exhaustively, so a new
//!   entity type cannot be silently skipped by any rule.
//! - [`FilingDocument`] — a typed-but-permissive wrapper over the schemaless
//!   filing JSON tree, with pointer-based optional and required lookups.
//! - [`JurisdictionPolicy`] — the immutable per-jurisdiction rule
//!   parameters, constructed once and passed by reference into each rule.
//! - [`ValidationIssue`] / [`ErrorEnvelope`] — the field-level violation
//!   record and the aggregate 400 response.
//! - [`DocumentError`] / [`CollaboratorFault`] — the structural and
//!   exceptional tiers of the error taxonomy, kept distinct from domain
//!   violations.

pub mod document;
pub mod error;
pub mod issue;
pub mod legal_type;
pub mod policy;

// Re-export primary types.
pub use document::FilingDocument;
pub use error::{CollaboratorFault, DocumentError};
pub use issue::{ErrorEnvelope, ValidationIssue};
pub use legal_type::{LegalType, UnknownLegalType};
pub use policy::JurisdictionPolicy;
