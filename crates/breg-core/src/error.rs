//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout filing validation. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Two tiers are kept distinct:
//!
//! - Structural errors ([`DocumentError`]) — a required path is absent or has
//!   the wrong shape. Terminal for the enclosing rule only.
//! - Collaborator faults ([`CollaboratorFault`]) — an external lookup failed
//!   in a way that is not a business-rule violation. Surfaced through
//!   `Result` at the validation entry point instead of escaping as a panic.
//!
//! Business-rule violations are not errors in this sense at all; they are
//! collected as [`crate::issue::ValidationIssue`] entries.

use thiserror::Error;

/// Structural failure while reading the filing document tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A path that a rule requires is absent from the document.
    #[error("missing required field at {path}")]
    MissingField {
        /// JSON pointer to the absent field.
        path: String,
    },

    /// A required path exists but holds a value of the wrong kind.
    #[error("field at {path} is not a {expected}")]
    WrongKind {
        /// JSON pointer to the offending field.
        path: String,
        /// The kind the rule expected ("string", "object", "array").
        expected: &'static str,
    },
}

impl DocumentError {
    /// The JSON pointer the failure refers to.
    pub fn path(&self) -> &str {
        match self {
            DocumentError::MissingField { path } => path,
            DocumentError::WrongKind { path, .. } => path,
        }
    }
}

/// Fault raised by a read-only collaborator during validation.
///
/// These are genuinely exceptional conditions (network failure, malformed
/// collaborator response), not rule violations, and are returned as `Err`
/// from entry points that consult collaborators.
#[derive(Error, Debug)]
pub enum CollaboratorFault {
    /// The name-reservation service could not be queried.
    #[error("name reservation lookup failed for {nr_number}: {reason}")]
    ReservationLookup {
        /// The reservation number that was being queried.
        nr_number: String,
        /// Collaborator-supplied failure description.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_error_exposes_path() {
        let err = DocumentError::MissingField {
            path: "/filing/header".to_string(),
        };
        assert_eq!(err.path(), "/filing/header");

        let err = DocumentError::WrongKind {
            path: "/filing/parties".to_string(),
            expected: "array",
        };
        assert_eq!(err.path(), "/filing/parties");
    }

    #[test]
    fn collaborator_fault_display_names_reservation() {
        let fault = CollaboratorFault::ReservationLookup {
            nr_number: "NR 1234567".to_string(),
            reason: "connection refused".to_string(),
        };
        let msg = format!("{fault}");
        assert!(msg.contains("NR 1234567"));
        assert!(msg.contains("connection refused"));
    }
}
