//! # Validation Issues & Error Envelope
//!
//! A [`ValidationIssue`] is one field-level rule violation: a translatable
//! message plus an optional JSON pointer into the filing document. Issues
//! are collected in insertion order and never deduplicated.
//!
//! The [`ErrorEnvelope`] is the sole failure output of a validation pass:
//! an HTTP-style status code (always 400 for rule violations) and the
//! ordered issue list. A clean pass produces no envelope at all.

use serde::{Deserialize, Serialize};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Human-readable, translated message. Opaque to callers — message
    /// bodies vary by locale and must not be matched as constants.
    pub error: String,
    /// JSON pointer to the offending field, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ValidationIssue {
    /// An issue with no document location.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            path: None,
        }
    }

    /// An issue anchored at a document path.
    pub fn at(error: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            path: Some(path.into()),
        }
    }
}

/// The aggregate failure response for one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// HTTP-style status code. Rule violations always use 400.
    pub status: u16,
    /// Ordered, non-empty list of issues.
    pub errors: Vec<ValidationIssue>,
}

impl ErrorEnvelope {
    /// Wrap a non-empty issue list in a 400 envelope.
    pub fn bad_request(errors: Vec<ValidationIssue>) -> Self {
        Self { status: 400, errors }
    }

    /// Wrap the issue list only if it is non-empty.
    ///
    /// This is the aggregation step every validator ends with: an empty
    /// list is a clean pass, not an empty envelope.
    pub fn from_issues(errors: Vec<ValidationIssue>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self::bad_request(errors))
        }
    }
}
