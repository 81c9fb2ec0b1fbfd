//! # Validation Context & Collaborator Seams
//!
//! A validation pass is a pure function over the filing document plus
//! read-only lookups. Everything a rule may consult lives in the
//! [`ValidationContext`]: the jurisdiction policy, the validation-time
//! clock, and the external collaborators behind trait objects.
//!
//! Collaborators are black boxes with narrow contracts:
//!
//! - [`FilingRepository`] — fetch a previously accepted filing by id.
//! - [`NameReservationService`] — query a name reservation and expose its
//!   consumability state and approved name.
//! - [`CommonRules`] — the registry's shared sub-validators (court order,
//!   PDF reference, party name, share structure, name request), each of
//!   which takes a document fragment plus context and returns zero or more
//!   issues.

use chrono::{DateTime, Utc};
use serde_json::Value;

use breg_core::{
    CollaboratorFault, FilingDocument, JurisdictionPolicy, LegalType, ValidationIssue,
};

use crate::country::CountryResolver;

/// Which filing the role rules are being applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilingKind {
    /// A new incorporation application.
    IncorporationApplication,
    /// A correction of a previously accepted incorporation application.
    Correction,
}

impl FilingKind {
    /// The filing-type key used in document paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IncorporationApplication => "incorporationApplication",
            Self::Correction => "correction",
        }
    }
}

/// A previously accepted filing fetched from the registry.
#[derive(Debug, Clone)]
pub struct StoredFiling {
    document: FilingDocument,
}

impl StoredFiling {
    /// Wrap a stored filing's JSON tree.
    pub fn new(document: FilingDocument) -> Self {
        Self { document }
    }

    /// The stored filing document.
    pub fn document(&self) -> &FilingDocument {
        &self.document
    }
}

/// Read-only lookup of previously accepted filings.
pub trait FilingRepository {
    /// Fetch a filing by its opaque identifier, or `None` if unknown.
    fn find_by_id(&self, filing_id: &str) -> Option<StoredFiling>;
}

/// A name reservation record returned by the reservation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameReservation {
    /// Whether the reservation is in a consumable (approved or
    /// conditionally approved) state.
    pub is_consumable: bool,
    /// The legal name approved on the reservation, if any.
    pub approved_name: Option<String>,
}

/// Read-only query interface to the external name-reservation service.
pub trait NameReservationService {
    /// Look up a reservation by number.
    ///
    /// # Errors
    ///
    /// [`CollaboratorFault::ReservationLookup`] when the service cannot be
    /// queried. The fault is surfaced through the validation entry point's
    /// `Result` rather than escaping as a panic.
    fn query(&self, nr_number: &str) -> Result<NameReservation, CollaboratorFault>;
}

/// The registry's shared sub-validators.
///
/// Each method is an independently specified unit; this validator only
/// forwards document fragments and merges the returned issues.
pub trait CommonRules {
    /// Validate a court order record found at `path`.
    fn validate_court_order(&self, path: &str, court_order: &Value) -> Vec<ValidationIssue>;

    /// Validate a stored-document reference (existence, format, page count
    /// are this collaborator's concern).
    fn validate_pdf(&self, file_key: &str, path: &str) -> Vec<ValidationIssue>;

    /// Validate one party's name fields. Enforces legacy first/middle-name
    /// length limits required for downstream system compatibility.
    fn validate_party_name(
        &self,
        legal_type: LegalType,
        party: &Value,
        party_path: &str,
    ) -> Vec<ValidationIssue>;

    /// Validate the share structure of a share-capital filing.
    fn validate_share_structure(
        &self,
        filing: &FilingDocument,
        filing_type: &str,
    ) -> Vec<ValidationIssue>;

    /// Validate the name-request section of a filing.
    fn validate_name_request(
        &self,
        filing: &FilingDocument,
        legal_type: LegalType,
        filing_type: &str,
    ) -> Vec<ValidationIssue>;
}

/// Everything a validation pass reads besides the filing itself.
///
/// The context is assembled once per pass and handed by reference into
/// each rule; nothing in it is mutated.
pub struct ValidationContext<'a> {
    /// Jurisdiction rule parameters.
    pub policy: &'a JurisdictionPolicy,
    /// The validation-time wall clock, UTC. Injected so a pass is
    /// deterministic under test.
    pub now: DateTime<Utc>,
    /// Lookup of previously accepted filings.
    pub filings: &'a dyn FilingRepository,
    /// Name-reservation service.
    pub reservations: &'a dyn NameReservationService,
    /// Shared sub-validators.
    pub shared: &'a dyn CommonRules,
    /// Fuzzy country-name resolver.
    pub countries: CountryResolver,
}

impl<'a> ValidationContext<'a> {
    /// Assemble a context with the current UTC time as the clock.
    pub fn new(
        policy: &'a JurisdictionPolicy,
        filings: &'a dyn FilingRepository,
        reservations: &'a dyn NameReservationService,
        shared: &'a dyn CommonRules,
    ) -> Self {
        Self::at(Utc::now(), policy, filings, reservations, shared)
    }

    /// Assemble a context with an explicit clock instant.
    pub fn at(
        now: DateTime<Utc>,
        policy: &'a JurisdictionPolicy,
        filings: &'a dyn FilingRepository,
        reservations: &'a dyn NameReservationService,
        shared: &'a dyn CommonRules,
    ) -> Self {
        Self {
            policy,
            now,
            filings,
            reservations,
            shared,
            countries: CountryResolver::new(),
        }
    }
}
