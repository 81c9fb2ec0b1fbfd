//! Shared fixtures and stub collaborators for the rule-set tests.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use breg_core::{CollaboratorFault, FilingDocument, JurisdictionPolicy, LegalType, ValidationIssue};

use crate::context::{
    CommonRules, FilingRepository, NameReservation, NameReservationService, StoredFiling,
    ValidationContext,
};

/// Shared sub-validators that accept everything.
pub(crate) struct NoopRules;

impl CommonRules for NoopRules {
    fn validate_court_order(&self, _path: &str, _court_order: &Value) -> Vec<ValidationIssue> {
        Vec::new()
    }

    fn validate_pdf(&self, _file_key: &str, _path: &str) -> Vec<ValidationIssue> {
        Vec::new()
    }

    fn validate_party_name(
        &self,
        _legal_type: LegalType,
        _party: &Value,
        _party_path: &str,
    ) -> Vec<ValidationIssue> {
        Vec::new()
    }

    fn validate_share_structure(
        &self,
        _filing: &FilingDocument,
        _filing_type: &str,
    ) -> Vec<ValidationIssue> {
        Vec::new()
    }

    fn validate_name_request(
        &self,
        _filing: &FilingDocument,
        _legal_type: LegalType,
        _filing_type: &str,
    ) -> Vec<ValidationIssue> {
        Vec::new()
    }
}

/// A repository with no stored filings.
pub(crate) struct NoFilings;

impl FilingRepository for NoFilings {
    fn find_by_id(&self, _filing_id: &str) -> Option<StoredFiling> {
        None
    }
}

/// A repository backed by an in-memory map.
pub(crate) struct MapFilings(pub HashMap<String, StoredFiling>);

impl MapFilings {
    pub(crate) fn with(filing_id: &str, document: Value) -> Self {
        let mut map = HashMap::new();
        map.insert(
            filing_id.to_string(),
            StoredFiling::new(FilingDocument::new(document)),
        );
        Self(map)
    }
}

impl FilingRepository for MapFilings {
    fn find_by_id(&self, filing_id: &str) -> Option<StoredFiling> {
        self.0.get(filing_id).cloned()
    }
}

/// A reservation service with a scripted response.
pub(crate) struct StubReservations {
    pub is_consumable: bool,
    pub approved_name: Option<&'static str>,
    pub unavailable: bool,
}

impl NameReservationService for StubReservations {
    fn query(&self, nr_number: &str) -> Result<NameReservation, CollaboratorFault> {
        if self.unavailable {
            return Err(CollaboratorFault::ReservationLookup {
                nr_number: nr_number.to_string(),
                reason: "service unavailable".to_string(),
            });
        }
        Ok(NameReservation {
            is_consumable: self.is_consumable,
            approved_name: self.approved_name.map(str::to_string),
        })
    }
}

pub(crate) static NO_FILINGS: NoFilings = NoFilings;

pub(crate) static APPROVED_RESERVATIONS: StubReservations = StubReservations {
    is_consumable: true,
    approved_name: None,
    unavailable: false,
};

/// A fixed validation-time clock so window checks are reproducible.
pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 15, 17, 0, 0).unwrap()
}

/// A context over the default policy, a fixed clock, and stub collaborators.
pub(crate) fn new_context<'a>(
    policy: &'a JurisdictionPolicy,
    shared: &'a dyn CommonRules,
) -> ValidationContext<'a> {
    ValidationContext::at(fixed_now(), policy, &NO_FILINGS, &APPROVED_RESERVATIONS, shared)
}

fn bc_address() -> Value {
    json!({
        "streetAddress": "1234 Main St",
        "addressCity": "Victoria",
        "addressRegion": "BC",
        "addressCountry": "CA",
        "postalCode": "V8W 9V9"
    })
}

fn party(id: u32, roles: &[&str]) -> Value {
    json!({
        "officer": {"id": id, "firstName": "Jane", "lastName": "Doe", "partyType": "person"},
        "roles": roles.iter().map(|r| json!({"roleType": r})).collect::<Vec<_>>(),
        "mailingAddress": bc_address()
    })
}

/// A benefit-company incorporation application that passes every rule.
pub(crate) fn valid_ben_filing() -> Value {
    json!({
        "filing": {
            "header": {"name": "incorporationApplication"},
            "incorporationApplication": {
                "nameRequest": {
                    "legalType": "BEN",
                    "nrNumber": "NR 1234567",
                    "legalName": "Example Benefit Company Inc."
                },
                "offices": {
                    "registeredOffice": {
                        "deliveryAddress": bc_address(),
                        "mailingAddress": bc_address()
                    },
                    "recordsOffice": {
                        "deliveryAddress": bc_address(),
                        "mailingAddress": bc_address()
                    }
                },
                "parties": [party(1, &["Completing Party", "Incorporator", "Director"])]
            }
        }
    })
}

/// A cooperative incorporation application that passes every rule.
pub(crate) fn coop_filing() -> Value {
    json!({
        "filing": {
            "header": {"name": "incorporationApplication"},
            "incorporationApplication": {
                "nameRequest": {
                    "legalType": "CP",
                    "nrNumber": "NR 7654321",
                    "legalName": "Example Housing Co-operative"
                },
                "offices": {
                    "registeredOffice": {
                        "deliveryAddress": bc_address(),
                        "mailingAddress": bc_address()
                    }
                },
                "parties": [
                    party(1, &["Completing Party", "Director"]),
                    party(2, &["Director"]),
                    party(3, &["Director"])
                ],
                "cooperative": {
                    "cooperativeAssociationType": "CP",
                    "rulesFileKey": "rules-file-key",
                    "memorandumFileKey": "memorandum-file-key"
                }
            }
        }
    })
}
