//! # Correction of an Incorporation Application
//!
//! A correction amends a previously accepted incorporation application.
//! [`validate_correction`] fetches the corrected filing from the registry
//! and applies the correction-specific rules:
//!
//! - the effective date is immutable under correction;
//! - a changed name-request number must point at a consumable reservation,
//!   is only allowed for benefit companies, and must carry the same legal
//!   name the correction declares.
//!
//! A failed reservation lookup is not a rule violation; it surfaces as a
//! typed [`CollaboratorFault`] through the entry point's `Result`.

use breg_core::{CollaboratorFault, ErrorEnvelope, FilingDocument, LegalType, ValidationIssue};

use crate::context::{StoredFiling, ValidationContext};
use crate::i18n::translate;
use crate::incorporation::value_text;

const CORRECTED_FILING_ID_PATH: &str = "/filing/correction/correctedFilingId";
const EFFECTIVE_DATE_PATH: &str = "/filing/header/effectiveDate";
const NR_NUMBER_PATH: &str = "/filing/incorporationApplication/nameRequest/nrNumber";
const NR_LEGAL_TYPE_PATH: &str = "/filing/incorporationApplication/nameRequest/legalType";
const NR_LEGAL_NAME_PATH: &str = "/filing/incorporationApplication/nameRequest/legalName";

/// Validate a correction of an incorporation application.
///
/// Returns `Ok(None)` for a clean pass, `Ok(Some(envelope))` when rules
/// are violated, and `Err` when the name-reservation service could not be
/// consulted.
pub fn validate_correction(
    doc: &FilingDocument,
    ctx: &ValidationContext<'_>,
) -> Result<Option<ErrorEnvelope>, CollaboratorFault> {
    let corrected_filing = doc
        .get(CORRECTED_FILING_ID_PATH)
        .map(value_text)
        .and_then(|id| ctx.filings.find_by_id(&id));

    // Without the prior filing there is nothing to validate against.
    let Some(corrected_filing) = corrected_filing else {
        return Ok(Some(ErrorEnvelope::bad_request(vec![ValidationIssue::new(
            translate("Missing the id of the filing being corrected."),
        )])));
    };

    let mut msg = Vec::new();
    msg.extend(validate_correction_name_request(doc, &corrected_filing, ctx)?);
    msg.extend(validate_correction_effective_date(doc, &corrected_filing));

    tracing::debug!(issues = msg.len(), "correction validated");
    Ok(ErrorEnvelope::from_issues(msg))
}

/// Effective dates cannot be changed in a correction.
fn validate_correction_effective_date(
    doc: &FilingDocument,
    corrected_filing: &StoredFiling,
) -> Option<ValidationIssue> {
    let new_effective_date = doc.get_str(EFFECTIVE_DATE_PATH)?;
    if corrected_filing.document().get_str(EFFECTIVE_DATE_PATH) != Some(new_effective_date) {
        return Some(ValidationIssue::new(translate(
            "The effective date of a filing cannot be changed in a correction.",
        )));
    }
    None
}

/// Rules for correcting the name request.
///
/// A no-op when the reservation number is unchanged. A changed number must
/// reference a consumable reservation whose approved name matches the
/// correction's declared legal name, and only benefit companies may change
/// their name request this way.
fn validate_correction_name_request(
    doc: &FilingDocument,
    corrected_filing: &StoredFiling,
    ctx: &ValidationContext<'_>,
) -> Result<Vec<ValidationIssue>, CollaboratorFault> {
    let nr_number = corrected_filing.document().get_str(NR_NUMBER_PATH);
    let new_nr_number = doc.get_str(NR_NUMBER_PATH);
    if nr_number == new_nr_number {
        return Ok(Vec::new());
    }

    let mut msg = Vec::new();

    // A removed number still queries as the empty string; the service
    // reports it non-consumable.
    let reservation = ctx.reservations.query(new_nr_number.unwrap_or_default())?;
    if !reservation.is_consumable {
        msg.push(ValidationIssue::at(
            translate("Correction of Name Request is not approved."),
            NR_NUMBER_PATH,
        ));
    }

    let legal_type = doc
        .get_str(NR_LEGAL_TYPE_PATH)
        .and_then(|code| code.parse::<LegalType>().ok());
    if legal_type != Some(LegalType::BenefitCompany) {
        msg.push(ValidationIssue::at(
            translate("Correction of Name Request is not valid for this type."),
            NR_LEGAL_TYPE_PATH,
        ));
    }

    let legal_name = doc.get_str(NR_LEGAL_NAME_PATH);
    if reservation.approved_name.as_deref() != legal_name {
        msg.push(ValidationIssue::at(
            translate("Correction of Name Request has a different legal name."),
            NR_LEGAL_NAME_PATH,
        ));
    }

    Ok(msg)
}
