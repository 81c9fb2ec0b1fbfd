//! # Incorporation Application Validation
//!
//! The rule set that gates acceptance of an incorporation application
//! filing. [`validate_incorporation_application`] is the entry point: it
//! short-circuits on an absent document or legal type, then runs every
//! rule in a fixed order and aggregates their issues — a later rule always
//! runs even when an earlier one found violations.
//!
//! ## Rule Order
//!
//! offices → roles → party names → party mailing addresses → name request
//! → (share structure for share-capital types | cooperative documents for
//! cooperatives) → effective date → court order.
//!
//! ## Error Taxonomy
//!
//! A structural failure (a rule's required path is absent) terminates that
//! rule only and is reported as an issue at the absent path. Domain
//! violations accumulate. Country-resolution failures convert to the
//! in-jurisdiction country violation and never propagate.

use serde_json::Value;

use breg_core::{DocumentError, ErrorEnvelope, FilingDocument, JurisdictionPolicy, LegalType,
    ValidationIssue};

use crate::context::{FilingKind, ValidationContext};
use crate::i18n::{fill, translate};

/// Pointer to the legal type on an incorporation application.
pub const LEGAL_TYPE_PATH: &str = "/filing/incorporationApplication/nameRequest/legalType";

const COOPERATIVE_PATH: &str = "/filing/incorporationApplication/cooperative";
const COURT_ORDER_PATH: &str = "/filing/incorporationApplication/courtOrder";
const EFFECTIVE_DATE_PATH: &str = "/filing/header/effectiveDate";

/// Validate an incorporation application filing.
///
/// Returns `None` for a clean pass, or a 400 [`ErrorEnvelope`] carrying
/// every violation found, in rule order.
pub fn validate_incorporation_application(
    doc: &FilingDocument,
    ctx: &ValidationContext<'_>,
) -> Option<ErrorEnvelope> {
    let kind = FilingKind::IncorporationApplication;

    if doc.is_empty() {
        return Some(ErrorEnvelope::bad_request(vec![ValidationIssue::new(
            translate("A valid filing is required."),
        )]));
    }

    // Every remaining rule branches on legal type; nothing else can run
    // meaningfully without it.
    let legal_type = match doc.get_str(LEGAL_TYPE_PATH) {
        None => {
            return Some(ErrorEnvelope::bad_request(vec![ValidationIssue::at(
                translate("Legal type is required."),
                LEGAL_TYPE_PATH,
            )]));
        }
        Some(code) => match code.parse::<LegalType>() {
            Ok(lt) => lt,
            Err(_) => {
                return Some(ErrorEnvelope::bad_request(vec![ValidationIssue::at(
                    translate("Legal type is invalid."),
                    LEGAL_TYPE_PATH,
                )]));
            }
        },
    };

    let mut msg = Vec::new();
    msg.extend(validate_offices(doc, ctx, kind));
    msg.extend(validate_roles(doc, ctx.policy, legal_type, kind));
    msg.extend(validate_parties_names(doc, ctx, legal_type, kind));
    msg.extend(validate_parties_mailing_address(doc, ctx.policy, legal_type, kind));
    msg.extend(ctx.shared.validate_name_request(doc, legal_type, kind.as_str()));

    if legal_type.is_share_capital() {
        msg.extend(ctx.shared.validate_share_structure(doc, kind.as_str()));
    } else {
        msg.extend(validate_cooperative_documents(doc, ctx));
    }

    msg.extend(validate_effective_date(doc, ctx));
    msg.extend(validate_court_order(doc, ctx));

    tracing::debug!(
        legal_type = %legal_type,
        issues = msg.len(),
        "incorporation application validated"
    );
    ErrorEnvelope::from_issues(msg)
}

/// Report a structural lookup failure as an issue at the absent path.
fn structural(err: &DocumentError) -> ValidationIssue {
    ValidationIssue::at(
        fill(translate("%s is required."), &[err.path()]),
        err.path(),
    )
}

/// Render a document value for inclusion in a message or path segment.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validate the office mapping: only the two allowed office roles may
/// appear, and every address under an allowed role must be in-jurisdiction.
fn validate_offices(
    doc: &FilingDocument,
    ctx: &ValidationContext<'_>,
    kind: FilingKind,
) -> Vec<ValidationIssue> {
    let offices_path = format!("/filing/{}/offices", kind.as_str());
    let mut msg = Vec::new();

    let offices = match doc.require(&offices_path) {
        Ok(value) => match value.as_object() {
            Some(map) => map,
            None => {
                msg.push(structural(&DocumentError::WrongKind {
                    path: offices_path,
                    expected: "object",
                }));
                return msg;
            }
        },
        Err(err) => {
            msg.push(structural(&err));
            return msg;
        }
    };

    for (office, entries) in offices {
        if office == "registeredOffice" || office == "recordsOffice" {
            msg.extend(validate_office_addresses(entries, ctx, kind, office));
        } else {
            msg.push(ValidationIssue::at(
                fill(
                    translate(
                        "Invalid office %s. Only registeredOffice and recordsOffice are allowed.",
                    ),
                    &[office.as_str()],
                ),
                offices_path.clone(),
            ));
        }
    }

    msg
}

/// Validate every address entry under one office role.
fn validate_office_addresses(
    entries: &Value,
    ctx: &ValidationContext<'_>,
    kind: FilingKind,
    office: &str,
) -> Vec<ValidationIssue> {
    let mut msg = Vec::new();
    let Some(entries) = entries.as_object() else {
        return msg;
    };

    for (address_type, address) in entries {
        let region = address.get("addressRegion").and_then(Value::as_str);
        if region != Some(ctx.policy.region_code.as_str()) {
            msg.push(ValidationIssue::at(
                fill(
                    translate("Address Region must be '%s'."),
                    &[ctx.policy.region_code.as_str()],
                ),
                format!(
                    "/filing/{}/offices/{office}/{address_type}/addressRegion",
                    kind.as_str()
                ),
            ));
        }

        // An absent country, an unresolvable one, and one that resolves
        // outside the jurisdiction all read as the same violation.
        let resolved = address
            .get("addressCountry")
            .and_then(Value::as_str)
            .and_then(|country| {
                match ctx
                    .countries
                    .resolve_alpha2(country, ctx.policy.country_match_threshold)
                {
                    Ok(code) => Some(code),
                    Err(err) => {
                        tracing::warn!(%err, office, "country did not resolve");
                        None
                    }
                }
            });
        if resolved != Some(ctx.policy.country_code.as_str()) {
            msg.push(ValidationIssue::at(
                fill(
                    translate("Address Country must be '%s'."),
                    &[ctx.policy.country_code.as_str()],
                ),
                format!(
                    "/filing/{}/offices/{office}/{address_type}/addressCountry",
                    kind.as_str()
                ),
            ));
        }
    }

    msg
}

/// Validate the role counts across all parties.
///
/// Public because the rule is shared: a correction of an incorporation
/// application re-applies it with [`FilingKind::Correction`], which swaps
/// in the correction-specific completing-party and incorporator branches.
pub fn validate_roles(
    doc: &FilingDocument,
    policy: &JurisdictionPolicy,
    legal_type: LegalType,
    kind: FilingKind,
) -> Vec<ValidationIssue> {
    let ft = kind.as_str();
    let parties_path = format!("/filing/{ft}/parties");
    let mut msg = Vec::new();

    let parties = match doc.require_array(&parties_path) {
        Ok(parties) => parties,
        Err(err) => {
            msg.push(structural(&err));
            return msg;
        }
    };

    let mut completing_party_count: u32 = 0;
    let mut incorporator_count: u32 = 0;
    let mut director_count: u32 = 0;

    for party in parties {
        let Some(roles) = party.get("roles").and_then(Value::as_array) else {
            continue;
        };
        for role in roles {
            match role.get("roleType").and_then(Value::as_str) {
                Some("Completing Party") => completing_party_count += 1,
                Some("Incorporator") => incorporator_count += 1,
                Some("Director") => director_count += 1,
                _ => {}
            }
        }
    }

    let roles_path = format!("/filing/{ft}/parties/roles");
    let correction_type = doc.get_str(&format!("/filing/{ft}/type"));

    match kind {
        FilingKind::IncorporationApplication => {
            exactly_one_completing_party(completing_party_count, &roles_path, &mut msg);
        }
        FilingKind::Correction if correction_type == Some("CLIENT") => {
            exactly_one_completing_party(completing_party_count, &roles_path, &mut msg);
        }
        FilingKind::Correction if correction_type == Some("STAFF") => {
            if completing_party_count != 0 {
                msg.push(ValidationIssue::at(
                    translate("Should not provide completing party when correction type is STAFF"),
                    roles_path.clone(),
                ));
            }
        }
        FilingKind::Correction => {}
    }

    if legal_type == LegalType::Cooperative {
        if incorporator_count > 0 {
            msg.push(ValidationIssue::at(
                translate("Incorporator is an invalid party role"),
                roles_path.clone(),
            ));
        }
        if director_count < policy.cooperative_min_directors {
            msg.push(ValidationIssue::at(
                translate("Must have a minimum of three Directors"),
                roles_path,
            ));
        }
    } else {
        let min_director_count = policy.min_directors(legal_type);
        match kind {
            FilingKind::IncorporationApplication => {
                if incorporator_count < 1 {
                    msg.push(ValidationIssue::at(
                        translate("Must have a minimum of one Incorporator"),
                        roles_path.clone(),
                    ));
                }
            }
            FilingKind::Correction => {
                if incorporator_count > 0 {
                    msg.push(ValidationIssue::at(
                        translate("Cannot correct Incorporator role"),
                        roles_path.clone(),
                    ));
                }
            }
        }
        if director_count < min_director_count {
            let minimum = min_director_count.to_string();
            msg.push(ValidationIssue::at(
                fill(
                    translate("Must have a minimum of %s Director"),
                    &[minimum.as_str()],
                ),
                roles_path,
            ));
        }
    }

    msg
}

fn exactly_one_completing_party(count: u32, roles_path: &str, msg: &mut Vec<ValidationIssue>) {
    if count == 0 {
        msg.push(ValidationIssue::at(
            translate("Must have a minimum of one completing party"),
            roles_path,
        ));
    } else if count > 1 {
        msg.push(ValidationIssue::at(
            translate("Must have a maximum of one completing party"),
            roles_path,
        ));
    }
}

/// Delegate per-party name checks to the shared party-name rule.
fn validate_parties_names(
    doc: &FilingDocument,
    ctx: &ValidationContext<'_>,
    legal_type: LegalType,
    kind: FilingKind,
) -> Vec<ValidationIssue> {
    let party_path = format!("/filing/{}/parties", kind.as_str());
    let mut msg = Vec::new();

    let parties = match doc.require_array(&party_path) {
        Ok(parties) => parties,
        Err(err) => {
            msg.push(structural(&err));
            return msg;
        }
    };

    for party in parties {
        msg.extend(ctx.shared.validate_party_name(legal_type, party, &party_path));
    }

    msg
}

/// Validate party mailing addresses: no null fields, and for cooperatives
/// an in-jurisdiction floor and majority.
fn validate_parties_mailing_address(
    doc: &FilingDocument,
    policy: &JurisdictionPolicy,
    legal_type: LegalType,
    kind: FilingKind,
) -> Vec<ValidationIssue> {
    let ft = kind.as_str();
    let parties_path = format!("/filing/{ft}/parties");
    let mut msg = Vec::new();

    let parties = match doc.require_array(&parties_path) {
        Ok(parties) => parties,
        Err(err) => {
            msg.push(structural(&err));
            return msg;
        }
    };

    let mut in_region_count: u32 = 0;
    let mut in_country_count: u32 = 0;
    let mut with_country_count: u32 = 0;

    for party in parties {
        let officer_id = party
            .pointer("/officer/id")
            .map(value_text)
            .unwrap_or_default();

        if let Some(mailing_address) = party.get("mailingAddress").and_then(Value::as_object) {
            for (field, value) in mailing_address {
                if value.is_null() {
                    msg.push(ValidationIssue::at(
                        fill(
                            translate("Person %s: Mailing address %s %s is invalid"),
                            &[officer_id.as_str(), field.as_str(), "null"],
                        ),
                        format!("/filing/{ft}/parties/{officer_id}/mailingAddress/{field}"),
                    ));
                }
            }
        }

        let region = party
            .pointer("/mailingAddress/addressRegion")
            .and_then(Value::as_str);
        if region == Some(policy.region_code.as_str()) {
            in_region_count += 1;
        }

        if let Some(country) = party
            .pointer("/mailingAddress/addressCountry")
            .and_then(Value::as_str)
        {
            with_country_count += 1;
            if country == policy.country_code {
                in_country_count += 1;
            }
        }
    }

    if legal_type == LegalType::Cooperative {
        let mailing_address_path = format!("/filing/{ft}/parties/mailingAddress");
        if in_region_count < 1 {
            msg.push(ValidationIssue::at(
                fill(
                    translate("Must have minimum of one %s mailing address"),
                    &[policy.region_code.as_str()],
                ),
                mailing_address_path.clone(),
            ));
        }

        // Strict majority. With no party carrying a country at all the
        // majority cannot be met, so the rule fails rather than faulting
        // on a zero denominator.
        let has_majority = with_country_count > 0 && 2 * in_country_count > with_country_count;
        if !has_majority {
            msg.push(ValidationIssue::at(
                translate("Must have majority of mailing addresses in Canada"),
                mailing_address_path,
            ));
        }
    }

    msg
}

/// Validate the optional effective date: RFC 3339 format and the
/// jurisdiction's future window. A parse failure is terminal for this
/// rule; the window bounds are checked independently of each other.
fn validate_effective_date(
    doc: &FilingDocument,
    ctx: &ValidationContext<'_>,
) -> Vec<ValidationIssue> {
    let Some(raw) = doc.get_str(EFFECTIVE_DATE_PATH) else {
        return Vec::new();
    };

    let effective_date = match parse_effective_date(raw) {
        Some(parsed) => parsed,
        None => {
            return vec![ValidationIssue::new(fill(
                translate("%s is an invalid ISO format for effective_date."),
                &[raw],
            ))];
        }
    };

    let mut msg = Vec::new();
    if effective_date < ctx.now + ctx.policy.effective_date_min_lead {
        msg.push(ValidationIssue::new(translate(
            "Invalid Datetime, effective date must be a minimum of 2 minutes ahead.",
        )));
    }
    if effective_date > ctx.now + ctx.policy.effective_date_max_lead {
        msg.push(ValidationIssue::new(translate(
            "Invalid Datetime, effective date must be a maximum of 10 days ahead.",
        )));
    }
    msg
}

/// Parse an effective date: RFC 3339, or an offset-less ISO 8601
/// timestamp read as UTC. Filings have historically carried both forms.
fn parse_effective_date(raw: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&chrono::Utc));
    }
    raw.parse::<chrono::NaiveDateTime>()
        .ok()
        .map(|naive| naive.and_utc())
}

/// Validate the cooperative sub-section: it must be present, and both
/// document references must pass the shared PDF rule.
fn validate_cooperative_documents(
    doc: &FilingDocument,
    ctx: &ValidationContext<'_>,
) -> Vec<ValidationIssue> {
    if doc.get_object(COOPERATIVE_PATH).is_none() {
        return vec![ValidationIssue::at(
            translate("cooperative data is missing in incorporationApplication."),
            COOPERATIVE_PATH,
        )];
    }

    let mut msg = Vec::new();
    for key in ["rulesFileKey", "memorandumFileKey"] {
        let path = format!("{COOPERATIVE_PATH}/{key}");
        match doc.require_str(&path) {
            Ok(file_key) => msg.extend(ctx.shared.validate_pdf(file_key, &path)),
            Err(err) => msg.push(structural(&err)),
        }
    }
    msg
}

/// Delegate an optional court order to the shared court-order rule.
fn validate_court_order(doc: &FilingDocument, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
    match doc.get(COURT_ORDER_PATH) {
        Some(court_order) => ctx.shared.validate_court_order(COURT_ORDER_PATH, court_order),
        None => Vec::new(),
    }
}
