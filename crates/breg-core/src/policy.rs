//! # Jurisdiction Policy
//!
//! The jurisdiction-specific constants that parameterize filing rules:
//! the in-jurisdiction region and country codes, the per-legal-type
//! minimum-director table, the effective-date window, and the fuzzy
//! country-match threshold.
//!
//! The policy is an explicit configuration struct constructed once at
//! process start and passed by reference into each rule. It is never
//! mutated after construction; there are no module-level globals.

use std::collections::BTreeMap;

use chrono::Duration;

use crate::legal_type::LegalType;

/// Immutable rule parameters for one jurisdiction.
#[derive(Debug, Clone)]
pub struct JurisdictionPolicy {
    /// Administrative region code every filing address must carry.
    pub region_code: String,
    /// ISO 3166-1 alpha-2 country code every filing address must resolve to.
    pub country_code: String,
    /// Minimum director count per legal type. Types absent from the table
    /// require zero directors.
    pub min_directors: BTreeMap<LegalType, u32>,
    /// Director floor for cooperative associations, applied regardless of
    /// the minimum-director table.
    pub cooperative_min_directors: u32,
    /// How far in the future an effective date must at least be.
    pub effective_date_min_lead: Duration,
    /// How far in the future an effective date may at most be.
    pub effective_date_max_lead: Duration,
    /// Minimum fuzzy-match score for country-name resolution.
    pub country_match_threshold: f64,
}

impl JurisdictionPolicy {
    /// The British Columbia incorporation profile.
    pub fn british_columbia() -> Self {
        let mut min_directors = BTreeMap::new();
        min_directors.insert(LegalType::BenefitCompany, 1);
        min_directors.insert(LegalType::Company, 1);
        min_directors.insert(LegalType::UnlimitedLiability, 1);
        min_directors.insert(LegalType::CommunityContribution, 3);

        Self {
            region_code: "BC".to_string(),
            country_code: "CA".to_string(),
            min_directors,
            cooperative_min_directors: 3,
            effective_date_min_lead: Duration::minutes(2),
            effective_date_max_lead: Duration::days(10),
            country_match_threshold: 0.7,
        }
    }

    /// Minimum director count for a legal type; zero for unlisted types.
    pub fn min_directors(&self, legal_type: LegalType) -> u32 {
        self.min_directors.get(&legal_type).copied().unwrap_or(0)
    }
}

impl Default for JurisdictionPolicy {
    fn default() -> Self {
        Self::british_columbia()
    }
}
