//! # Legal Type — Single Source of Truth
//!
//! Defines the `LegalType` enum with the registry wire codes for every
//! entity type an incorporation application can create. This is the ONE
//! definition used across the validation stack. Every `match` on
//! `LegalType` must be exhaustive — adding an entity type forces every
//! rule that branches on it to handle the new type at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Entity types accepted on an incorporation application, with their
/// registry wire codes.
///
/// | Code | Entity type |
/// |------|-------------|
/// | BEN  | Benefit company |
/// | BC   | BC limited company |
/// | ULC  | Unlimited liability company |
/// | CC   | Community contribution company |
/// | CP   | Cooperative association |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LegalType {
    /// Benefit company ("BEN").
    BenefitCompany,
    /// BC limited company ("BC").
    Company,
    /// Unlimited liability company ("ULC").
    UnlimitedLiability,
    /// Community contribution company ("CC").
    CommunityContribution,
    /// Cooperative association ("CP").
    Cooperative,
}

impl LegalType {
    /// All legal types in canonical order.
    pub fn all() -> &'static [LegalType] {
        &[
            Self::BenefitCompany,
            Self::Company,
            Self::UnlimitedLiability,
            Self::CommunityContribution,
            Self::Cooperative,
        ]
    }

    /// The registry wire code for this legal type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BenefitCompany => "BEN",
            Self::Company => "BC",
            Self::UnlimitedLiability => "ULC",
            Self::CommunityContribution => "CC",
            Self::Cooperative => "CP",
        }
    }

    /// Whether this entity type is incorporated with share capital.
    ///
    /// Share-capital types carry a share structure in their filings;
    /// cooperatives carry rules and memorandum documents instead.
    pub fn is_share_capital(&self) -> bool {
        match self {
            Self::BenefitCompany
            | Self::Company
            | Self::UnlimitedLiability
            | Self::CommunityContribution => true,
            Self::Cooperative => false,
        }
    }
}

impl std::fmt::Display for LegalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a wire code is not a recognized legal type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized legal type code: {0}")]
pub struct UnknownLegalType(pub String);

impl FromStr for LegalType {
    type Err = UnknownLegalType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEN" => Ok(Self::BenefitCompany),
            "BC" => Ok(Self::Company),
            "ULC" => Ok(Self::UnlimitedLiability),
            "CC" => Ok(Self::CommunityContribution),
            "CP" => Ok(Self::Cooperative),
            other => Err(UnknownLegalType(other.to_string())),
        }
    }
}
