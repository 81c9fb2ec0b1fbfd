//! # breg-filings — Filing Validation Rule Sets
//!
//! Business-rule validation for registry filings. The crate exposes two
//! entry points:
//!
//! - [`validate_incorporation_application`] — gate a new incorporation
//!   application: offices, roles, party names and mailing addresses, name
//!   request, share structure or cooperative documents, effective date,
//!   court order.
//! - [`validate_correction`] — gate a correction of a previously accepted
//!   incorporation application: effective-date immutability and
//!   name-request correction rules.
//!
//! Both are pure, synchronous functions over a [`breg_core::FilingDocument`]
//! plus a [`ValidationContext`] carrying the jurisdiction policy, the
//! validation-time clock, and the external collaborators behind trait
//! objects. A pass either returns a 400 [`breg_core::ErrorEnvelope`] with
//! every violation found, in rule order, or nothing at all.

pub mod context;
pub mod correction;
pub mod country;
pub mod i18n;
pub mod incorporation;

#[cfg(test)]
pub(crate) mod testing;

// Re-export primary types.
pub use context::{
    CommonRules, FilingKind, FilingRepository, NameReservation, NameReservationService,
    StoredFiling, ValidationContext,
};
pub use correction::validate_correction;
pub use country::{CountryLookupError, CountryResolver};
pub use incorporation::validate_incorporation_application;
