//! # Fuzzy Country Resolution
//!
//! Filing addresses carry free-text country values ("Canada", "CA", "CAN",
//! "canada "). Address rules need the ISO 3166-1 alpha-2 code, so this
//! module resolves a free-text value against a normalized-name index:
//! exact lookup over names, codes, and aliases first, then fuzzy scoring
//! (substring and token-overlap) against a configurable threshold.
//!
//! Resolution failure is an error value; the address rule converts it into
//! a domain violation, never a propagated fault.

use std::collections::HashMap;

use thiserror::Error;

/// A free-text country value could not be resolved to an alpha-2 code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no country matches {query:?}")]
pub struct CountryLookupError {
    /// The value that failed to resolve.
    pub query: String,
}

struct CountryEntry {
    name: &'static str,
    alpha2: &'static str,
    alpha3: &'static str,
    aliases: &'static [&'static str],
}

/// ISO 3166-1 subset covering the names seen on registry filings. The
/// resolver matches on official name, both codes, and common aliases.
static COUNTRIES: &[CountryEntry] = &[
    CountryEntry { name: "Canada", alpha2: "CA", alpha3: "CAN", aliases: &[] },
    CountryEntry {
        name: "United States",
        alpha2: "US",
        alpha3: "USA",
        aliases: &["United States of America", "America"],
    },
    CountryEntry {
        name: "United Kingdom",
        alpha2: "GB",
        alpha3: "GBR",
        aliases: &["Great Britain", "England", "Scotland", "Wales"],
    },
    CountryEntry { name: "Australia", alpha2: "AU", alpha3: "AUS", aliases: &[] },
    CountryEntry { name: "New Zealand", alpha2: "NZ", alpha3: "NZL", aliases: &[] },
    CountryEntry { name: "France", alpha2: "FR", alpha3: "FRA", aliases: &[] },
    CountryEntry { name: "Germany", alpha2: "DE", alpha3: "DEU", aliases: &["Deutschland"] },
    CountryEntry { name: "Italy", alpha2: "IT", alpha3: "ITA", aliases: &[] },
    CountryEntry { name: "Spain", alpha2: "ES", alpha3: "ESP", aliases: &[] },
    CountryEntry { name: "Netherlands", alpha2: "NL", alpha3: "NLD", aliases: &["Holland"] },
    CountryEntry { name: "Switzerland", alpha2: "CH", alpha3: "CHE", aliases: &[] },
    CountryEntry { name: "Sweden", alpha2: "SE", alpha3: "SWE", aliases: &[] },
    CountryEntry { name: "Norway", alpha2: "NO", alpha3: "NOR", aliases: &[] },
    CountryEntry { name: "Ireland", alpha2: "IE", alpha3: "IRL", aliases: &[] },
    CountryEntry { name: "Mexico", alpha2: "MX", alpha3: "MEX", aliases: &[] },
    CountryEntry { name: "Brazil", alpha2: "BR", alpha3: "BRA", aliases: &[] },
    CountryEntry { name: "India", alpha2: "IN", alpha3: "IND", aliases: &[] },
    CountryEntry { name: "China", alpha2: "CN", alpha3: "CHN", aliases: &["People's Republic of China"] },
    CountryEntry { name: "Hong Kong", alpha2: "HK", alpha3: "HKG", aliases: &[] },
    CountryEntry { name: "Singapore", alpha2: "SG", alpha3: "SGP", aliases: &[] },
    CountryEntry { name: "Japan", alpha2: "JP", alpha3: "JPN", aliases: &[] },
    CountryEntry {
        name: "South Korea",
        alpha2: "KR",
        alpha3: "KOR",
        aliases: &["Republic of Korea", "Korea"],
    },
    CountryEntry { name: "Philippines", alpha2: "PH", alpha3: "PHL", aliases: &[] },
    CountryEntry { name: "South Africa", alpha2: "ZA", alpha3: "ZAF", aliases: &[] },
];

/// Resolve free-text country values to alpha-2 codes.
///
/// The index maps every normalized name, code, and alias to a country;
/// queries that miss the index fall back to fuzzy scoring across names.
pub struct CountryResolver {
    index: HashMap<String, usize>,
}

impl CountryResolver {
    /// Build the resolver's normalized-name index.
    pub fn new() -> Self {
        let mut index = HashMap::new();
        for (idx, entry) in COUNTRIES.iter().enumerate() {
            index.insert(Self::normalize(entry.name), idx);
            index.insert(Self::normalize(entry.alpha2), idx);
            index.insert(Self::normalize(entry.alpha3), idx);
            for alias in entry.aliases {
                index.insert(Self::normalize(alias), idx);
            }
        }
        Self { index }
    }

    /// Normalize a string for matching: lowercase, strip punctuation,
    /// collapse whitespace.
    fn normalize(s: &str) -> String {
        let lower = s.to_lowercase();
        let cleaned: String = lower
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Fuzzy match score between a query and a country name (0.0 - 1.0).
    fn fuzzy_score(query: &str, target: &str) -> f64 {
        let q = Self::normalize(query);
        let t = Self::normalize(target);

        if q.is_empty() || t.is_empty() {
            return 0.0;
        }
        if q == t {
            return 1.0;
        }
        // Substring match (only if the query is meaningful length)
        if q.len() >= 3 && (t.contains(&q) || q.contains(&t)) {
            return 0.9;
        }
        // Token overlap (Jaccard similarity)
        let q_tokens: std::collections::HashSet<&str> = q.split_whitespace().collect();
        let t_tokens: std::collections::HashSet<&str> = t.split_whitespace().collect();
        let overlap = q_tokens.intersection(&t_tokens).count();
        let total = q_tokens.union(&t_tokens).count();
        if total > 0 {
            overlap as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Resolve a free-text country value to its alpha-2 code.
    ///
    /// Exact index hits win; otherwise the best fuzzy score at or above
    /// `threshold` is taken, with earlier table entries breaking ties.
    ///
    /// # Errors
    ///
    /// [`CountryLookupError`] when nothing scores at or above `threshold`.
    pub fn resolve_alpha2(&self, query: &str, threshold: f64) -> Result<&str, CountryLookupError> {
        let norm = Self::normalize(query);
        if let Some(&idx) = self.index.get(&norm) {
            return Ok(COUNTRIES[idx].alpha2);
        }
        // Dotted abbreviations ("U.S.A.") normalize to spaced letters;
        // collapsing the spaces recovers the plain code form.
        if let Some(&idx) = self.index.get(&norm.replace(' ', "")) {
            return Ok(COUNTRIES[idx].alpha2);
        }

        let mut best: Option<(usize, f64)> = None;
        for (idx, entry) in COUNTRIES.iter().enumerate() {
            let score = Self::fuzzy_score(query, entry.name);
            if score >= threshold && best.map_or(true, |(_, s)| score > s) {
                best = Some((idx, score));
            }
        }

        match best {
            Some((idx, _)) => Ok(COUNTRIES[idx].alpha2),
            None => Err(CountryLookupError {
                query: query.to_string(),
            }),
        }
    }
}

impl Default for CountryResolver {
    fn default() -> Self {
        Self::new()
    }
}
