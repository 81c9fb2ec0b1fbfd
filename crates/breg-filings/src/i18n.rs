//! # Message Translation
//!
//! Every human-readable rule message passes through [`translate`] before it
//! is recorded on a validation issue. The default locale ships an empty
//! catalog, so messages pass through unchanged; deployments with a locale
//! catalog substitute translated bodies here.
//!
//! Callers must treat message bodies as opaque translatable strings —
//! matching on message text couples a caller to one locale.

use std::collections::HashMap;
use std::sync::OnceLock;

fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    // Default locale: identity. Entries are (message, translation) pairs.
    CATALOG.get_or_init(HashMap::new)
}

/// Translate a message body for the active locale.
pub fn translate(message: &str) -> String {
    match catalog().get(message) {
        Some(translated) => (*translated).to_string(),
        None => message.to_string(),
    }
}

/// Substitute successive `%s` placeholders in a translated template.
///
/// Catalog keys keep their placeholders so one entry covers every
/// interpolated value; substitution happens after lookup.
pub fn fill(template: String, args: &[&str]) -> String {
    let mut out = template;
    for arg in args {
        out = out.replacen("%s", arg, 1);
    }
    out
}
