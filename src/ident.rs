//! Dart identifier and class-name sanitization.
//!
//! Key names are dot/hyphen-delimited ("app.title", "nav-bar.home"); Dart
//! getter names cannot contain either character, so both are mapped to `_`.
//! Distinct key names can collapse to the same identifier after sanitization
//! ("app.title" vs "app-title"); [`check_identifier_collisions`] detects this
//! before any code is generated rather than silently emitting duplicate
//! getters.

use std::collections::HashMap;

use crate::{error::Error, types::LanguageCode};

/// Maps a key name to a Dart getter name by replacing every `.` and `-` with
/// `_`. All other characters pass through unchanged.
///
/// Total and deterministic for any input; idempotent once no `.`/`-` remain.
/// Does not validate the result against Dart's identifier grammar: leading
/// digits and reserved words pass through (known limitation).
pub fn to_identifier(key_name: &str) -> String {
    key_name.replace(['.', '-'], "_")
}

/// Builds the Dart class name for a language code: first character
/// ASCII-uppercased, remainder unchanged, suffixed with `Localizations`.
///
/// `"en"` becomes `EnLocalizations`. Codes are ASCII by construction
/// ([`LanguageCode`] rejects anything else at ingestion).
pub fn to_class_name(code: &LanguageCode) -> String {
    let code = code.as_str();
    let mut chars = code.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    };
    format!("{}Localizations", capitalized)
}

/// Fails fast if two distinct key names sanitize to the same identifier.
///
/// Returns [`Error::DuplicateIdentifier`] naming both offending keys, keyed
/// on the first collision in iteration order.
pub fn check_identifier_collisions<'a, I>(key_names: I) -> Result<(), Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashMap<String, &str> = HashMap::new();
    for name in key_names {
        let identifier = to_identifier(name);
        if let Some(&first) = seen.get(&identifier) {
            if first != name {
                return Err(Error::DuplicateIdentifier {
                    identifier,
                    first_key: first.to_string(),
                    second_key: name.to_string(),
                });
            }
        } else {
            seen.insert(identifier, name);
        }
    }
    Ok(())
}
