//! Format-specific data organization.
//!
//! The three organizers join keys × languages into per-format intermediate
//! models. All of them share the placeholder policy: every exported artifact
//! carries a value for every (key, language) pair, substituting
//! `[<code>] <keyName>` when no translation exists. Structural completeness is
//! traded for translation completeness: a generated language file never has a
//! missing getter, a CSV row never has a short column.
//!
//! Duplicate (key, language) values in a malformed snapshot resolve to the
//! last one in iteration order, uniformly across all three formats. Values
//! whose language is not in the supplied language set are ignored.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::types::{Key, KeySummary, Language, LanguageCode, LocalizedEntry};

/// The synthesized stand-in value for a missing translation.
pub fn placeholder_value(code: &LanguageCode, key_name: &str) -> String {
    format!("[{}] {}", code, key_name)
}

/// Organized data for the Flutter export: one complete entry list per
/// language, plus the locale and key tables the base class generator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct FlutterExport {
    /// Language code → entries, one per key, in key order. Every list has the
    /// same length as `keys`.
    pub language_map: IndexMap<LanguageCode, Vec<LocalizedEntry>>,

    /// Language codes in the order languages were supplied. The first entry
    /// doubles as the runtime fallback locale of the generated code.
    pub supported_locales: Vec<LanguageCode>,

    pub keys: Vec<KeySummary>,
}

impl FlutterExport {
    /// The locale every unmatched runtime lookup resolves to: the first
    /// supported locale. An explicit policy, not an iteration-order accident.
    pub fn fallback_locale(&self) -> Option<&LanguageCode> {
        self.supported_locales.first()
    }
}

/// Organized data for the JSON export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonExport {
    pub metadata: JsonMetadata,
    pub keys: IndexMap<String, JsonKey>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonMetadata {
    pub languages: Vec<JsonLanguage>,

    /// ISO-8601 timestamp of the export, injected by the caller.
    pub export_date: String,

    pub total_keys: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonLanguage {
    pub code: LanguageCode,
    pub name: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonKey {
    pub description: String,
    pub translations: IndexMap<String, String>,
}

/// Resolves a key's translations against the known language set, last value
/// winning on duplicates.
fn translation_map<'a>(key: &'a Key, known: &HashSet<&str>) -> HashMap<&'a str, &'a str> {
    let mut map = HashMap::new();
    for value in &key.values {
        let code = value.language.code.as_str();
        if known.contains(code) {
            map.insert(code, value.value.as_str());
        }
    }
    map
}

fn known_codes(languages: &[Language]) -> HashSet<&str> {
    languages.iter().map(|l| l.code.as_str()).collect()
}

/// Joins keys × languages into the Flutter export model.
///
/// Every language ends up with exactly one [`LocalizedEntry`] per key, in key
/// order, placeholders filling the gaps.
pub fn organize_for_flutter(keys: &[Key], languages: &[Language]) -> FlutterExport {
    let known = known_codes(languages);
    let mut language_map: IndexMap<LanguageCode, Vec<LocalizedEntry>> = languages
        .iter()
        .map(|language| (language.code.clone(), Vec::with_capacity(keys.len())))
        .collect();

    for key in keys {
        let translations = translation_map(key, &known);
        let description = key.description_or_default();

        for language in languages {
            let value = match translations.get(language.code.as_str()) {
                Some(value) => (*value).to_string(),
                None => placeholder_value(&language.code, &key.name),
            };
            if let Some(entries) = language_map.get_mut(&language.code) {
                entries.push(LocalizedEntry {
                    key: key.name.clone(),
                    value,
                    description: description.clone(),
                });
            }
        }
    }

    FlutterExport {
        language_map,
        supported_locales: languages.iter().map(|l| l.code.clone()).collect(),
        keys: keys
            .iter()
            .map(|key| KeySummary {
                name: key.name.clone(),
                description: key.description_or_default(),
            })
            .collect(),
    }
}

/// Joins keys × languages into the JSON export model.
///
/// The export timestamp is a parameter so two calls over the same snapshot
/// can produce byte-identical output.
pub fn organize_for_json(
    keys: &[Key],
    languages: &[Language],
    exported_at: DateTime<Utc>,
) -> JsonExport {
    let known = known_codes(languages);

    let mut out_keys = IndexMap::with_capacity(keys.len());
    for key in keys {
        let translations_by_code = translation_map(key, &known);
        let mut translations = IndexMap::with_capacity(languages.len());
        for language in languages {
            let value = match translations_by_code.get(language.code.as_str()) {
                Some(value) => (*value).to_string(),
                None => placeholder_value(&language.code, &key.name),
            };
            translations.insert(language.code.as_str().to_string(), value);
        }
        out_keys.insert(
            key.name.clone(),
            JsonKey {
                description: key.description_or_default(),
                translations,
            },
        );
    }

    JsonExport {
        metadata: JsonMetadata {
            languages: languages
                .iter()
                .map(|language| JsonLanguage {
                    code: language.code.clone(),
                    name: language.name.clone(),
                    is_default: language.is_default,
                })
                .collect(),
            export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            total_keys: keys.len(),
        },
        keys: out_keys,
    }
}

/// Joins keys × languages into CSV rows.
///
/// Row 0 is the header (`Key, Description, <name> (<code>)...`); every
/// following row corresponds 1:1 to a key, columns ordered as the supplied
/// languages.
pub fn organize_for_csv(keys: &[Key], languages: &[Language]) -> Vec<Vec<String>> {
    let known = known_codes(languages);
    let mut rows = Vec::with_capacity(keys.len() + 1);

    let mut header = vec!["Key".to_string(), "Description".to_string()];
    header.extend(
        languages
            .iter()
            .map(|language| format!("{} ({})", language.name, language.code)),
    );
    rows.push(header);

    for key in keys {
        let translations = translation_map(key, &known);
        let mut row = vec![key.name.clone(), key.description_or_default()];
        for language in languages {
            let value = match translations.get(language.code.as_str()) {
                Some(value) => (*value).to_string(),
                None => placeholder_value(&language.code, &key.name),
            };
            row.push(value);
        }
        rows.push(row);
    }

    rows
}
