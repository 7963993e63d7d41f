//! Core types for localizer-export.
//! The persistence layer supplies the snapshot types; the export pipeline
//! produces the derived types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// A validated language code (e.g. `"en"`, `"fr"`, `"en_US"`).
///
/// Codes are validated at ingestion so that generated class names and file
/// names never have to deal with malformed input deep inside string assembly:
/// the code must be ASCII and parse as a language identifier. A `-` separator
/// is accepted and normalized to `_` (the Dart locale convention).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Validates and normalizes a raw language code.
    pub fn new(code: impl Into<String>) -> Result<Self, Error> {
        let raw = code.into();
        if raw.is_empty() {
            return Err(Error::invalid_language_code(raw, "code is empty"));
        }
        if !raw.is_ascii() {
            return Err(Error::invalid_language_code(raw, "code is not ASCII"));
        }
        let bcp47 = raw.replace('_', "-");
        if let Err(e) = bcp47.parse::<LanguageIdentifier>() {
            return Err(Error::invalid_language_code(raw, e.to_string()));
        }
        Ok(LanguageCode(raw.replace('-', "_")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bare language subtag, without any region (e.g. `"en"` for `"en_US"`).
    pub fn language_subtag(&self) -> &str {
        self.0.split('_').next().unwrap_or(&self.0)
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::new(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LanguageCode::new(value)
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        LanguageCode::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A language registered in the Localizer database.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: i64,

    /// ISO-like language code (e.g. "en", "fr").
    pub code: LanguageCode,

    /// Human-readable name (e.g. "English").
    pub name: String,

    /// Whether this is the default language. Exactly one language in a
    /// well-formed snapshot carries this flag; the export core does not
    /// enforce it.
    #[serde(default)]
    pub is_default: bool,
}

/// The concrete translation of one [`Key`] in one [`Language`].
///
/// This is the joined shape supplied by the persistence layer; the resolved
/// language always rides along, so a dangling language reference is
/// unrepresentable here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringValue {
    pub id: i64,
    pub value: String,
    pub language: Language,
}

/// A named, language-independent identifier for one translatable string,
/// with all of its translations joined in.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    pub id: i64,

    /// Dot/hyphen-delimited key name, unique within a snapshot (e.g.
    /// "app.title").
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub values: Vec<StringValue>,
}

impl Key {
    /// The key's description, or an empty string when none was entered.
    pub fn description_or_default(&self) -> String {
        self.description.clone().unwrap_or_default()
    }
}

/// One localized string in one language, always present for every
/// (key, language) pair of an export, synthesized as a placeholder when no
/// translation exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedEntry {
    pub key: String,
    pub value: String,
    pub description: String,
}

/// A key name with its description, stripped of translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySummary {
    pub name: String,
    pub description: String,
}

/// One named text output produced by a generator, prior to packaging.
///
/// Paths are relative to the export bundle root; zipping and temp-directory
/// staging are the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub relative_path: String,
    pub content: String,
}

impl Artifact {
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Artifact {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}
