//! All error types for the localizer-export crate.
//!
//! These are returned from all fallible operations (snapshot validation,
//! organization, artifact generation).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("empty dataset: {0}")]
    EmptyDataset(String),

    #[error("invalid language code `{code}`: {reason}")]
    InvalidLanguageCode { code: String, reason: String },

    #[error("keys `{first_key}` and `{second_key}` both sanitize to identifier `{identifier}`")]
    DuplicateIdentifier {
        identifier: String,
        first_key: String,
        second_key: String,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new empty-dataset error naming the missing collection.
    pub fn empty_dataset(what: impl Into<String>) -> Self {
        Error::EmptyDataset(what.into())
    }

    /// Creates a new invalid-language-code error.
    pub fn invalid_language_code(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidLanguageCode {
            code: code.into(),
            reason: reason.into(),
        }
    }
}
