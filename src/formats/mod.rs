//! All supported export formats for localizer-export.
//!
//! This module re-exports the generator functions for each format and
//! provides the [`ExportFormat`] enum for generic format handling across the
//! crate.

pub mod csv;
pub mod flutter;
pub mod json;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

pub use csv::generate_csv;
pub use flutter::{generate_app_localizations_class, generate_language_file};
pub use json::generate_json;

use crate::error::Error;

/// Represents all supported export formats for generic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Generated Flutter/Dart localization sources, delivered as a bundle.
    Flutter,
    /// Single JSON document with metadata and all translations.
    Json,
    /// Single CSV table, one row per key.
    Csv,
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Flutter => write!(f, "flutter"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Accepts the case-insensitive format names `"flutter"`, `"json"`, and
/// `"csv"`; returns [`Error::UnknownFormat`] otherwise.
///
/// # Example
/// ```rust
/// use localizer_export::formats::ExportFormat;
/// use std::str::FromStr;
/// assert_eq!(ExportFormat::from_str("flutter").unwrap(), ExportFormat::Flutter);
/// assert_eq!(ExportFormat::from_str("JSON").unwrap(), ExportFormat::Json);
/// assert!(ExportFormat::from_str("xliff").is_err());
/// ```
impl FromStr for ExportFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "flutter" | "dart" => Ok(ExportFormat::Flutter),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl ExportFormat {
    /// The MIME type of the downloadable artifact for this format.
    ///
    /// Flutter exports are delivered zipped; the archive step itself is the
    /// caller's job.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Flutter => "application/zip",
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    /// The suggested download file name for this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Flutter => "flutter_localizations.zip",
            ExportFormat::Json => "localization.json",
            ExportFormat::Csv => "localization.csv",
        }
    }
}
