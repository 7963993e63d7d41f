#![forbid(unsafe_code)]
//! Export core for the Localizer translation-key manager.
//!
//! Takes an in-memory snapshot of keys, translations, and languages and
//! deterministically produces artifacts in three formats: generated
//! Flutter/Dart localization sources, a JSON document, and a CSV table.
//! Persistence, HTTP, and archiving live outside this crate; it only consumes
//! already-joined collections and returns named text artifacts.
//!
//! # Quick Start
//!
//! ```rust
//! use localizer_export::{ExportFormat, Key, Language, LanguageCode, export_now};
//!
//! let languages = vec![Language {
//!     id: 1,
//!     code: LanguageCode::new("en")?,
//!     name: "English".to_string(),
//!     is_default: true,
//! }];
//! let keys = vec![Key {
//!     id: 1,
//!     name: "app.title".to_string(),
//!     description: Some("Title".to_string()),
//!     values: vec![],
//! }];
//!
//! let output = export_now(&keys, &languages, ExportFormat::Csv)?;
//! assert_eq!(output.mime_type(), "text/csv");
//! # Ok::<(), localizer_export::Error>(())
//! ```
//!
//! # Guarantees
//!
//! - **Structural completeness**: every artifact carries a value for every
//!   (key, language) pair; missing translations become `[<code>] <keyName>`
//!   placeholders.
//! - **Determinism**: the export timestamp is injected at the call boundary;
//!   identical snapshot + timestamp means byte-identical artifacts.
//! - **All-or-nothing**: a failed export returns an error, never a partial
//!   artifact set.

pub mod error;
pub mod escape;
pub mod export;
pub mod formats;
pub mod ident;
pub mod organize;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    export::{ExportOutput, export, export_now},
    formats::ExportFormat,
    types::{Artifact, Key, Language, LanguageCode, LocalizedEntry, StringValue},
};
