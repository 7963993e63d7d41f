//! Export orchestration.
//!
//! Sequences organizer → generator(s) → artifact list for each format. The
//! orchestrator owns no state beyond the current call's snapshot; given the
//! same snapshot and timestamp it produces byte-identical artifacts, so
//! concurrent exports need no coordination. Archiving and response streaming
//! are the caller's job.

use chrono::{DateTime, Utc};

use crate::{
    error::Error,
    formats::{
        ExportFormat, flutter, generate_app_localizations_class, generate_csv, generate_json,
        generate_language_file,
    },
    ident::check_identifier_collisions,
    organize::{organize_for_csv, organize_for_flutter, organize_for_json},
    types::{Artifact, Key, Language},
};

/// The result of one export call: the artifact set plus the format it was
/// produced for. An export is all-or-nothing; a partial artifact set is never
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutput {
    pub format: ExportFormat,
    pub artifacts: Vec<Artifact>,
}

impl ExportOutput {
    /// MIME type for the delivered artifact (or bundle, for Flutter).
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Suggested download file name.
    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }
}

/// Runs one export over a fully-joined snapshot.
///
/// The export timestamp is injected so the call is deterministic; use
/// [`export_now`] when wall-clock time is fine. Empty snapshots are rejected
/// up front; downstream the organizers tolerate empty keys, but an export of
/// nothing is a caller error, not an artifact.
pub fn export(
    keys: &[Key],
    languages: &[Language],
    format: ExportFormat,
    exported_at: DateTime<Utc>,
) -> Result<ExportOutput, Error> {
    if keys.is_empty() {
        return Err(Error::empty_dataset("no keys found to export"));
    }
    if languages.is_empty() {
        return Err(Error::empty_dataset("no languages found to export"));
    }

    let artifacts = match format {
        ExportFormat::Flutter => flutter_artifacts(keys, languages)?,
        ExportFormat::Json => {
            let model = organize_for_json(keys, languages, exported_at);
            vec![Artifact::new("localization.json", generate_json(&model)?)]
        }
        ExportFormat::Csv => {
            let rows = organize_for_csv(keys, languages);
            vec![Artifact::new("localization.csv", generate_csv(&rows))]
        }
    };

    Ok(ExportOutput { format, artifacts })
}

/// [`export`] stamped with the current time. The only non-deterministic entry
/// point in the crate.
pub fn export_now(
    keys: &[Key],
    languages: &[Language],
    format: ExportFormat,
) -> Result<ExportOutput, Error> {
    export(keys, languages, format, Utc::now())
}

/// Builds the Flutter bundle: one Dart file per language, the abstract base
/// class, and the two constant companion files.
fn flutter_artifacts(keys: &[Key], languages: &[Language]) -> Result<Vec<Artifact>, Error> {
    // Colliding getter names would produce invalid Dart; refuse rather than
    // emit a broken bundle.
    check_identifier_collisions(keys.iter().map(|key| key.name.as_str()))?;

    let model = organize_for_flutter(keys, languages);
    let mut artifacts = Vec::with_capacity(model.language_map.len() + 3);

    for (code, entries) in &model.language_map {
        let language_name = languages
            .iter()
            .find(|language| &language.code == code)
            .map(|language| language.name.as_str())
            .unwrap_or_default();
        artifacts.push(Artifact::new(
            format!("lib/l10n/{}_localizations.dart", code),
            generate_language_file(code, language_name, entries),
        ));
    }

    artifacts.push(Artifact::new(
        "lib/l10n/app_localizations.dart",
        generate_app_localizations_class(&model.keys, &model.supported_locales),
    ));
    artifacts.push(Artifact::new("l10n.yaml", flutter::L10N_YAML));
    artifacts.push(Artifact::new("README.md", flutter::USAGE_README));

    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LanguageCode, StringValue};
    use chrono::TimeZone;

    fn language(id: i64, code: &str, name: &str, is_default: bool) -> Language {
        Language {
            id,
            code: LanguageCode::new(code).unwrap(),
            name: name.to_string(),
            is_default,
        }
    }

    fn sample_snapshot() -> (Vec<Key>, Vec<Language>) {
        let en = language(1, "en", "English", true);
        let fr = language(2, "fr", "French", false);
        let keys = vec![Key {
            id: 1,
            name: "app.title".to_string(),
            description: Some("Title".to_string()),
            values: vec![StringValue {
                id: 10,
                value: "Localizer".to_string(),
                language: en.clone(),
            }],
        }];
        (keys, vec![en, fr])
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_keys_rejected() {
        let (_, languages) = sample_snapshot();
        let err = export(&[], &languages, ExportFormat::Csv, fixed_time()).unwrap_err();
        assert!(err.to_string().contains("no keys"));
    }

    #[test]
    fn test_empty_languages_rejected() {
        let (keys, _) = sample_snapshot();
        let err = export(&keys, &[], ExportFormat::Json, fixed_time()).unwrap_err();
        assert!(err.to_string().contains("no languages"));
    }

    #[test]
    fn test_flutter_artifact_set() {
        let (keys, languages) = sample_snapshot();
        let output = export(&keys, &languages, ExportFormat::Flutter, fixed_time()).unwrap();

        let paths: Vec<&str> = output
            .artifacts
            .iter()
            .map(|a| a.relative_path.as_str())
            .collect();
        assert_eq!(
            paths,
            vec![
                "lib/l10n/en_localizations.dart",
                "lib/l10n/fr_localizations.dart",
                "lib/l10n/app_localizations.dart",
                "l10n.yaml",
                "README.md",
            ]
        );
        assert_eq!(output.mime_type(), "application/zip");
        assert_eq!(output.file_name(), "flutter_localizations.zip");
    }

    #[test]
    fn test_flutter_identifier_collision_fails_fast() {
        let (mut keys, languages) = sample_snapshot();
        keys.push(Key {
            id: 2,
            name: "app-title".to_string(),
            description: None,
            values: Vec::new(),
        });

        let err = export(&keys, &languages, ExportFormat::Flutter, fixed_time()).unwrap_err();
        assert!(matches!(err, Error::DuplicateIdentifier { .. }));

        // The colliding key is fine in formats that use raw key names.
        assert!(export(&keys, &languages, ExportFormat::Csv, fixed_time()).is_ok());
    }

    #[test]
    fn test_json_single_artifact() {
        let (keys, languages) = sample_snapshot();
        let output = export(&keys, &languages, ExportFormat::Json, fixed_time()).unwrap();
        assert_eq!(output.artifacts.len(), 1);
        assert_eq!(output.artifacts[0].relative_path, "localization.json");
        assert_eq!(output.mime_type(), "application/json");
    }

    #[test]
    fn test_csv_single_artifact() {
        let (keys, languages) = sample_snapshot();
        let output = export(&keys, &languages, ExportFormat::Csv, fixed_time()).unwrap();
        assert_eq!(output.artifacts.len(), 1);
        assert_eq!(output.artifacts[0].relative_path, "localization.csv");
        assert_eq!(output.mime_type(), "text/csv");
    }

    #[test]
    fn test_determinism_with_fixed_timestamp() {
        let (keys, languages) = sample_snapshot();
        for format in [ExportFormat::Flutter, ExportFormat::Json, ExportFormat::Csv] {
            let first = export(&keys, &languages, format, fixed_time()).unwrap();
            let second = export(&keys, &languages, format, fixed_time()).unwrap();
            assert_eq!(first, second);
        }
    }
}
