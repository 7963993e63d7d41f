//! Flutter/Dart source generation.
//!
//! Emits one concrete `<Code>Localizations` class per language plus the
//! abstract `AppLocalizations` base class that wires up the Flutter
//! localization delegate contract. The generated runtime resolves a locale by
//! exact code match, then by bare language subtag, then by an explicit
//! fallback locale (the first supported locale).
//!
//! Two companion files ship with every bundle as constant templates: the
//! `l10n.yaml` gen config and a usage README.

use indoc::indoc;

use crate::{
    escape::escape_dart_literal,
    ident::{to_class_name, to_identifier},
    types::{KeySummary, LanguageCode, LocalizedEntry},
};

/// Generates the Dart class for one language.
///
/// Every entry becomes a public getter returning its (escaped) value,
/// preceded by a doc comment carrying the key's description. The entry list
/// is expected to be complete (placeholders included), so the class never
/// leaves an abstract getter unimplemented.
pub fn generate_language_file(
    code: &LanguageCode,
    language_name: &str,
    entries: &[LocalizedEntry],
) -> String {
    let class_name = to_class_name(code);

    let mut out = String::from("import 'app_localizations.dart';\n\n");
    out.push_str(&format!(
        "/// The translations for {} (`{}`).\n",
        language_name, code
    ));
    out.push_str(&format!("class {} extends AppLocalizations {{\n", class_name));
    out.push_str(&format!(
        "  {}([String locale = '{}']) : super(locale);\n",
        class_name, code
    ));

    for entry in entries {
        out.push('\n');
        out.push_str(&format!("  /// {}\n", entry.description));
        out.push_str(&format!(
            "  String get {} => \"{}\";\n",
            to_identifier(&entry.key),
            escape_dart_literal(&entry.value)
        ));
    }

    out.push_str("}\n");
    out
}

/// Generates the abstract `AppLocalizations` base class.
///
/// Parameterized by one import and one factory-map entry per locale, one
/// abstract getter per key, and the `supportedLocales` literal. Everything
/// else is fixed delegate boilerplate.
pub fn generate_app_localizations_class(
    keys: &[KeySummary],
    supported_locales: &[LanguageCode],
) -> String {
    let imports = supported_locales
        .iter()
        .map(|code| format!("import '{}_localizations.dart';", code))
        .collect::<Vec<_>>()
        .join("\n");

    let locale_literals = supported_locales
        .iter()
        .map(|code| format!("Locale('{}')", code))
        .collect::<Vec<_>>()
        .join(",\n    ");

    let factory_entries = supported_locales
        .iter()
        .map(|code| format!("    '{}': {}.new,", code, to_class_name(code)))
        .collect::<Vec<_>>()
        .join("\n");

    // The runtime fallback is the first supported locale, emitted as a named
    // constant in the generated code so the policy stays visible.
    let fallback_locale = supported_locales
        .first()
        .map(|code| code.as_str())
        .unwrap_or_default();

    let abstract_getters = keys
        .iter()
        .map(|key| {
            format!(
                "\n  /// {}\n  String get {};\n",
                key.description,
                to_identifier(&key.name)
            )
        })
        .collect::<Vec<_>>()
        .join("");

    let mut out = String::from(indoc! {"
        import 'dart:async';
        import 'package:flutter/foundation.dart';
        import 'package:flutter/widgets.dart';
        import 'package:flutter_localizations/flutter_localizations.dart';
        import 'package:intl/intl.dart';

    "});
    out.push_str(&imports);
    out.push_str(indoc! {"



        /// Callers can lookup localized strings with an instance of AppLocalizations
        /// returned by `AppLocalizations.of(context)`.
        abstract class AppLocalizations {
          AppLocalizations(String locale) : localeName = locale.toString();

          final String localeName;

          static AppLocalizations? of(BuildContext context) {
            return Localizations.of<AppLocalizations>(context, AppLocalizations);
          }

          static const LocalizationsDelegate<AppLocalizations> delegate = _AppLocalizationsDelegate();

          static const List<LocalizationsDelegate<dynamic>> localizationsDelegates = <LocalizationsDelegate<dynamic>>[
            delegate,
            GlobalMaterialLocalizations.delegate,
            GlobalWidgetsLocalizations.delegate,
            GlobalCupertinoLocalizations.delegate,
          ];

    "});
    out.push_str(&format!(
        "  static const List<Locale> supportedLocales = [\n    {}\n  ];\n\n",
        locale_literals
    ));
    out.push_str(
        "  /// A map of supported locales to delegate factories\n  \
         static final Map<String, AppLocalizations Function(String)> _localizationFactories = {\n",
    );
    out.push_str(&factory_entries);
    out.push_str("\n  };\n\n");
    out.push_str(&format!(
        "  /// The locale used when no registered locale matches: the first supported locale.\n  \
         static const String _fallbackLocale = '{}';\n",
        fallback_locale
    ));
    out.push_str(concat!(
        "\n",
        "  /// Creates a new instance from the specified locale.\n",
        "  factory AppLocalizations.fromLocale(String locale) {\n",
        "    final String canonicalLocale = Intl.canonicalizedLocale(locale);\n",
        "    final factoryFunc = _localizationFactories[canonicalLocale] ??\n",
        "      _localizationFactories[canonicalLocale.split('_')[0]] ??\n",
        "      _localizationFactories[_fallbackLocale]!;\n",
        "\n",
        "    return factoryFunc(locale);\n",
        "  }\n",
    ));
    out.push_str(&abstract_getters);
    out.push_str(indoc! {"
        }

        class _AppLocalizationsDelegate extends LocalizationsDelegate<AppLocalizations> {
          const _AppLocalizationsDelegate();

          @override
          Future<AppLocalizations> load(Locale locale) {
            return SynchronousFuture<AppLocalizations>(
              AppLocalizations.fromLocale(locale.toString())
            );
          }

          @override
          bool isSupported(Locale locale) => AppLocalizations.supportedLocales
            .map((e) => e.languageCode)
            .contains(locale.languageCode);

          @override
          bool shouldReload(_AppLocalizationsDelegate old) => false;
        }
    "});

    out
}

/// The `l10n.yaml` gen config shipped with every Flutter bundle.
pub const L10N_YAML: &str = indoc! {"
    arb-dir: lib/l10n
    template-arb-file: app_en.arb
    output-localization-file: app_localizations.dart
    output-class: AppLocalizations
"};

/// Usage instructions shipped with every Flutter bundle.
pub const USAGE_README: &str = indoc! {r#"
    # Flutter Localizations Export

    This package contains the localization files for your Flutter application exported from the Localizer tool.

    ## How to Use

    1. Copy the `lib/l10n` directory to your Flutter project's `lib` directory.
    2. Copy the `l10n.yaml` file to the root of your Flutter project.
    3. Add the following to your `pubspec.yaml`:

    ```yaml
    dependencies:
      flutter:
        sdk: flutter
      flutter_localizations:
        sdk: flutter
      intl: ^0.18.0

    flutter:
      generate: true
    ```

    4. In your `MaterialApp`, add:

    ```dart
    import 'package:flutter_localizations/flutter_localizations.dart';
    import 'package:your_app/l10n/app_localizations.dart';

    MaterialApp(
      title: 'Localized App',
      localizationsDelegates: AppLocalizations.localizationsDelegates,
      supportedLocales: AppLocalizations.supportedLocales,
      home: MyHomePage(),
    );
    ```

    5. Access translations in your widgets:

    ```dart
    final appTitle = AppLocalizations.of(context)!.app_title;
    ```
"#};

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> LanguageCode {
        LanguageCode::new(s).unwrap()
    }

    fn entry(key: &str, value: &str, description: &str) -> LocalizedEntry {
        LocalizedEntry {
            key: key.to_string(),
            value: value.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_language_file_getter_and_header() {
        let entries = vec![entry("app.title", "Localizer", "Title")];
        let source = generate_language_file(&code("en"), "English", &entries);

        assert!(source.starts_with("import 'app_localizations.dart';\n"));
        assert!(source.contains("/// The translations for English (`en`)."));
        assert!(source.contains("class EnLocalizations extends AppLocalizations {"));
        assert!(source.contains("EnLocalizations([String locale = 'en']) : super(locale);"));
        assert!(source.contains("  /// Title\n"));
        assert!(source.contains("String get app_title => \"Localizer\";"));
        assert!(source.ends_with("}\n"));
    }

    #[test]
    fn test_language_file_placeholder_value() {
        let entries = vec![entry("app.title", "[fr] app.title", "Title")];
        let source = generate_language_file(&code("fr"), "French", &entries);
        assert!(source.contains("String get app_title => \"[fr] app.title\";"));
    }

    #[test]
    fn test_language_file_escapes_quotes() {
        let entries = vec![entry("quote", "say \"hi\"", "")];
        let source = generate_language_file(&code("en"), "English", &entries);
        assert!(source.contains(r#"String get quote => "say \"hi\"";"#));
    }

    #[test]
    fn test_language_file_without_entries() {
        let source = generate_language_file(&code("en"), "English", &[]);
        assert!(source.contains("class EnLocalizations extends AppLocalizations {"));
        assert!(!source.contains("String get"));
    }

    #[test]
    fn test_base_class_imports_and_factories() {
        let keys = vec![KeySummary {
            name: "app.title".to_string(),
            description: "Title".to_string(),
        }];
        let locales = vec![code("en"), code("fr")];
        let source = generate_app_localizations_class(&keys, &locales);

        assert!(source.contains("import 'en_localizations.dart';"));
        assert!(source.contains("import 'fr_localizations.dart';"));
        assert!(source.contains("'en': EnLocalizations.new,"));
        assert!(source.contains("'fr': FrLocalizations.new,"));
        assert!(source.contains("Locale('en'),\n    Locale('fr')"));
        assert!(source.contains("String get app_title;"));
    }

    #[test]
    fn test_base_class_fallback_is_first_locale() {
        let locales = vec![code("fr"), code("en")];
        let source = generate_app_localizations_class(&[], &locales);
        assert!(source.contains("static const String _fallbackLocale = 'fr';"));
        assert!(source.contains("_localizationFactories[_fallbackLocale]!"));
        assert!(source.contains("_localizationFactories[canonicalLocale.split('_')[0]]"));
    }

    #[test]
    fn test_base_class_delegate_boilerplate() {
        let source = generate_app_localizations_class(&[], &[code("en")]);
        assert!(source.contains("abstract class AppLocalizations {"));
        assert!(source.contains("class _AppLocalizationsDelegate extends LocalizationsDelegate<AppLocalizations> {"));
        assert!(source.contains("SynchronousFuture<AppLocalizations>"));
        assert!(source.contains("bool shouldReload(_AppLocalizationsDelegate old) => false;"));
    }

    #[test]
    fn test_companion_templates() {
        assert!(L10N_YAML.contains("arb-dir: lib/l10n"));
        assert!(L10N_YAML.contains("template-arb-file: app_en.arb"));
        assert!(L10N_YAML.contains("output-localization-file: app_localizations.dart"));
        assert!(L10N_YAML.contains("output-class: AppLocalizations"));
        assert!(USAGE_README.contains("# Flutter Localizations Export"));
    }
}
