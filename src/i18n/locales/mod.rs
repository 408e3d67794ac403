//! Locale detection and initial language resolution.

use unic_langid::LanguageIdentifier;

use super::Language;
use super::store::{PreferenceStore, LANGUAGE_KEY};

/// Environment variables consulted for the locale hint, in order.
///
/// 1. `DEVCLOUD_LOCALE` - explicit override
/// 2. `LC_ALL` - POSIX locale override
/// 3. `LC_MESSAGES` - POSIX message locale
/// 4. `LANG` - default POSIX locale
pub const LOCALE_ENV_VARS: &[&str] = &["DEVCLOUD_LOCALE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Detect the user's locale hint from environment variables.
///
/// Returns `None` when nothing usable is set; `C` and `POSIX` carry no
/// language and are skipped.
pub fn detect_locale() -> Option<String> {
    LOCALE_ENV_VARS.iter().find_map(|var| {
        std::env::var(var)
            .ok()
            .filter(|locale| !locale.is_empty() && locale != "C" && locale != "POSIX")
    })
}

/// Normalize a locale string to BCP 47 format.
///
/// Examples:
/// - "fr_CA.UTF-8" -> "fr-CA"
/// - "ar_EG@latin" -> "ar-EG"
/// - "en" -> "en"
pub fn normalize_locale(locale: &str) -> String {
    // Drop encoding (".UTF-8") and modifier ("@euro") suffixes
    let locale = locale.split(['.', '@']).next().unwrap_or(locale);
    locale.trim().replace('_', "-")
}

/// Extract the lowercase primary language subtag of a locale hint.
pub fn primary_subtag(locale: &str) -> Option<String> {
    let normalized = normalize_locale(locale).to_ascii_lowercase();
    let subtag = match normalized.parse::<LanguageIdentifier>() {
        Ok(id) => id.language.as_str().to_string(),
        // Not valid BCP 47; fall back to whatever precedes the first separator
        Err(_) => normalized.split('-').next().unwrap_or_default().to_string(),
    };
    (!subtag.is_empty() && subtag != "und").then_some(subtag)
}

/// Map a locale hint onto a supported language, if its primary subtag matches.
pub fn language_from_locale(locale: &str) -> Option<Language> {
    primary_subtag(locale).and_then(|tag| Language::from_code(&tag).ok())
}

/// Pick the language the page starts in.
///
/// A persisted, supported preference wins; then the locale hint's primary
/// subtag; then `fallback`. Never fails.
pub fn detect_initial_language<P: PreferenceStore + ?Sized>(
    store: &P,
    locale_hint: Option<&str>,
    fallback: Language,
) -> Language {
    if let Some(stored) = store.get(LANGUAGE_KEY)
        && let Ok(lang) = Language::from_code(&stored)
    {
        tracing::debug!(language = %lang, "Using persisted language preference");
        return lang;
    }

    if let Some(lang) = locale_hint.and_then(language_from_locale) {
        tracing::debug!(language = %lang, hint = locale_hint, "Using environment locale");
        return lang;
    }

    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::store::MemoryPreferenceStore;

    fn store_with(value: &str) -> MemoryPreferenceStore {
        let mut store = MemoryPreferenceStore::new();
        store.set(LANGUAGE_KEY, value).expect("memory store never fails");
        store
    }

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("fr_CA.UTF-8"), "fr-CA");
        assert_eq!(normalize_locale("en_US"), "en-US");
        assert_eq!(normalize_locale("ar_EG@latin"), "ar-EG");
        assert_eq!(normalize_locale("en"), "en");
    }

    #[test]
    fn test_primary_subtag() {
        assert_eq!(primary_subtag("fr-CA").as_deref(), Some("fr"));
        assert_eq!(primary_subtag("FR-ca").as_deref(), Some("fr"));
        assert_eq!(primary_subtag("ar_SA.UTF-8").as_deref(), Some("ar"));
        assert_eq!(primary_subtag("de").as_deref(), Some("de"));
        assert_eq!(primary_subtag(""), None);
    }

    #[test]
    fn test_persisted_preference_wins_over_hint() {
        for lang in Language::ALL {
            let store = store_with(lang.code());
            assert_eq!(detect_initial_language(&store, Some("fr-FR"), Language::En), lang);
            assert_eq!(detect_initial_language(&store, Some("ar"), Language::En), lang);
            assert_eq!(detect_initial_language(&store, None, Language::En), lang);
        }
    }

    #[test]
    fn test_invalid_preference_falls_back_to_hint() {
        let store = store_with("xx");
        assert_eq!(detect_initial_language(&store, Some("fr-CA"), Language::En), Language::Fr);
        assert_eq!(detect_initial_language(&store, Some("AR-eg"), Language::En), Language::Ar);
    }

    #[test]
    fn test_unsupported_hint_falls_back_to_default() {
        let store = store_with("de");
        assert_eq!(detect_initial_language(&store, Some("de-DE"), Language::En), Language::En);
        let empty = MemoryPreferenceStore::new();
        assert_eq!(detect_initial_language(&empty, None, Language::En), Language::En);
        assert_eq!(detect_initial_language(&empty, Some("ja_JP"), Language::Fr), Language::Fr);
    }
}
