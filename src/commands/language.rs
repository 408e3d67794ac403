//! Language detection, listing and switching commands.

use serde::Serialize;

use crate::context::Context;
use crate::error::Result;
use crate::i18n::{locales, Language, MemoryDocument, PreferenceStore, LANGUAGE_KEY};
use crate::output::Displayable;

#[derive(Debug, Clone, Serialize)]
struct LanguageRow {
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    direction: &'static str,
    current: bool,
}

impl LanguageRow {
    fn new(language: Language, current: Language) -> Self {
        Self {
            code: language.code(),
            name: language.english_name(),
            native_name: language.native_name(),
            direction: language.direction().as_str(),
            current: language == current,
        }
    }
}

impl Displayable for LanguageRow {
    fn table_row(&self) -> Vec<String> {
        let marker = if self.current { "*" } else { "" };
        vec![
            format!("{}{}", self.code, marker),
            self.name.to_string(),
            self.native_name.to_string(),
            self.direction.to_string(),
        ]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["CODE", "NAME", "NATIVE", "DIR"]
    }
}

#[derive(Debug, Clone, Serialize)]
struct DetectRow {
    language: Language,
    direction: &'static str,
    source: &'static str,
    preference: Option<String>,
    locale: Option<String>,
}

impl Displayable for DetectRow {
    fn table_row(&self) -> Vec<String> {
        vec![
            self.language.to_string(),
            self.direction.to_string(),
            self.source.to_string(),
            self.preference.clone().unwrap_or_else(|| "-".to_string()),
            self.locale.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["LANGUAGE", "DIR", "SOURCE", "PREFERENCE", "LOCALE"]
    }
}

/// Show the language the site would start in, and why.
pub async fn detect(ctx: &Context) -> Result<()> {
    let service = ctx.service(false)?;
    let language = service.language();

    let preference = service.store().get(LANGUAGE_KEY);
    let locale = locales::detect_locale();

    let source = if preference.as_deref().is_some_and(|p| Language::from_code(p).is_ok()) {
        "preference"
    } else if locale.as_deref().and_then(locales::language_from_locale).is_some() {
        "locale"
    } else {
        "default"
    };

    let row = DetectRow {
        language,
        direction: language.direction().as_str(),
        source,
        preference,
        locale,
    };
    ctx.output.table(&[row])
}

/// List supported languages, marking the current one.
pub async fn languages(ctx: &Context) -> Result<()> {
    let current = ctx.service(false)?.language();
    let rows: Vec<LanguageRow> =
        Language::ALL.iter().map(|lang| LanguageRow::new(*lang, current)).collect();
    ctx.output.table(&rows)
}

/// Switch to a language and remember the choice.
///
/// The choice is saved before the bundle loads, so it is kept even when
/// loading fails. Unsupported codes are ignored.
pub async fn switch(ctx: &Context, code: &str) -> Result<()> {
    let mut service = ctx.service(true)?;
    let mut document = MemoryDocument::new();

    let switched = match service.switch_language(code, &mut document).await {
        Ok(switched) => switched,
        Err(e) => {
            ctx.output.warn(&format!(
                "Language '{}' was saved, but its translations could not be loaded",
                service.language()
            ));
            return Err(e);
        }
    };

    if !switched {
        ctx.output.warn(&format!("Unsupported language '{}' ignored (use en, fr or ar)", code));
        return Ok(());
    }

    let language = service.language();
    ctx.output.success(&format!(
        "Switched to {} ({}), {} translations loaded",
        language.english_name(),
        language,
        service.active_bundle().leaf_count()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_row_marks_current() {
        let row = LanguageRow::new(Language::Ar, Language::Ar);
        assert_eq!(row.table_row(), vec!["ar*", "Arabic", "العربية", "rtl"]);
        let row = LanguageRow::new(Language::En, Language::Ar);
        assert_eq!(row.table_row()[0], "en");
    }
}
