//! The closed set of languages the site is translated into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A supported site language.
///
/// Only these values can ever be the active language or a cache key;
/// anything else is rejected at parse time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, the default language.
    #[default]
    En,
    /// French.
    Fr,
    /// Arabic, laid out right-to-left.
    Ar,
}

/// Text direction of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// Value of the document `dir` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Language {
    /// Every supported language, default first.
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::Ar];

    /// Parse an exact language code (`en`, `fr`, `ar`).
    ///
    /// Matching is exact: stored preferences and switch controls carry
    /// canonical lowercase codes.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            "ar" => Ok(Self::Ar),
            other => Err(Error::UnsupportedLanguage(other.to_string())),
        }
    }

    /// The two-letter language code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    /// Name of the language in the language itself.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Ar => "العربية",
        }
    }

    /// Name of the language in English.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "French",
            Self::Ar => "Arabic",
        }
    }

    /// Layout direction for documents in this language.
    pub const fn direction(self) -> Direction {
        match self {
            Self::Ar => Direction::Rtl,
            Self::En | Self::Fr => Direction::Ltr,
        }
    }

    /// Whether the language is laid out right-to-left.
    pub const fn is_rtl(self) -> bool {
        matches!(self.direction(), Direction::Rtl)
    }

    /// Bundle file name for this language.
    pub fn bundle_file(self) -> String {
        format!("{}.json", self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()).ok(), Some(lang));
        }
    }

    #[test]
    fn test_rejects_unsupported_codes() {
        assert!(matches!(
            Language::from_code("xx"),
            Err(Error::UnsupportedLanguage(c)) if c == "xx"
        ));
        assert!(Language::from_code("").is_err());
        assert!(Language::from_code("EN").is_err());
        assert!(Language::from_code("fr-CA").is_err());
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        assert!(Language::Ar.is_rtl());
        assert!(!Language::En.is_rtl());
        assert!(!Language::Fr.is_rtl());
        assert_eq!(Language::Ar.direction().as_str(), "rtl");
        assert_eq!(Language::Fr.direction().as_str(), "ltr");
    }

    #[test]
    fn test_default_and_bundle_file() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::Fr.bundle_file(), "fr.json");
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Ar).expect("serialize");
        assert_eq!(json, "\"ar\"");
        let parsed: Language = serde_json::from_str("\"fr\"").expect("deserialize");
        assert_eq!(parsed, Language::Fr);
    }
}
