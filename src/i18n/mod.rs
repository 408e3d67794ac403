//! Internationalization (i18n) for the DevCloud site.
//!
//! Translations live in one JSON bundle per language (`i18n/<lang>.json`),
//! a tree of strings addressed by dotted key paths such as
//! `contact.form_sent`. The [`TranslationService`] owns the active
//! language and a cache of loaded bundles, and applies the active bundle
//! to any [`Document`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use devcloud_i18n::i18n::{
//!     locales, DirBundleSource, Language, MemoryDocument, MemoryPreferenceStore,
//!     TranslationService,
//! };
//!
//! let hint = locales::detect_locale();
//! let mut service = TranslationService::detect(
//!     DirBundleSource::new("site/i18n"),
//!     MemoryPreferenceStore::new(),
//!     hint.as_deref(),
//!     Language::En,
//! );
//!
//! let mut page = MemoryDocument::load("index.json".as_ref())?;
//! service.start(&mut page).await?;
//! service.switch_language("fr", &mut page).await?;
//! let label = service.t("contact.form_submit");
//! ```

mod bundle;
pub mod document;
mod language;
pub mod locales;
mod service;
mod source;
mod store;

pub use bundle::{resolve_key, TranslationBundle, TranslationNode};
pub use document::{Document, Element, ElementId, MemoryDocument};
pub use language::{Direction, Language};
pub use service::{
    apply_to_document, switch_controls, ApplyReport, LoadOutcome, LoadRequest, LoadTicket,
    TranslationService,
};
pub use source::{
    AnyBundleSource, BundleSource, DirBundleSource, HttpBundleSource, DEFAULT_BUNDLE_DIR,
};
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, LANGUAGE_KEY};
