//! The translation service: active locale state, bundle cache, and
//! application of bundles to a document.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use super::document::{markers, Document};
use super::locales::detect_initial_language;
use super::source::BundleSource;
use super::store::{PreferenceStore, LANGUAGE_KEY};
use super::{resolve_key, Language, TranslationBundle};
use crate::error::Result;

/// Counts of what a bundle application changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Marked elements (and titles) that received a translation.
    pub translated: usize,
    /// Marked elements whose key did not resolve and were left untouched.
    pub missing: usize,
    /// Language-switch controls updated.
    pub switches: usize,
}

/// Result of completing a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The bundle became active and was applied to the document.
    Applied(ApplyReport),
    /// A newer load was started meanwhile; the bundle was cached only.
    Stale,
}

/// Identifies one language load; later loads supersede earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    language: Language,
    token: u64,
}

impl LoadRequest {
    /// Language being loaded.
    pub const fn language(&self) -> Language {
        self.language
    }
}

/// What the first phase of a load decided.
#[derive(Debug, Clone)]
pub enum LoadTicket {
    /// The bundle is cached; apply it with [`TranslationService::apply_cached`].
    Cached {
        /// The load this ticket belongs to.
        request: LoadRequest,
        /// The cached bundle.
        bundle: Arc<TranslationBundle>,
    },
    /// The bundle must be fetched, then passed to
    /// [`TranslationService::complete_fetch`].
    Fetch(LoadRequest),
}

impl LoadTicket {
    /// The load this ticket belongs to.
    pub const fn request(&self) -> LoadRequest {
        match self {
            Self::Cached { request, .. } | Self::Fetch(request) => *request,
        }
    }
}

/// Owns the active language, the active bundle and the bundle cache.
///
/// One instance exists per page (or process) and is handed by reference to
/// every collaborator that needs localized strings.
pub struct TranslationService<S, P> {
    source: S,
    store: P,
    language: Language,
    active: Arc<TranslationBundle>,
    cache: HashMap<Language, Arc<TranslationBundle>>,
    latest_request: u64,
}

impl<S: BundleSource, P: PreferenceStore> TranslationService<S, P> {
    /// Create a service starting in `language` with an empty active bundle.
    pub fn new(source: S, store: P, language: Language) -> Self {
        Self {
            source,
            store,
            language,
            active: Arc::new(TranslationBundle::new()),
            cache: HashMap::new(),
            latest_request: 0,
        }
    }

    /// Create a service starting in the detected initial language.
    pub fn detect(source: S, store: P, locale_hint: Option<&str>, fallback: Language) -> Self {
        let language = detect_initial_language(&store, locale_hint, fallback);
        Self::new(source, store, language)
    }

    /// The active language.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The bundle most recently applied.
    pub fn active_bundle(&self) -> &TranslationBundle {
        &self.active
    }

    /// The cached bundle for `language`, if it was loaded before.
    pub fn cached(&self, language: Language) -> Option<&TranslationBundle> {
        self.cache.get(&language).map(Arc::as_ref)
    }

    /// The bundle source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// The preference store.
    pub const fn store(&self) -> &P {
        &self.store
    }

    /// Look up a key in the active bundle, falling back to the key itself.
    pub fn t(&self, key: &str) -> String {
        match resolve_key(&self.active, key) {
            Some(value) => value.to_string(),
            None => {
                tracing::warn!(key = key, language = %self.language, "Missing translation key");
                key.to_string()
            }
        }
    }

    /// Load the initial language into `document`.
    pub async fn start<D: Document>(&mut self, document: &mut D) -> Result<LoadOutcome> {
        self.load_language(self.language, document).await
    }

    /// Switch to the language named by `code`.
    ///
    /// Unsupported codes are ignored and return `Ok(false)`; otherwise the
    /// language is loaded and `Ok(true)` returned.
    pub async fn switch_language<D: Document>(
        &mut self,
        code: &str,
        document: &mut D,
    ) -> Result<bool> {
        let Ok(language) = Language::from_code(code) else {
            tracing::debug!(code = code, "Ignoring switch to unsupported language");
            return Ok(false);
        };
        self.load_language(language, document).await?;
        Ok(true)
    }

    /// Make `language` active, fetching its bundle unless cached, and apply it.
    ///
    /// The preference is persisted before fetching, so it sticks even when
    /// the fetch fails. On failure the document and active bundle are left
    /// as they were.
    pub async fn load_language<D: Document>(
        &mut self,
        language: Language,
        document: &mut D,
    ) -> Result<LoadOutcome> {
        match self.begin_load(language) {
            LoadTicket::Cached { request, bundle } => {
                Ok(self.apply_cached(request, bundle, document))
            }
            LoadTicket::Fetch(request) => {
                let fetched = self.source.fetch(language).await;
                self.complete_fetch(request, fetched, document)
            }
        }
    }

    /// First phase of a load: record and persist the language, and decide
    /// whether a fetch is needed.
    ///
    /// Every call supersedes the loads begun before it.
    pub fn begin_load(&mut self, language: Language) -> LoadTicket {
        self.language = language;
        if let Err(e) = self.store.set(LANGUAGE_KEY, language.code()) {
            tracing::warn!(
                language = %language,
                error = %e,
                "Failed to persist language preference"
            );
        }

        self.latest_request += 1;
        let request = LoadRequest { language, token: self.latest_request };

        match self.cache.get(&language) {
            Some(bundle) => {
                tracing::debug!(language = %language, "Translation bundle cache hit");
                LoadTicket::Cached { request, bundle: Arc::clone(bundle) }
            }
            None => LoadTicket::Fetch(request),
        }
    }

    /// Second phase for a cache hit.
    pub fn apply_cached<D: Document>(
        &mut self,
        request: LoadRequest,
        bundle: Arc<TranslationBundle>,
        document: &mut D,
    ) -> LoadOutcome {
        self.commit(request, bundle, document)
    }

    /// Second phase for a fetch: cache the bundle and apply it, unless a
    /// newer load has started since.
    pub fn complete_fetch<D: Document>(
        &mut self,
        request: LoadRequest,
        fetched: Result<TranslationBundle>,
        document: &mut D,
    ) -> Result<LoadOutcome> {
        let bundle = match fetched {
            Ok(bundle) => Arc::new(bundle),
            Err(e) => {
                tracing::warn!(
                    language = %request.language,
                    error = %e,
                    "Failed to load translation bundle"
                );
                return Err(e);
            }
        };

        tracing::debug!(
            language = %request.language,
            keys = bundle.leaf_count(),
            "Caching translation bundle"
        );
        self.cache.insert(request.language, Arc::clone(&bundle));
        Ok(self.commit(request, bundle, document))
    }

    /// Re-apply the active bundle, e.g. after elements were added.
    pub fn apply_active<D: Document>(&self, document: &mut D) -> ApplyReport {
        apply_to_document(self.language, &self.active, document)
    }

    fn commit<D: Document>(
        &mut self,
        request: LoadRequest,
        bundle: Arc<TranslationBundle>,
        document: &mut D,
    ) -> LoadOutcome {
        if request.token != self.latest_request {
            tracing::debug!(language = %request.language, "Discarding superseded load");
            return LoadOutcome::Stale;
        }

        self.active = bundle;
        let report = apply_to_document(self.language, &self.active, document);
        tracing::debug!(
            language = %self.language,
            translated = report.translated,
            missing = report.missing,
            "Applied translations"
        );
        LoadOutcome::Applied(report)
    }
}

/// Languages offered by the switch controls in `document`, in document
/// order. Controls naming unsupported codes are skipped.
pub fn switch_controls<D: Document>(document: &D) -> Vec<Language> {
    document
        .elements_with(markers::SWITCH)
        .into_iter()
        .filter_map(|id| document.attribute(id, markers::SWITCH))
        .filter_map(|code| Language::from_code(&code).ok())
        .collect()
}

/// Apply `bundle` to every marked element of `document`.
///
/// Sets the root language and direction, then translates content,
/// placeholder, generic attribute and title markers, then marks the
/// switch control for `language` active. Unresolved keys leave their
/// element untouched and never stop the remaining elements.
pub fn apply_to_document<D: Document>(
    language: Language,
    bundle: &TranslationBundle,
    document: &mut D,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    document.set_language(language.code(), language.direction());

    for id in document.elements_with(markers::CONTENT) {
        if let Some(value) = lookup(document, id, markers::CONTENT, bundle, &mut report) {
            document.set_inner_html(id, value);
        }
    }

    for id in document.elements_with(markers::PLACEHOLDER) {
        if let Some(value) = lookup(document, id, markers::PLACEHOLDER, bundle, &mut report) {
            document.set_attribute(id, markers::PLACEHOLDER_ATTRIBUTE, value);
        }
    }

    for id in document.elements_with(markers::ATTRIBUTE) {
        if let Some(value) = lookup(document, id, markers::ATTRIBUTE, bundle, &mut report) {
            document.set_attribute(id, markers::TARGET_ATTRIBUTE, value);
        }
    }

    for id in document.elements_with(markers::TITLE) {
        if let Some(value) = lookup(document, id, markers::TITLE, bundle, &mut report) {
            document.set_title(value);
        }
    }

    for id in document.elements_with(markers::SWITCH) {
        let active = document.attribute(id, markers::SWITCH).as_deref() == Some(language.code());
        document.set_class(id, markers::ACTIVE_CLASS, active);
        report.switches += 1;
    }

    report
}

fn lookup<'b, D: Document>(
    document: &D,
    id: usize,
    marker: &str,
    bundle: &'b TranslationBundle,
    report: &mut ApplyReport,
) -> Option<&'b str> {
    let key = document.attribute(id, marker)?;
    match resolve_key(bundle, &key) {
        Some(value) => {
            report.translated += 1;
            Some(value)
        }
        None => {
            tracing::debug!(key = %key, marker = marker, "No translation; leaving element as is");
            report.missing += 1;
            None
        }
    }
}
