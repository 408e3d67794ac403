//! Integration tests for the DevCloud i18n CLI.

#![allow(clippy::unwrap_used)] // Tests can use unwrap for cleaner assertions

mod common;

use assert_cmd::Command;
use common::TestSite;
use predicates::prelude::*;

/// Helper to create a bare command for the binary.
fn devcloud_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("devcloud-i18n"))
}

/// Test that the CLI shows help.
#[test]
fn test_help() {
    devcloud_cmd().arg("--help").assert().success().stdout(predicate::str::contains("DevCloud"));
}

/// Test that the CLI shows version.
#[test]
fn test_version() {
    devcloud_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that unrecognized commands fail.
#[test]
fn test_unknown_command() {
    devcloud_cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_languages_lists_rtl_arabic() {
    let site = TestSite::new();
    site.cmd()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("en*"))
        .stdout(predicate::str::contains("Arabic"))
        .stdout(predicate::str::contains("rtl"));
}

#[test]
fn test_lookup_in_explicit_language() {
    let site = TestSite::new();
    site.cmd()
        .args(["lookup", "nav.home", "--lang", "fr"])
        .assert()
        .success()
        .stdout("Accueil\n");
}

#[test]
fn test_lookup_missing_key_prints_key() {
    let site = TestSite::new();
    site.cmd()
        .args(["lookup", "nav.nowhere"])
        .assert()
        .success()
        .stdout("nav.nowhere\n");
}

#[test]
fn test_lookup_rejects_unsupported_language() {
    let site = TestSite::new();
    site.cmd().args(["lookup", "nav.home", "--lang", "de"]).assert().failure().code(2);
}

#[test]
fn test_lookup_json_output() {
    let site = TestSite::new();
    site.cmd()
        .args(["lookup", "contact.form_sent", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""value": "Message Sent""#));
}

#[test]
fn test_switch_is_remembered() {
    let site = TestSite::new();
    site.cmd().args(["switch", "fr"]).assert().success();

    site.cmd()
        .args(["detect", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""language": "fr""#))
        .stdout(predicate::str::contains(r#""source": "preference""#));

    // Later lookups start in the remembered language.
    site.cmd().args(["lookup", "contact.form_submit"]).assert().success().stdout("Envoyer\n");
}

#[test]
fn test_switch_to_unsupported_language_is_ignored() {
    let site = TestSite::new();
    site.cmd()
        .args(["switch", "xx"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ignored"));

    site.cmd()
        .args(["detect", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""language": "en""#))
        .stdout(predicate::str::contains(r#""source": "locale""#));
}

#[test]
fn test_failed_switch_keeps_preference() {
    let site = TestSite::new();
    site.remove_bundle("ar");

    site.cmd().args(["switch", "ar"]).assert().failure().code(10);

    site.cmd()
        .args(["detect", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""language": "ar""#));
}

#[test]
fn test_corrupt_preferences_are_recovered() {
    let site = TestSite::new();
    let prefs = site.preferences_file();
    std::fs::create_dir_all(prefs.parent().unwrap()).unwrap();
    std::fs::write(&prefs, "garbage").unwrap();

    site.cmd()
        .args(["detect", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""language": "en""#))
        .stdout(predicate::str::contains(r#""source": "locale""#));

    site.cmd().args(["switch", "fr"]).assert().success();

    site.cmd()
        .args(["detect", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""language": "fr""#))
        .stdout(predicate::str::contains(r#""source": "preference""#));
}

#[test]
fn test_output_format_from_project_config() {
    let site = TestSite::new();
    site.write_project_config("output:\n  format: json\n");

    site.cmd()
        .args(["lookup", "nav.home"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""value": "Home""#));

    // An explicit flag still wins over the config file.
    site.cmd().args(["lookup", "nav.home", "-o", "table"]).assert().success().stdout("Home\n");
}

#[test]
fn test_detect_from_locale_hint() {
    let site = TestSite::new();
    site.cmd()
        .env("DEVCLOUD_LOCALE", "fr_CA.UTF-8")
        .args(["detect", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""language": "fr""#))
        .stdout(predicate::str::contains(r#""direction": "ltr""#));
}

#[test]
fn test_apply_arabic_page() {
    let site = TestSite::new();
    site.cmd()
        .arg("apply")
        .arg(site.page())
        .args(["--lang", "ar", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""lang": "ar""#))
        .stdout(predicate::str::contains(r#""dir": "rtl""#))
        .stdout(predicate::str::contains(r#""title": "ديف كلاود""#))
        .stdout(predicate::str::contains("الرئيسية"))
        // Keys missing from the Arabic bundle keep their existing content.
        .stdout(predicate::str::contains("Original copy"))
        .stderr(predicate::str::contains("switcher [en, fr, ar]"));
}

#[test]
fn test_apply_writes_snapshot() {
    use devcloud_i18n::i18n::MemoryDocument;

    let site = TestSite::new();
    let out = site.root().join("page.fr.yaml");

    site.cmd()
        .arg("apply")
        .arg(site.page())
        .args(["--lang", "fr", "--out"])
        .arg(&out)
        .assert()
        .success();

    let translated = MemoryDocument::load(&out).unwrap();
    assert_eq!(translated.lang.as_deref(), Some("fr"));
    assert_eq!(translated.title, "DevCloud | Ingénierie cloud");
    assert_eq!(translated.elements[2].inner_html, "Accueil");
    assert_eq!(translated.elements[2].attributes["href"], "#home");
    assert_eq!(
        translated.elements[4].attributes.get("placeholder").map(String::as_str),
        Some("Votre nom")
    );
    // Meta description has no French entry and keeps no content attribute.
    assert!(!translated.elements[1].attributes.contains_key("content"));
    assert!(translated.elements[7].has_class("active"));
    assert!(!translated.elements[6].has_class("active"));
    assert!(translated.elements[6].has_class("lang-btn"));
}

#[test]
fn test_completions() {
    devcloud_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devcloud-i18n"));
}

#[cfg(test)]
mod service_tests {
    use devcloud_i18n::i18n::{
        DirBundleSource, Language, MemoryDocument, MemoryPreferenceStore, PreferenceStore,
        TranslationService, LANGUAGE_KEY,
    };

    use super::common::TestSite;

    #[tokio::test]
    async fn test_site_page_round() {
        let site = TestSite::new();
        let mut page = MemoryDocument::load(&site.page()).unwrap();
        let mut service = TranslationService::detect(
            DirBundleSource::new(site.bundles()),
            MemoryPreferenceStore::new(),
            Some("ar-SA"),
            Language::En,
        );

        service.start(&mut page).await.unwrap();
        assert_eq!(service.language(), Language::Ar);
        assert_eq!(page.dir.map(|d| d.as_str()), Some("rtl"));

        service.switch_language("en", &mut page).await.unwrap();
        assert_eq!(page.dir.map(|d| d.as_str()), Some("ltr"));
        assert_eq!(page.elements[1].attributes["content"], "Cloud engineering for growing teams");
        assert_eq!(service.t("contact.form_sent"), "Message Sent");
        assert_eq!(service.store().get(LANGUAGE_KEY).as_deref(), Some("en"));
    }
}
