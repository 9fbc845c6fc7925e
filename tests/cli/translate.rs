use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use ad_i18n::{
    catalog::Catalogs,
    context::I18n,
    language::LanguageCode,
    parsers::json::scan_catalog_files,
};

use crate::{CliTest, PREFS_FILE, shipped_locales};

const EN: &str = r#"{"a": {"b": "Hello"}, "blank": ""}"#;
const ES: &str = r#"{"a": {"b": "Hola"}}"#;

#[test]
fn test_translate_scenario() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en", EN), ("es", ES)])?;

    assert_cmd_snapshot!(
        test.translate_command()
            .args(["a.b", "a.c", "a.b.c", "a", "blank", "--locale", "en-US"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hello
    a.c
    a.b.c
    a
    blank

    ----- stderr -----
    "
    );
    Ok(())
}

#[test]
fn test_translate_empty_key_returns_empty() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en", EN)])?;
    let output = test.translate_command().args(["", "--locale", "en-US"]).output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\n");
    Ok(())
}

#[test]
fn test_translate_uses_persisted_language() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en", EN), ("es", ES)])?;
    test.write_file(PREFS_FILE, r#"{"language": "es"}"#)?;

    assert_cmd_snapshot!(test.translate_command().arg("a.b"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hola

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_translate_lang_flag_is_not_persisted() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en", EN), ("es", ES)])?;
    let output = test
        .translate_command()
        .args(["a.b", "--lang", "es", "--locale", "en-US"])
        .output()?;

    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hola\n");
    assert!(!test.root().join(PREFS_FILE).exists());
    Ok(())
}

#[test]
fn test_translate_rejects_unsupported_lang_flag() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en", EN)])?;

    assert_cmd_snapshot!(test.translate_command().args(["a.b", "--lang", "fr"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: Unsupported language code: "fr"
      = hint: supported: en, es, zh, de, ru, hi
    "#);
    Ok(())
}

#[test]
fn test_translate_without_catalog_for_language() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en", EN)])?;

    assert_cmd_snapshot!(test.translate_command().args(["a.b", "--lang", "hi"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    a.b

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_translate_missing_messages_dir() -> Result<()> {
    let test = CliTest::new()?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.translate_command().arg("a.b"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Catalog directory '[ROOT]/locales' does not exist.
    Hint: Check your .adi18nrc.json 'messagesDir' setting.
    ");
    });
    Ok(())
}

#[test]
fn test_translate_reports_unreadable_catalog() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en", EN), ("de", "{ broken")])?;
    let output = test
        .translate_command()
        .args(["a.b", "--locale", "en-US"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("de.json"));
    Ok(())
}

#[test]
fn test_messages_dir_flag() -> Result<()> {
    let test = CliTest::new()?;
    let output = test
        .translate_command()
        .args(["hero.title", "rules.toc.title", "--lang", "de"])
        .arg("--messages-dir")
        .arg(shipped_locales())
        .output()?;

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Agentic Driven\nInhalt\n"
    );
    Ok(())
}

/// Every key of the shipped catalogs translates to real text in every
/// language, and unknown keys come back unchanged.
#[test]
fn test_shipped_catalogs_translate_every_key() -> Result<()> {
    let scan = scan_catalog_files(shipped_locales())?;
    assert!(scan.warnings.is_empty(), "{:?}", scan.warnings);

    let keys = scan
        .catalogs
        .get(LanguageCode::En)
        .map(|c| c.key_paths())
        .unwrap_or_default();
    assert!(!keys.is_empty());

    for lang in LanguageCode::ALL {
        let i18n = I18n::builder(scan.catalogs.clone())
            .session_override(Some(lang))
            .build();
        for key in &keys {
            let text = i18n.translate(key);
            assert!(!text.is_empty());
            assert_ne!(text, key.as_str(), "{} is untranslated in {}", key, lang);
        }
        assert_eq!(i18n.translate("no.such.key"), "no.such.key");
    }
    Ok(())
}

#[test]
fn test_empty_catalogs_translate_to_keys() {
    let i18n = I18n::builder(Catalogs::new()).build();
    assert_eq!(i18n.translate("hero.title"), "hero.title");
}
