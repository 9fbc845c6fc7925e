use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, PREFS_FILE};

#[test]
fn test_resolve_defaults_to_english() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.resolve_command().args(["--locale", "fr-FR"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    en

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_resolve_from_ambient_locale() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.resolve_command().args(["--locale", "es-MX"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    es

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_resolve_from_locale_env() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.resolve_command().env("AD_I18N_LOCALE", "ru_RU.UTF-8"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ru

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_resolve_prefers_persisted_language() -> Result<()> {
    let test = CliTest::with_file(PREFS_FILE, r#"{"language": "hi"}"#)?;

    assert_cmd_snapshot!(test.resolve_command().args(["--locale", "es-MX"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    hi

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_resolve_ignores_malformed_persisted_language() -> Result<()> {
    let test = CliTest::with_file(PREFS_FILE, r#"{"language": "tlh"}"#)?;
    let output = test.resolve_command().args(["--locale", "de-AT"]).output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "de\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("tlh"));
    Ok(())
}

#[test]
fn test_resolve_is_read_only() -> Result<()> {
    let test = CliTest::new()?;
    let first = test.resolve_command().args(["--locale", "zh-CN"]).output()?;
    let second = test.resolve_command().args(["--locale", "zh-CN"]).output()?;

    assert_eq!(first.stdout, second.stdout);
    assert!(!test.root().join(PREFS_FILE).exists());
    Ok(())
}

#[test]
fn test_resolve_uses_storage_path_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".adi18nrc.json", r#"{ "storagePath": "state/lang.json" }"#)?;
    test.write_file("state/lang.json", r#"{"language": "zh"}"#)?;

    assert_cmd_snapshot!(
        test.resolve_command()
            .env_remove("AD_I18N_STORAGE")
            .args(["--locale", "en-US"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    zh

    ----- stderr -----
    "
    );
    Ok(())
}
