use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, shipped_locales};

const FULL: &str = r#"{"hero": {"title": "T", "subtitle": "S"}}"#;

fn all_languages_except(skip: &str) -> Vec<(&'static str, &'static str)> {
    ["en", "es", "zh", "de", "ru", "hi"]
        .into_iter()
        .filter(|code| *code != skip)
        .map(|code| (code, FULL))
        .collect()
}

#[test]
fn test_check_clean() -> Result<()> {
    let test = CliTest::with_catalogs(&all_languages_except(""))?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 6 catalogs, 2 keys each - no issues found

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_check_shipped_locales() -> Result<()> {
    let test = CliTest::new()?;
    let output = test
        .check_command()
        .arg("--messages-dir")
        .arg(shipped_locales())
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", stdout);
    assert!(stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_check_missing_key() -> Result<()> {
    let mut catalogs = all_languages_except("ru");
    catalogs.push(("ru", r#"{"hero": {"title": "T"}}"#));
    let test = CliTest::with_catalogs(&catalogs)?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "hero.subtitle" is missing in ru  missing-key
      --> [ROOT]/locales/en.json:1

    ✘ 1 problems (1 error, 0 warnings)

    ----- stderr -----
    "#);
    });
    Ok(())
}

#[test]
fn test_check_extra_key_is_warning() -> Result<()> {
    let mut catalogs = all_languages_except("zh");
    catalogs.push((
        "zh",
        r#"{"hero": {"title": "T", "subtitle": "S", "badge": "B"}}"#,
    ));
    let test = CliTest::with_catalogs(&catalogs)?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: "hero.badge" in zh is not defined in en  extra-key
      --> [ROOT]/locales/zh.json:1

    ✘ 1 problems (0 errors, 1 warning)

    ----- stderr -----
    "#);
    });
    Ok(())
}

#[test]
fn test_check_missing_catalog() -> Result<()> {
    let test = CliTest::with_catalogs(&all_languages_except("hi"))?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: no catalog for "hi"  missing-catalog
      --> [ROOT]/locales/hi.json

    ✘ 1 problems (1 error, 0 warnings)

    ----- stderr -----
    "#);
    });
    Ok(())
}

#[test]
fn test_check_uses_primary_language_from_config() -> Result<()> {
    let mut catalogs = all_languages_except("es");
    catalogs.push((
        "es",
        r#"{"hero": {"title": "T", "subtitle": "S", "cta": "C"}}"#,
    ));
    let test = CliTest::with_catalogs(&catalogs)?;
    test.write_file(".adi18nrc.json", r#"{ "primaryLanguage": "es" }"#)?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("\"hero.cta\" is missing in en"));
    assert!(stdout.contains("locales/es.json:1"));
    Ok(())
}

#[test]
fn test_check_invalid_config() -> Result<()> {
    let test = CliTest::with_catalogs(&all_languages_except(""))?;
    test.write_file(".adi18nrc.json", r#"{ "primaryLanguage": "fr" }"#)?;

    let output = test.check_command().output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Failed to parse config file"));
    assert!(stderr.contains("unknown variant `fr`"));
    Ok(())
}
