use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, PREFS_FILE};

#[test]
fn test_languages_lists_all_six() -> Result<()> {
    let test = CliTest::new()?;
    let mut settings = test.settings();
    // Padding depends on display widths; the unit tests cover alignment.
    settings.add_filter(" {2,}", "  ");

    settings.bind(|| {
        assert_cmd_snapshot!(test.command().args(["languages", "--locale", "en-GB"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    en  English  🇬🇧 ✓
    es  Español  🇪🇸
    zh  中文  🇨🇳
    de  Deutsch  🇩🇪
    ru  Русский  🇷🇺
    hi  हिन्दी  🇮🇳

    ----- stderr -----
    ");
    });
    Ok(())
}

#[test]
fn test_languages_marks_persisted_language() -> Result<()> {
    let test = CliTest::with_file(PREFS_FILE, r#"{"language": "zh"}"#)?;
    let output = test.command().args(["languages", "--locale", "en-US"]).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let marked: Vec<&str> = stdout.lines().filter(|l| l.ends_with('✓')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].starts_with("zh  中文"));
    Ok(())
}
