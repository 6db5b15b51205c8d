use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, run};

const EN: &str = r#"{
  "common": {
    "title": "Home",
    "save": "Save",
    "greeting": "Hello, {name}!"
  }
}"#;

#[test]
fn test_clean_locales() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", EN)?;
    test.write_file(
        "locales/fr.json",
        r#"{
  "common": {
    "title": "Accueil",
    "save": "Enregistrer",
    "greeting": "Bonjour, {name} !"
  }
}"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 locales, 2 locale files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_key() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", EN)?;
    test.write_file(
        "locales/fr.json",
        r#"{
  "common": {
    "title": "Accueil",
    "greeting": "Bonjour, {name} !"
  }
}"#,
    )?;

    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"common.save\"  missing-key\n"));
    assert!(out.stdout.contains("  --> locales/en.json:4:1\n"));
    assert!(out.stdout.contains("= note: (\"Save\") missing in: fr\n"));
    assert!(out.stdout.ends_with("\u{2718} 1 problem (1 error, 0 warnings)\n"));

    Ok(())
}

#[test]
fn test_orphan_and_untranslated_are_warnings() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", EN)?;
    test.write_file(
        "locales/de.json",
        r#"{
  "common": {
    "title": "Startseite",
    "save": "Save",
    "greeting": "Hallo, {name}!",
    "legacy": "Alt"
  }
}"#,
    )?;

    let out = run(&mut test.check_command())?;

    // Warnings alone do not fail the check.
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("warning: \"common.legacy\"  orphan-key\n"));
    assert!(out.stdout.contains("  --> locales/de.json:6:1\n"));
    assert!(out.stdout.contains("warning: \"common.save\"  untranslated\n"));
    assert!(out.stdout.contains("identical in: de"));
    assert!(out.stdout.ends_with("\u{2718} 2 problems (0 errors, 2 warnings)\n"));

    Ok(())
}

#[test]
fn test_placeholder_mismatch() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", EN)?;
    test.write_file(
        "locales/fr.json",
        r#"{
  "common": {
    "title": "Accueil",
    "save": "Enregistrer",
    "greeting": "Bonjour, {user} !"
  }
}"#,
    )?;

    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"common.greeting\"  placeholder-mismatch\n"));
    assert!(out.stdout.contains("  --> locales/fr.json:5:1\n"));
    assert!(out.stdout.contains("in fr: expected {name}, found {user}"));
    assert!(out.stdout.contains("= hint: placeholders must match the primary locale"));

    Ok(())
}

#[test]
fn test_selected_rules_only() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", EN)?;
    test.write_file(
        "locales/fr.json",
        r#"{"common": {"title": "Accueil", "greeting": "Bonjour, {name} !"}}"#,
    )?;

    let out = run(test.check_command().arg("orphan"))?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_parse_error_reported() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", EN)?;
    test.write_file("locales/fr.json", "{ \"common\": ")?;

    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("parse-error"));
    assert!(out.stdout.contains("  --> locales/fr.json\n"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_file(".glossarc.json", r#"{"ignores": ["en/legacy/**"]}"#)?;
    test.write_file("locales/en.json", r#"{"title": "Home"}"#)?;
    test.write_file("locales/en/legacy/broken.json", "not json")?;

    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_primary_locale_override() -> Result<()> {
    let test = CliTest::with_file("locales/fr.json", r#"{"title": "Accueil"}"#)?;

    let out = run(&mut test.check_command())?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Primary locale 'en' not found"));

    let out = run(test.check_command().args(["--primary-locale", "fr"]))?;
    assert_eq!(out.code, Some(0));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.command().arg("--help"))?;

    assert_eq!(out.code, Some(0));
    for command in ["locate", "translate", "keys", "check", "init"] {
        assert!(out.stdout.contains(command), "help lists {}", command);
    }

    Ok(())
}
