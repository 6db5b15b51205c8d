use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, run};

const EN: &str = r#"{
  "common": {
    "title": "Home",
    "greeting": "Hello, {name}!"
  },
  "items": ["first", "second"]
}"#;

const FR: &str = r#"{
  "common": {
    "title": "Accueil"
  }
}"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("locales/en.json", EN)?;
    test.write_file("locales/fr.json", FR)?;
    Ok(test)
}

#[test]
fn test_translate_key() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.translate_command().arg("common.title"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Home

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_locale() -> Result<()> {
    let test = project()?;

    let out = run(test.translate_command().args(["common.title", "--locale", "fr"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "Accueil\n");

    Ok(())
}

#[test]
fn test_translate_missing_returns_key() -> Result<()> {
    let test = project()?;

    let out = run(test.translate_command().args(["common.title", "common.nope", "common"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "Home\ncommon.nope\ncommon\n");
    assert_eq!(
        out.stderr,
        "warning: no translation for \"common.nope\" in en\n\
         warning: no translation for \"common\" in en\n"
    );

    Ok(())
}

#[test]
fn test_translate_strict() -> Result<()> {
    let test = project()?;

    let out = run(test.translate_command().args(["common.greeting", "--locale", "fr", "--strict"]))?;

    assert_eq!(out.code, Some(1));
    assert_eq!(out.stdout, "common.greeting\n");

    Ok(())
}

#[test]
fn test_translate_placeholders() -> Result<()> {
    let test = project()?;

    let out = run(test.translate_command().args(["common.greeting", "--arg", "name=Ada"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "Hello, Ada!\n");

    Ok(())
}

#[test]
fn test_translate_array_index() -> Result<()> {
    let test = project()?;

    let out = run(test.translate_command().args(["items.1", "items.2"]))?;

    assert_eq!(out.stdout, "second\nitems.2\n");

    Ok(())
}

#[test]
fn test_translate_namespace_files() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", r#"{"title": "Home"}"#)?;
    test.write_file("locales/en/settings/profile.json", r#"{"save": "Save profile"}"#)?;

    let out = run(test.translate_command().args(["title", "settings.profile.save"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "Home\nSave profile\n");

    Ok(())
}

#[test]
fn test_translate_from_subdirectory() -> Result<()> {
    let test = project()?;
    test.create_dir("src/components")?;

    let out = run(test.command_in("src/components").args(["translate", "common.title"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "Home\n");

    Ok(())
}

#[test]
fn test_translate_region_falls_back_to_base_language() -> Result<()> {
    let test = project()?;
    test.write_file("locales/zh.json", r#"{"common": {"title": "首页"}}"#)?;

    let out = run(test.translate_command().args(["common.title", "--locale", "zh-CN"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "首页\n");
    assert_eq!(out.stderr, "");

    Ok(())
}

#[test]
fn test_translate_unknown_locale_uses_primary() -> Result<()> {
    let test = project()?;

    let out = run(test.translate_command().args(["common.title", "--locale", "de"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "Home\n");

    Ok(())
}

#[test]
fn test_translate_unknown_locale_without_primary() -> Result<()> {
    let test = project()?;

    let out = run(test.translate_command().args([
        "common.title",
        "--locale",
        "de",
        "--primary-locale",
        "ja",
    ]))?;

    assert_eq!(out.code, Some(2));
    assert!(
        out.stderr.contains("Locale 'de' not found"),
        "unexpected stderr: {}",
        out.stderr
    );
    assert!(out.stderr.contains("available: en, fr"));

    Ok(())
}

#[test]
fn test_translate_without_locales() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.translate_command().arg("common.title"))?;

    assert_eq!(out.code, Some(2));
    assert_eq!(out.stdout, "");
    assert!(out.stderr.starts_with("Error: Could not find a locales directory."));

    Ok(())
}

#[test]
fn test_translate_requires_key() -> Result<()> {
    let test = project()?;

    let out = run(&mut test.translate_command())?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("<KEYS>..."));

    Ok(())
}
