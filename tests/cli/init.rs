use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["localesDir"], "./locales");
    assert_eq!(parsed["primaryLocale"], "en");
    assert_eq!(parsed["maxDepth"], 5);
    assert!(parsed["ignores"].as_array().is_some_and(|a| a.is_empty()));

    // 2-space indentation
    assert!(content.contains("\n  \"localesDir\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .glossarc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".glossarc.json").exists());
    let content = test.read_file(".glossarc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glossarc.json", "{}")?;

    let out = run(test.command().arg("init"))?;

    assert_eq!(out.code, Some(1));
    assert_eq!(out.stdout, "");
    assert_eq!(out.stderr, "Error: .glossarc.json already exists\n");
    // Existing file is left alone.
    assert_eq!(test.read_file(".glossarc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_then_translate() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", r#"{"hello": "Hello"}"#)?;

    assert_eq!(run(test.command().arg("init"))?.code, Some(0));
    let out = run(test.translate_command().arg("hello"))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "Hello\n");

    Ok(())
}
