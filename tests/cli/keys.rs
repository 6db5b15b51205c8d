use anyhow::Result;

use crate::{CliTest, run};

fn project() -> Result<CliTest> {
    CliTest::with_file(
        "locales/en.json",
        r#"{
  "common": {
    "title": "Home",
    "save": "Save"
  },
  "nav": {
    "about": "About us"
  },
  "count": 3
}"#,
    )
}

#[test]
fn test_keys_lists_leaves() -> Result<()> {
    let test = project()?;

    let out = run(test.command().arg("keys"))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        "common.save   Save\n\
         common.title  Home\n\
         nav.about     About us\n"
    );

    Ok(())
}

#[test]
fn test_keys_prefix() -> Result<()> {
    let test = project()?;

    let out = run(test.command().args(["keys", "nav."]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "nav.about  About us\n");

    Ok(())
}

#[test]
fn test_keys_other_locale() -> Result<()> {
    let test = project()?;
    test.write_file("locales/ja.json", r#"{"common": {"title": "ホーム"}}"#)?;

    let out = run(test.command().args(["keys", "--locale", "ja"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "common.title  ホーム\n");

    Ok(())
}

#[test]
fn test_keys_region_falls_back_to_base_language() -> Result<()> {
    let test = project()?;
    test.write_file("locales/ja.json", r#"{"nav": {"about": "概要"}}"#)?;

    let out = run(test.command().args(["keys", "--locale", "ja-JP"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "nav.about  概要\n");

    Ok(())
}
