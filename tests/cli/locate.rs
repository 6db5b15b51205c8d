use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_locate_preferred_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("locales")?;

    let out = run(test.command().arg("locate"))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        format!("{}\n", test.root().join("locales").display())
    );
    assert_eq!(out.stderr, "");

    Ok(())
}

#[test]
fn test_locate_nearest_ancestor() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("locales")?;
    test.create_dir("src/app")?;

    let out = run(test.command_in("src/app").arg("locate"))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        format!("{}\n", test.root().join("locales").display())
    );

    Ok(())
}

#[test]
fn test_locate_skips_file_named_locales() -> Result<()> {
    let test = CliTest::with_file("src/locales", "not a directory")?;
    test.create_dir("locales")?;

    let out = run(test.command_in("src").arg("locate"))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        format!("{}\n", test.root().join("locales").display())
    );

    Ok(())
}

#[test]
fn test_locate_cli_locales_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("i18n")?;
    test.create_dir("locales")?;

    let out = run(test.command().args(["locate", "--locales-dir", "i18n"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, format!("{}\n", test.root().join("i18n").display()));

    Ok(())
}

#[test]
fn test_locate_config_dir_relative_to_config_file() -> Result<()> {
    let test = CliTest::with_file(".glossarc.json", r#"{"localesDir": "public/messages"}"#)?;
    test.create_dir("public/messages")?;
    test.create_dir("src/app")?;

    let out = run(test.command_in("src/app").arg("locate"))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        format!("{}\n", test.root().join("public/messages").display())
    );

    Ok(())
}

#[test]
fn test_locate_missing_preferred_falls_back() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("locales")?;

    let out = run(test.command().args(["locate", "--locales-dir", "does/not/exist"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        format!("{}\n", test.root().join("locales").display())
    );

    Ok(())
}

#[test]
fn test_locate_depth_limit() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("locales")?;
    test.create_dir("src/app")?;

    // Only src/app itself is checked.
    let out = run(test.command_in("src/app").args(["locate", "--max-depth", "1"]))?;

    assert_eq!(out.code, Some(1));
    assert_eq!(out.stdout, "");
    assert_eq!(
        out.stderr,
        "\u{2718} No 'locales' directory found within 1 level(s)\n"
    );

    // src/app, src and the project root.
    let out = run(test.command_in("src/app").args(["locate", "--max-depth", "3"]))?;
    assert_eq!(out.code, Some(0));

    Ok(())
}

#[test]
fn test_locate_by_name() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("src/app/components")?;

    let out = run(test.command_in("src/app/components").args(["locate", "--name", "src"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, format!("{}\n", test.root().join("src").display()));

    Ok(())
}
