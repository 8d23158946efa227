use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Created .intlidrc.json\n");
    assert!(test.root().join(".intlidrc.json").exists());

    let content = test.read_file(".intlidrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(
        parsed["localeFiles"],
        serde_json::json!(["./src/translations/en.json"])
    );
    assert_eq!(parsed["sourceRoot"], "./");
    assert_eq!(parsed["ignoreTestFiles"], true);

    Ok(())
}

#[test]
fn test_init_existing_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".intlidrc.json", r#"{"localeFiles": ["en.json"]}"#)?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains(".intlidrc.json already exists"));
    assert_eq!(
        test.read_file(".intlidrc.json")?,
        r#"{"localeFiles": ["en.json"]}"#
    );

    Ok(())
}

#[test]
fn test_init_then_check() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/translations/en.json", r#"{"hello": "Hi"}"#)?;
    test.write_file("src/App.jsx", r#"<FormattedMessage id="hello" />;"#)?;

    run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;
    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));

    Ok(())
}
