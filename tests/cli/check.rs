use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_known_id_passes() -> Result<()> {
    let test = CliTest::with_locales(&[("src/translations/en.json", r#"{"hello": "Hi"}"#)])?;
    test.write_file(
        "src/App.jsx",
        r#"
export const App = () => <FormattedMessage id="hello" />;
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "✓ Checked 1 source file, 1 locale file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_missing_id_fails() -> Result<()> {
    let test = CliTest::with_locales(&[("src/translations/en.json", r#"{"hello": "Hi"}"#)])?;
    test.write_file(
        "src/App.jsx",
        r#"export const App = () => <FormattedMessage id="bye" />;
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("error: \"Missing id: bye in en\"  missing-id")
    );
    assert!(output.stdout.contains("--> ./src/App.jsx:1:47"));
    assert!(output.stdout.contains("✘ 1 problem (1 error)"));

    Ok(())
}

#[test]
fn test_lists_every_missing_locale() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("i18n/en.json", r#"{"app.title": "Title"}"#),
        ("i18n/fr.json", r#"{}"#),
        ("i18n/en-US.json", r#"{}"#),
    ])?;
    test.write_file(
        "src/messages.ts",
        r#"
import { defineMessages } from 'react-intl';

export default defineMessages({
  title: { id: 'app.title', defaultMessage: 'Title' },
});
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("Missing id: app.title in fr, en-US")
    );

    Ok(())
}

#[test]
fn test_template_id_covered_by_pattern() -> Result<()> {
    let test = CliTest::with_locales(&[(
        "en.json",
        r#"{"item.count.one": "1 item", "item.count.other": "N items"}"#,
    )])?;
    test.write_file(
        "src/Count.tsx",
        r#"
export function Count({ intl, plural }) {
  return <span>{intl.formatMessage({ id: `item.count.${plural}` })}</span>;
}
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));

    Ok(())
}

#[test]
fn test_template_id_missing_pattern() -> Result<()> {
    let test = CliTest::with_locales(&[("en.json", r#"{"other": "x"}"#)])?;
    test.write_file(
        "src/Status.jsx",
        r#"
export const Status = ({ code }) => <FormattedMessage id={`status.${code}.label`} />;
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("Missing id pattern: status.*.label in en")
    );

    Ok(())
}

#[test]
fn test_missing_locale_files_setting() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".intlidrc.json", "{}")?;
    test.write_file("src/App.jsx", r#"<FormattedMessage id="bye" />;"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("localeFiles not in settings"));

    Ok(())
}

#[test]
fn test_invalid_locale_file_name() -> Result<()> {
    let test = CliTest::with_locales(&[("fr_FR.invalid", "{}")])?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("fr_FR.invalid"));

    Ok(())
}

#[test]
fn test_invalid_locale_json() -> Result<()> {
    let test = CliTest::with_locales(&[("en.json", "{ not json")])?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("en.json"));

    Ok(())
}

#[test]
fn test_unparsable_source_reported() -> Result<()> {
    let test = CliTest::with_locales(&[("en.json", r#"{"hello": "Hi"}"#)])?;
    test.write_file("src/Broken.jsx", "const = <div;\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("--> ./src/Broken.jsx"));
    assert!(output.stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_locale_file_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_locales(&[("en.json", r#"{"hello": "Hi"}"#)])?;
    test.write_file("de.json", r#"{}"#)?;
    test.write_file("src/App.jsx", r#"<FormattedMessage id="hello" />;"#)?;

    let output = run({
        let mut cmd = test.check_command();
        cmd.args(["--locale-file", "de.json"]);
        cmd
    })?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("Missing id: hello in de"));

    Ok(())
}

#[test]
fn test_source_root_flag_without_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"hello": "Hi"}"#)?;
    test.write_file("src/App.jsx", r#"<FormattedMessage id="hello" />;"#)?;

    let output = run({
        let mut cmd = test.check_command();
        cmd.args(["--source-root", "src", "--locale-file", "en.json"]);
        cmd
    })?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_eq!(
        output.stdout,
        "✓ Checked 1 source file, 1 locale file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_project_root_in_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".intlidrc.json",
        r#"{"localeFiles": ["en.json"], "projectRoot": "./locales"}"#,
    )?;
    test.write_file("locales/en.json", r#"{"hello": "Hi"}"#)?;
    test.write_file("src/App.jsx", r#"<FormattedMessage id="hello" />;"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));

    Ok(())
}

#[test]
fn test_test_files_and_node_modules_skipped() -> Result<()> {
    let test = CliTest::with_locales(&[("en.json", r#"{}"#)])?;
    test.write_file(
        "src/App.test.jsx",
        r#"<FormattedMessage id="only.in.tests" />;"#,
    )?;
    test.write_file(
        "node_modules/lib/index.js",
        r#"<FormattedMessage id="from.dependency" />;"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "✓ Checked 0 source files, 1 locale file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.check_command();
        cmd.arg("--help");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("--locale-file <FILE>"));
    assert!(output.stdout.contains("--project-root"));

    Ok(())
}
