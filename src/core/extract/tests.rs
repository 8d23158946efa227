//! Tests for message id extraction.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use swc_common::SourceMap;

use super::*;
use crate::core::{CandidateId, TemplatePart, TemplatePattern, parsers::jsx::parse_jsx_source};

fn extract_from(code: &str, file_path: &str) -> Vec<IdUsage> {
    let parsed = parse_jsx_source(code.to_string(), file_path, Arc::new(SourceMap::default()))
        .unwrap();
    IdCollector::new(file_path, &parsed.source_map).collect(&parsed.module)
}

fn extract(code: &str) -> Vec<IdUsage> {
    extract_from(code, "test.tsx")
}

fn candidates(code: &str) -> Vec<CandidateId> {
    extract(code).into_iter().map(|u| u.candidate).collect()
}

fn literal(id: &str) -> CandidateId {
    CandidateId::Literal(id.to_string())
}

fn text(s: &str) -> TemplatePart {
    TemplatePart::Text(s.to_string())
}

#[test]
fn test_formatted_message_literal_id() {
    let usages = extract(
        r#"
const App = () => <FormattedMessage id="app.title" defaultMessage="Title" />;
"#,
    );

    assert_eq!(usages.len(), 1);
    assert_eq!(usages[0].candidate, literal("app.title"));
    assert_eq!(usages[0].kind, CallSiteKind::JsxAttribute);
    assert_eq!(usages[0].context.line(), 2);
    assert_eq!(
        usages[0].context.source_line,
        r#"const App = () => <FormattedMessage id="app.title" defaultMessage="Title" />;"#
    );
}

#[test]
fn test_formatted_message_column_points_at_value() {
    let usages = extract(r#"<FormattedMessage id="x" />"#);
    // 1-based column of the opening quote
    assert_eq!(usages[0].context.col(), 22);
}

#[test]
fn test_formatted_html_message() {
    assert_eq!(
        candidates(r#"<FormattedHTMLMessage id="html.body" />"#),
        vec![literal("html.body")]
    );
}

#[test]
fn test_formatted_message_template_in_container() {
    let found = candidates(r#"<FormattedMessage id={`item.count.${plural}`} />"#);
    assert_eq!(
        found,
        vec![CandidateId::Template(TemplatePattern::new(vec![
            text("item.count."),
            TemplatePart::Hole,
            text(""),
        ]))]
    );
}

#[test]
fn test_formatted_message_variable_id_is_skipped() {
    assert!(candidates(r#"<FormattedMessage id={messageId} />"#).is_empty());
}

#[test]
fn test_formatted_message_string_in_container_is_skipped() {
    assert!(candidates(r#"<FormattedMessage id={"app.title"} />"#).is_empty());
}

#[test]
fn test_other_components_are_ignored() {
    assert!(candidates(r#"<Message id="app.title" />"#).is_empty());
}

#[test]
fn test_formatted_message_without_id() {
    assert!(candidates(r#"<FormattedMessage defaultMessage="Hi" />"#).is_empty());
}

#[test]
fn test_nested_formatted_messages() {
    let found = candidates(
        r#"
<div title="x">
    <FormattedMessage id="outer" values={{ inner: <FormattedMessage id="inner" /> }} />
</div>
"#,
    );
    assert_eq!(found, vec![literal("outer"), literal("inner")]);
}

#[test]
fn test_format_message_call() {
    let usages = extract(r#"formatMessage({ id: "greeting", defaultMessage: "Hi" });"#);
    assert_eq!(usages.len(), 1);
    assert_eq!(usages[0].candidate, literal("greeting"));
    assert_eq!(usages[0].kind, CallSiteKind::FormatMessage);
}

#[test]
fn test_format_message_member_calls() {
    let found = candidates(
        r#"
intl.formatMessage({ id: "a" });
this.props.intl.formatMessage({ "id": "b" }, { count });
"#,
    );
    assert_eq!(found, vec![literal("a"), literal("b")]);
}

#[test]
fn test_format_message_template() {
    let found = candidates(r#"intl.formatMessage({ id: `status.${code}.label` });"#);
    assert_eq!(
        found,
        vec![CandidateId::Template(TemplatePattern::new(vec![
            text("status."),
            TemplatePart::Hole,
            text(".label"),
        ]))]
    );
}

#[test]
fn test_format_message_non_object_argument_is_skipped() {
    assert!(candidates(r#"intl.formatMessage(descriptor);"#).is_empty());
    assert!(candidates(r#"intl.formatMessage({ id: someId });"#).is_empty());
    assert!(candidates(r#"intl.formatMessage(...args);"#).is_empty());
}

#[test]
fn test_template_without_expressions_is_literal() {
    assert_eq!(
        candidates(r#"intl.formatMessage({ id: `plain.id` });"#),
        vec![literal("plain.id")]
    );
}

#[test]
fn test_define_messages_table() {
    let usages = extract(
        r#"
const messages = defineMessages({
    title: { id: "page.title", defaultMessage: "Title" },
    body: { id: `page.body.${variant}` },
    dynamic: { id: bodyId },
    other: "not a descriptor",
});
"#,
    );

    assert_eq!(usages.len(), 2);
    assert!(usages.iter().all(|u| u.kind == CallSiteKind::MessageTable));
    assert_eq!(usages[0].candidate, literal("page.title"));
    assert_eq!(usages[0].context.line(), 3);
    assert_eq!(usages[1].candidate.to_string(), "page.body.*");
    assert_eq!(usages[1].context.line(), 4);
}

#[test]
fn test_define_messages_with_const_assertion() {
    let found = candidates(
        r#"
export default defineMessages({
    save: { id: "actions.save" } as const,
} satisfies Record<string, unknown>);
"#,
    );
    assert_eq!(found, vec![literal("actions.save")]);
}

#[test]
fn test_define_message_single() {
    let usages = extract(r#"const m = defineMessage({ id: "single" });"#);
    assert_eq!(usages.len(), 1);
    assert_eq!(usages[0].candidate, literal("single"));
    assert_eq!(usages[0].kind, CallSiteKind::MessageTable);
}

#[test]
fn test_unrelated_calls_are_ignored() {
    assert!(candidates(r#"t({ id: "x" }); defineStuff({ a: { id: "y" } });"#).is_empty());
}

#[test]
fn test_all_shapes_in_one_file() {
    let found = candidates(
        r#"
const messages = defineMessages({ hello: { id: "hello" } });

export function Page({ intl }) {
    const label = intl.formatMessage({ id: "label" });
    return <FormattedMessage id="body" />;
}
"#,
    );
    assert_eq!(found, vec![literal("hello"), literal("label"), literal("body")]);
}

#[test]
fn test_plain_js_file() {
    let found = extract_from(
        r#"export const el = <FormattedMessage id="js.only" />;"#,
        "component.jsx",
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].context.file_path(), "component.jsx");
}

#[test]
fn test_escapes_in_template_use_cooked_text() {
    let found = candidates(r#"formatMessage({ id: `tab\tname.${x}` });"#);
    assert_eq!(
        found,
        vec![CandidateId::Template(TemplatePattern::new(vec![
            text("tab\tname."),
            TemplatePart::Hole,
            text(""),
        ]))]
    );
}
