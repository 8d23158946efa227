use swc_common::{SourceMap, Span};
use swc_ecma_ast::{CallExpr, JSXOpeningElement, Module};
use swc_ecma_visit::{Visit, VisitWith};

use super::recognizers::{
    IdNode, find_format_message_id, find_formatted_message_id, find_message_table_ids,
};
use crate::core::{CandidateId, SourceContext, SourceLocation};

/// Which call-site shape an id was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSiteKind {
    /// `<FormattedMessage id=... />`
    JsxAttribute,
    /// `formatMessage({ id })`
    FormatMessage,
    /// `defineMessages({...})` / `defineMessage({...})`
    MessageTable,
}

/// A recognized call-site with its message id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdUsage {
    pub candidate: CandidateId,
    pub context: SourceContext,
    pub kind: CallSiteKind,
}

/// Walks a module and records every recognized id-bearing node.
///
/// Recognition only; coverage is decided later against the translation index.
pub struct IdCollector<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    usages: Vec<IdUsage>,
}

impl<'a> IdCollector<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap) -> Self {
        Self {
            file_path,
            source_map,
            usages: Vec::new(),
        }
    }

    /// Main entry point: walk a module and return its id usages in visit order.
    pub fn collect(mut self, module: &Module) -> Vec<IdUsage> {
        module.visit_with(&mut self);
        self.usages
    }

    fn record(&mut self, node: IdNode, kind: CallSiteKind) {
        let context = self.make_source_context(node.span);
        self.usages.push(IdUsage {
            candidate: node.candidate,
            context,
            kind,
        });
    }

    fn make_source_context(&self, span: Span) -> SourceContext {
        let loc = self.source_map.lookup_char_pos(span.lo);
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        SourceContext::new(
            SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
            source_line,
        )
    }
}

impl<'a> Visit for IdCollector<'a> {
    fn visit_jsx_opening_element(&mut self, node: &JSXOpeningElement) {
        if let Some(id) = find_formatted_message_id(node) {
            self.record(id, CallSiteKind::JsxAttribute);
        }
        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Some(id) = find_format_message_id(node) {
            self.record(id, CallSiteKind::FormatMessage);
        }
        for id in find_message_table_ids(node) {
            self.record(id, CallSiteKind::MessageTable);
        }
        node.visit_children_with(self);
    }
}
