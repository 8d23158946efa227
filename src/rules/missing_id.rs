//! Missing message id detection rule.
//!
//! An id is covered in a locale when:
//! - a literal id is one of the locale's keys, or
//! - a template id's pattern matches anywhere inside one of the keys.
//!
//! Each uncovered node yields exactly one report listing every locale that
//! lacks it, in configuration order.

use crate::{
    core::{CandidateId, IdUsage, SourceContext, TranslationIndex},
    issues::MissingIdIssue,
};

/// A diagnostic produced for a single id-bearing node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReport {
    pub node: SourceContext,
    pub message: String,
}

/// Receiver for reports produced while validating ids.
pub trait DiagnosticSink {
    fn report(&mut self, report: MissingReport);
}

impl DiagnosticSink for Vec<MissingReport> {
    fn report(&mut self, report: MissingReport) {
        self.push(report);
    }
}

/// Checks candidate ids against a translation index.
pub struct IdValidator<'a> {
    index: &'a TranslationIndex,
}

impl<'a> IdValidator<'a> {
    pub fn new(index: &'a TranslationIndex) -> Self {
        Self { index }
    }

    /// Locales lacking coverage for `candidate`, in index order.
    ///
    /// Returns `None` when the template cannot be compiled; such a node is
    /// not checked at all.
    pub fn missing_locales(&self, candidate: &CandidateId) -> Option<Vec<&'a str>> {
        let locales = self.index.locales();
        let missing = match candidate {
            CandidateId::Literal(id) => locales
                .iter()
                .filter(|locale| !locale.keys.contains(id))
                .map(|locale| locale.locale.as_str())
                .collect(),
            CandidateId::Template(pattern) => {
                let regex = match pattern.compile() {
                    Ok(regex) => regex,
                    Err(e) => {
                        log::warn!("skipping id pattern `{}`: {}", pattern, e);
                        return None;
                    }
                };
                locales
                    .iter()
                    .filter(|locale| !locale.keys.iter().any(|key| regex.is_match(key)))
                    .map(|locale| locale.locale.as_str())
                    .collect()
            }
        };
        Some(missing)
    }

    /// The diagnostic message for `candidate`, or `None` when it is covered
    /// in every locale.
    pub fn check(&self, candidate: &CandidateId) -> Option<String> {
        let missing = self.missing_locales(candidate)?;
        if missing.is_empty() {
            return None;
        }
        Some(missing_message(candidate, &missing))
    }

    /// Validate one usage and report through `sink` when it is not covered.
    pub fn visit(&self, usage: &IdUsage, sink: &mut impl DiagnosticSink) {
        if let Some(message) = self.check(&usage.candidate) {
            sink.report(MissingReport {
                node: usage.context.clone(),
                message,
            });
        }
    }
}

fn missing_message(candidate: &CandidateId, missing: &[&str]) -> String {
    let locales = missing.join(", ");
    match candidate {
        CandidateId::Literal(id) => format!("Missing id: {} in {}", id, locales),
        CandidateId::Template(pattern) => {
            format!("Missing id pattern: {} in {}", pattern, locales)
        }
    }
}

/// Run the missing-id rule over every usage.
pub fn check_missing_id_issues(index: &TranslationIndex, usages: &[IdUsage]) -> Vec<MissingIdIssue> {
    let validator = IdValidator::new(index);
    let mut reports: Vec<MissingReport> = Vec::new();

    for usage in usages {
        validator.visit(usage, &mut reports);
    }

    reports
        .into_iter()
        .map(|report| MissingIdIssue {
            context: report.node,
            message: report.message,
        })
        .collect()
}
