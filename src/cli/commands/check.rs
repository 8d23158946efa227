use anyhow::{Context, Result};

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    core::{CheckContext, CheckSession},
    issues::Issue,
    rules::check_missing_id_issues,
};

/// Run the missing-id rule over every scanned source file.
///
/// The translation index is loaded before any source file is looked at, so
/// a configuration or locale file error aborts the run without issues.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let mut session = CheckSession::new();
    let index = session
        .load_index(&ctx.locale_settings)
        .context("Failed to load translation index")?;

    let analysis = ctx.analyze_files();

    let mut issues: Vec<Issue> = check_missing_id_issues(&index, &analysis.usages)
        .into_iter()
        .map(Issue::MissingId)
        .collect();
    issues.extend(analysis.parse_errors.into_iter().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Check,
        issues,
        ctx.files.len(),
        ctx.locale_file_count(),
    ))
}
