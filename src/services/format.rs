// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! Header budgeting, answer normalisation and final message assembly.

use std::sync::LazyLock;

use console::style;
use regex::Regex;
use tracing::debug;

use crate::domain::Answers;
use crate::error::ValidationError;
use crate::services::wrap::wrap;

pub const BREAKING_PREFIX: &str = "BREAKING CHANGE: ";

static BREAKING_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^BREAKING CHANGE:[ \t]*").unwrap());

/// Characters the header spends before the subject: `type: ` and `(scope)`.
pub fn header_length(commit_type: &str, scope: Option<&str>) -> usize {
    let scope_len = scope
        .filter(|s| !s.is_empty())
        .map_or(0, |s| s.chars().count() + 2);
    commit_type.chars().count() + 2 + scope_len
}

/// Characters left for the subject; zero once the header alone is too wide.
pub fn max_summary_length(max_header_width: usize, answers: &Answers) -> usize {
    max_header_width.saturating_sub(header_length(&answers.commit_type, answers.scope()))
}

/// Trim, lowercase the first character unless disabled, strip trailing periods.
///
/// Periods are stripped once after trimming, so the result is not always a
/// fixed point: `"a ."` becomes `"a "`.
pub fn filter_subject(subject: &str, disable_lower_case: bool) -> String {
    let subject = subject.trim();

    let mut out = String::with_capacity(subject.len());
    let mut chars = subject.chars();
    if let Some(first) = chars.next() {
        if disable_lower_case {
            out.push(first);
        } else {
            out.extend(first.to_lowercase());
        }
        out.push_str(chars.as_str());
    }

    out.trim_end_matches('.').to_string()
}

pub fn filter_scope(scope: &str, disable_lower_case: bool) -> String {
    let scope = scope.trim();
    if disable_lower_case {
        scope.to_string()
    } else {
        scope.to_lowercase()
    }
}

pub fn validate_subject(
    subject: &str,
    disable_lower_case: bool,
    max_header_width: usize,
    answers: &Answers,
) -> Result<(), ValidationError> {
    let filtered = filter_subject(subject, disable_lower_case);
    let actual = filtered.chars().count();
    let limit = max_summary_length(max_header_width, answers);

    if actual == 0 {
        Err(ValidationError::EmptySubject)
    } else if actual > limit {
        Err(ValidationError::SubjectTooLong { limit, actual })
    } else {
        Ok(())
    }
}

pub fn validate_breaking_body(breaking_body: &str) -> Result<(), ValidationError> {
    if breaking_body.trim().is_empty() {
        Err(ValidationError::MissingBreakingSubject)
    } else {
        Ok(())
    }
}

/// Colour live feedback green within budget, red past it
pub fn paint(text: &str, within_limit: bool) -> String {
    if within_limit {
        style(text).green().to_string()
    } else {
        style(text).red().to_string()
    }
}

/// Live subject feedback: `(filtered length) raw input`, coloured by budget
pub fn subject_feedback(
    subject: &str,
    disable_lower_case: bool,
    max_header_width: usize,
    answers: &Answers,
) -> String {
    let len = filter_subject(subject, disable_lower_case).chars().count();
    let within = len <= max_summary_length(max_header_width, answers);
    paint(&format!("({len}) {subject}"), within)
}

/// `BREAKING CHANGE: ` block, or `None` when there is nothing to say.
///
/// An existing prefix in any case is replaced rather than repeated.
pub fn format_breaking(breaking: &str, max_line_width: usize) -> Option<String> {
    let breaking = breaking.trim();
    if breaking.is_empty() {
        return None;
    }
    let rest = BREAKING_PREFIX_REGEX.replace(breaking, "");
    Some(wrap(&format!("{BREAKING_PREFIX}{rest}"), max_line_width))
}

/// Join header, body, breaking and issue blocks with blank lines.
///
/// The header is not measured again here, so a scope edited after the
/// subject was accepted can leave it wider than `max_header_width`.
///
/// The subject is used as stored. `filter_subject` trims before it strips
/// trailing periods, so `"Fix bug. ."` is stored as `"fix bug. "` and the
/// header keeps that tail even though validation measured `"fix bug"`.
pub fn assemble(answers: &Answers, max_line_width: usize) -> String {
    let scope = answers
        .scope()
        .map(|s| format!("({s})"))
        .unwrap_or_default();
    let head = format!("{}{}: {}", answers.commit_type, scope, answers.subject);

    let body = Some(answers.body.as_str())
        .filter(|b| !b.is_empty())
        .map(|b| wrap(b, max_line_width));

    let breaking = answers
        .breaking
        .as_deref()
        .and_then(|b| format_breaking(b, max_line_width));

    let issues = answers
        .issues
        .as_deref()
        .filter(|i| !i.is_empty())
        .map(|i| wrap(i, max_line_width));

    let blocks: Vec<String> = [Some(head), body, breaking, issues]
        .into_iter()
        .flatten()
        .filter(|b| !b.is_empty())
        .collect();

    debug!(blocks = blocks.len(), "commit message assembled");
    blocks.join("\n\n")
}
