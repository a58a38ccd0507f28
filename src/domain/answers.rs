// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::fmt;

/// Names of the questions, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Type,
    Scope,
    Subject,
    Body,
    IsBreaking,
    BreakingBody,
    Breaking,
    IsIssueAffected,
    IssuesBody,
    Issues,
}

impl Field {
    pub const ALL: &'static [Field] = &[
        Self::Type,
        Self::Scope,
        Self::Subject,
        Self::Body,
        Self::IsBreaking,
        Self::BreakingBody,
        Self::Breaking,
        Self::IsIssueAffected,
        Self::IssuesBody,
        Self::Issues,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Scope => "scope",
            Self::Subject => "subject",
            Self::Body => "body",
            Self::IsBreaking => "isBreaking",
            Self::BreakingBody => "breakingBody",
            Self::Breaking => "breaking",
            Self::IsIssueAffected => "isIssueAffected",
            Self::IssuesBody => "issuesBody",
            Self::Issues => "issues",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Text(String),
    Flag(bool),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            Self::Text(_) => None,
        }
    }
}

/// The answer set, filled in question order.
///
/// Conditional questions that were never asked stay `None`. Unasked text
/// fields read as empty, which is what the `when` predicates expect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub commit_type: String,
    pub scope: String,
    pub subject: String,
    pub body: String,
    pub is_breaking: bool,
    pub breaking_body: Option<String>,
    pub breaking: Option<String>,
    pub is_issue_affected: bool,
    pub issues_body: Option<String>,
    pub issues: Option<String>,
}

impl Answers {
    /// Record an answer.
    ///
    /// Text fields take `AnswerValue::Text`, the two confirmations take
    /// `AnswerValue::Flag`. A value of the wrong kind is a caller bug: it
    /// panics in debug builds and is ignored in release builds.
    pub fn set(&mut self, field: Field, value: AnswerValue) {
        match (field, value) {
            (Field::Type, AnswerValue::Text(v)) => self.commit_type = v,
            (Field::Scope, AnswerValue::Text(v)) => self.scope = v,
            (Field::Subject, AnswerValue::Text(v)) => self.subject = v,
            (Field::Body, AnswerValue::Text(v)) => self.body = v,
            (Field::IsBreaking, AnswerValue::Flag(v)) => self.is_breaking = v,
            (Field::BreakingBody, AnswerValue::Text(v)) => self.breaking_body = Some(v),
            (Field::Breaking, AnswerValue::Text(v)) => self.breaking = Some(v),
            (Field::IsIssueAffected, AnswerValue::Flag(v)) => self.is_issue_affected = v,
            (Field::IssuesBody, AnswerValue::Text(v)) => self.issues_body = Some(v),
            (Field::Issues, AnswerValue::Text(v)) => self.issues = Some(v),
            (field, value) => {
                debug_assert!(false, "answer {value:?} has the wrong kind for {field}");
                tracing::debug!(%field, ?value, "ignoring answer of mismatched kind");
            }
        }
    }

    pub fn scope(&self) -> Option<&str> {
        Some(self.scope.as_str()).filter(|s| !s.is_empty())
    }

    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    pub fn has_breaking_body(&self) -> bool {
        self.breaking_body.as_deref().is_some_and(|s| !s.is_empty())
    }
}
