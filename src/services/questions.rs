// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::fmt;

use crate::config::Config;
use crate::domain::{AnswerValue, Answers, Catalog, Choice, Field};
use crate::error::{Result, ValidationError};
use crate::services::format;
use crate::services::prompt::{PromptSession, Prompter};

type Predicate = Box<dyn Fn(&Answers) -> bool>;
type Filter = Box<dyn Fn(&str) -> String>;
type Validator = Box<dyn Fn(&str, &Answers) -> std::result::Result<(), ValidationError>>;
type Transformer = Box<dyn Fn(&str, &Answers) -> String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    List,
    Input,
    Confirm,
}

pub enum Message {
    Static(String),
    Dynamic(Box<dyn Fn(&Answers) -> String>),
}

impl Message {
    pub fn render(&self, answers: &Answers) -> String {
        match self {
            Self::Static(s) => s.clone(),
            Self::Dynamic(f) => f(answers),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// One question of the prompt sequence.
///
/// Callbacks are pure functions of the answer set gathered so far; the
/// engine running the session decides when to call them.
pub struct Question {
    pub name: Field,
    pub kind: QuestionKind,
    pub message: Message,
    pub default: Option<AnswerValue>,
    pub choices: Vec<Choice>,
    pub filter: Option<Filter>,
    pub validate: Option<Validator>,
    pub transformer: Option<Transformer>,
    pub when: Option<Predicate>,
}

impl Question {
    fn new(name: Field, kind: QuestionKind, message: Message) -> Self {
        Self {
            name,
            kind,
            message,
            default: None,
            choices: Vec::new(),
            filter: None,
            validate: None,
            transformer: None,
            when: None,
        }
    }

    fn input(name: Field, message: &str) -> Self {
        Self::new(name, QuestionKind::Input, Message::Static(message.to_string()))
    }

    fn confirm(name: Field, message: &str, default: bool) -> Self {
        Self::new(name, QuestionKind::Confirm, Message::Static(message.to_string()))
            .with_default(Some(AnswerValue::Flag(default)))
    }

    fn with_default(mut self, default: Option<AnswerValue>) -> Self {
        self.default = default;
        self
    }

    fn with_text_default(self, default: Option<&str>) -> Self {
        self.with_default(default.map(|d| AnswerValue::Text(d.to_string())))
    }

    fn when(mut self, predicate: impl Fn(&Answers) -> bool + 'static) -> Self {
        self.when = Some(Box::new(predicate));
        self
    }

    /// Whether the question is asked given the answers so far
    pub fn is_asked(&self, answers: &Answers) -> bool {
        self.when.as_ref().is_none_or(|when| when(answers))
    }

    pub fn apply_filter(&self, raw: &str) -> String {
        match &self.filter {
            Some(filter) => filter(raw),
            None => raw.to_string(),
        }
    }

    pub fn check(&self, value: &str, answers: &Answers) -> std::result::Result<(), ValidationError> {
        match &self.validate {
            Some(validate) => validate(value, answers),
            None => Ok(()),
        }
    }

    pub fn transform(&self, raw: &str, answers: &Answers) -> Option<String> {
        self.transformer.as_ref().map(|t| t(raw, answers))
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("default", &self.default)
            .field("choices", &self.choices.len())
            .field("filter", &self.filter.is_some())
            .field("validate", &self.validate.is_some())
            .field("transformer", &self.transformer.is_some())
            .field("when", &self.when.is_some())
            .finish()
    }
}

/// Builds the prompt sequence for one commit and assembles the result
#[derive(Debug, Clone)]
pub struct Composer {
    config: Config,
}

/// Entry point: a composer closed over `config`
pub fn engine(config: Config) -> Composer {
    Composer::new(config)
}

impl Composer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.config.locale.catalog()
    }

    pub fn choices(&self) -> Vec<Choice> {
        self.config.types.choices()
    }

    /// The ordered question list
    pub fn questions(&self) -> Vec<Question> {
        let cfg = &self.config;
        let text = self.catalog();
        let max_header_width = cfg.max_header_width;
        let keep_scope_case = cfg.disable_scope_lower_case;
        let keep_subject_case = cfg.disable_subject_lower_case;

        let mut commit_type = Question::new(
            Field::Type,
            QuestionKind::List,
            Message::Static(text.select_type.to_string()),
        )
        .with_text_default(cfg.default_type.as_deref());
        commit_type.choices = self.choices();

        let mut scope = Question::input(Field::Scope, text.scope)
            .with_text_default(cfg.default_scope.as_deref());
        scope.filter = Some(Box::new(move |v: &str| format::filter_scope(v, keep_scope_case)));

        let mut subject = Question::new(
            Field::Subject,
            QuestionKind::Input,
            Message::Dynamic(Box::new(move |answers: &Answers| {
                text.subject_prompt(format::max_summary_length(max_header_width, answers))
            })),
        )
        .with_text_default(cfg.default_subject.as_deref());
        subject.filter = Some(Box::new(move |v: &str| format::filter_subject(v, keep_subject_case)));
        subject.validate = Some(Box::new(move |v: &str, answers: &Answers| {
            format::validate_subject(v, keep_subject_case, max_header_width, answers)
        }));
        subject.transformer = Some(Box::new(move |v: &str, answers: &Answers| {
            format::subject_feedback(v, keep_subject_case, max_header_width, answers)
        }));

        let body =
            Question::input(Field::Body, text.body).with_text_default(cfg.default_body.as_deref());

        let is_breaking = Question::confirm(Field::IsBreaking, text.is_breaking, false);

        let mut breaking_body = Question::input(Field::BreakingBody, text.breaking_body)
            .with_text_default(Some("-"))
            .when(|a| a.is_breaking && !a.has_body());
        breaking_body.validate = Some(Box::new(|v: &str, _: &Answers| {
            format::validate_breaking_body(v)
        }));

        let breaking = Question::input(Field::Breaking, text.breaking).when(|a| a.is_breaking);

        // An empty default_issues counts as unset
        let default_issues = cfg.default_issues.as_deref().filter(|s| !s.is_empty());

        let is_issue_affected = Question::confirm(
            Field::IsIssueAffected,
            text.is_issue_affected,
            default_issues.is_some(),
        );

        let issues_body = Question::input(Field::IssuesBody, text.issues_body)
            .with_text_default(Some("-"))
            .when(|a| a.is_issue_affected && !a.has_body() && !a.has_breaking_body());

        let issues = Question::input(Field::Issues, text.issues)
            .with_text_default(default_issues)
            .when(|a| a.is_issue_affected);

        vec![
            commit_type,
            scope,
            subject,
            body,
            is_breaking,
            breaking_body,
            breaking,
            is_issue_affected,
            issues_body,
            issues,
        ]
    }

    /// Run the prompt sequence on `engine`, then hand the message to `commit`
    pub fn prompter<P, F>(&self, engine: &mut P, commit: F) -> Result<()>
    where
        P: Prompter + ?Sized,
        F: FnOnce(String),
    {
        let questions = self.questions();
        let answers = PromptSession::new(self.catalog()).ask_all(engine, &questions)?;
        commit(self.format(&answers));
        Ok(())
    }

    /// Final message for a complete answer set
    pub fn format(&self, answers: &Answers) -> String {
        format::assemble(answers, self.config.max_line_width)
    }
}
