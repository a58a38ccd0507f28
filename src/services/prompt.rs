// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

//! The prompt engine seam.
//!
//! `Prompter` is the terminal-facing half: it only knows how to show one
//! prompt and read one answer. `PromptSession` is the sequencing half: it
//! walks the question list, evaluates `when` predicates against the answers
//! so far, applies filters and re-asks on validation failure.

use console::style;
use dialoguer::{Confirm, Input, Select};
use tracing::debug;

use crate::domain::{AnswerValue, Answers, Catalog, Choice};
use crate::error::{Error, Result};
use crate::services::questions::{Question, QuestionKind};

pub trait Prompter {
    /// Index into `choices` of the picked option
    fn select(&mut self, prompt: &str, choices: &[Choice], default: Option<usize>) -> Result<usize>;

    /// Raw line as typed; an empty line yields `default` when one is given
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Show live feedback about the last input (already styled)
    fn feedback(&mut self, text: &str) -> Result<()>;

    /// Tell the user why the last input was rejected before asking again
    fn reject(&mut self, reason: &str) -> Result<()>;
}

/// Runs a question list to completion against a `Prompter`
pub struct PromptSession {
    catalog: &'static Catalog,
}

impl PromptSession {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    pub fn ask_all<P>(&self, prompter: &mut P, questions: &[Question]) -> Result<Answers>
    where
        P: Prompter + ?Sized,
    {
        let mut answers = Answers::default();

        for question in questions {
            if !question.is_asked(&answers) {
                debug!(field = %question.name, "question skipped");
                continue;
            }
            let value = self.ask(prompter, question, &answers)?;
            answers.set(question.name, value);
        }

        Ok(answers)
    }

    fn ask<P>(&self, prompter: &mut P, question: &Question, answers: &Answers) -> Result<AnswerValue>
    where
        P: Prompter + ?Sized,
    {
        let message = question.message.render(answers);

        match question.kind {
            QuestionKind::List => {
                let default = question
                    .default
                    .as_ref()
                    .and_then(AnswerValue::as_text)
                    .and_then(|d| question.choices.iter().position(|c| c.value == d));
                let index = prompter.select(&message, &question.choices, default)?;
                let choice = question.choices.get(index).ok_or_else(|| {
                    Error::Dialog(format!(
                        "selection {} out of range for {} choices",
                        index,
                        question.choices.len()
                    ))
                })?;
                Ok(AnswerValue::Text(choice.value.clone()))
            }
            QuestionKind::Confirm => {
                let default = question
                    .default
                    .as_ref()
                    .and_then(AnswerValue::as_flag)
                    .unwrap_or(false);
                Ok(AnswerValue::Flag(prompter.confirm(&message, default)?))
            }
            QuestionKind::Input => {
                let default = question.default.as_ref().and_then(AnswerValue::as_text);
                loop {
                    let raw = prompter.input(&message, default)?;
                    if let Some(feedback) = question.transform(&raw, answers) {
                        prompter.feedback(&feedback)?;
                    }

                    let value = question.apply_filter(&raw);
                    match question.check(&value, answers) {
                        Ok(()) => return Ok(AnswerValue::Text(value)),
                        Err(e) => {
                            debug!(field = %question.name, error = %e, "answer rejected");
                            prompter.reject(&self.catalog.rejection(&e))?;
                        }
                    }
                }
            }
        }
    }
}

/// Terminal prompts via `dialoguer`
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, choices: &[Choice], default: Option<usize>) -> Result<usize> {
        let items: Vec<&str> = choices.iter().map(|c| c.name.as_str()).collect();
        let selection = Select::new()
            .with_prompt(prompt)
            .items(&items)
            .default(default.unwrap_or(0))
            .interact()?;
        Ok(selection)
    }

    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(d) = default {
            input = input.default(d.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }

    fn feedback(&mut self, text: &str) -> Result<()> {
        eprintln!("  {text}");
        Ok(())
    }

    fn reject(&mut self, reason: &str) -> Result<()> {
        eprintln!("{} {}", style(">>").red().bold(), reason);
        Ok(())
    }
}
