// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::VecDeque;

use commitprompt::domain::Choice;
use commitprompt::error::{Error, Result};
use commitprompt::services::prompt::Prompter;

/// One scripted reply, consumed in order
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Reply {
    /// Pick the choice whose value matches
    Pick(&'static str),
    /// Accept the default of a list or input question
    Default,
    Text(&'static str),
    Yes,
    No,
}

/// A `Prompter` that answers from a script and records what it was asked
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    pub prompts: Vec<String>,
    pub feedback: Vec<String>,
    pub rejections: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    fn next(&mut self, prompt: &str) -> Result<Reply> {
        self.prompts.push(prompt.to_string());
        self.replies
            .pop_front()
            .ok_or_else(|| Error::Dialog(format!("script exhausted at prompt {prompt:?}")))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, choices: &[Choice], default: Option<usize>) -> Result<usize> {
        match self.next(prompt)? {
            Reply::Pick(value) => choices
                .iter()
                .position(|c| c.value == value)
                .ok_or_else(|| Error::Dialog(format!("no choice {value:?}"))),
            Reply::Default => Ok(default.unwrap_or(0)),
            other => Err(Error::Dialog(format!("unexpected {other:?} for select"))),
        }
    }

    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        match self.next(prompt)? {
            Reply::Text("") | Reply::Default => Ok(default.unwrap_or("").to_string()),
            Reply::Text(t) => Ok(t.to_string()),
            other => Err(Error::Dialog(format!("unexpected {other:?} for input"))),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        match self.next(prompt)? {
            Reply::Yes => Ok(true),
            Reply::No => Ok(false),
            Reply::Default => Ok(default),
            other => Err(Error::Dialog(format!("unexpected {other:?} for confirm"))),
        }
    }

    fn feedback(&mut self, text: &str) -> Result<()> {
        self.feedback.push(text.to_string());
        Ok(())
    }

    fn reject(&mut self, reason: &str) -> Result<()> {
        self.rejections.push(reason.to_string());
        Ok(())
    }
}
