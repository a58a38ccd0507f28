// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Not an interactive terminal")]
    #[diagnostic(
        code(commitprompt::tty::not_interactive),
        help("Run commitprompt from a terminal; stdin and stdout must both be a TTY")
    )]
    NotInteractive,

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(commitprompt::config::error),
        help("Check .commitprompt.toml, the user config file and COMMITPROMPT_* variables")
    )]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    #[diagnostic(code(commitprompt::dialog::error))]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                Error::Cancelled
            }
            other => Error::Dialog(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons an answer is rejected and asked again
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("subject is required")]
    EmptySubject,

    #[error(
        "Subject length must be less than or equal to {limit} characters. Current length is {actual} characters."
    )]
    SubjectTooLong { limit: usize, actual: usize },

    #[error("Body is required for BREAKING CHANGE")]
    MissingBreakingSubject,
}
