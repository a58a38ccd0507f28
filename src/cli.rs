// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "commitprompt")]
#[command(version)]
#[command(about = "Compose a conventional commit message interactively", long_about = None)]
pub struct Cli {
    /// Prompt language (en, zh)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Maximum header width
    #[arg(long)]
    pub max_header_width: Option<usize>,

    /// Wrap width for body, breaking change and issues
    #[arg(long)]
    pub max_line_width: Option<usize>,

    /// Pre-select a commit type
    #[arg(short = 't', long = "type")]
    pub commit_type: Option<String>,

    /// Pre-fill the scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
