// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::IsTerminal;

use console::style;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::prompt::{DialoguerPrompter, Prompter};
use crate::services::questions::Composer;

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            locale = %config.locale,
            max_header_width = config.max_header_width,
            max_line_width = config.max_line_width,
            types = config.types.len(),
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub fn run(&mut self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        let is_interactive = std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
        if !is_interactive {
            return Err(Error::NotInteractive);
        }

        let message = self.compose(&mut DialoguerPrompter::new())?;

        eprintln!("\n{}", style("Commit message:").bold());
        println!("{message}");
        Ok(())
    }

    /// Run the full prompt sequence on `prompter` and return the message
    pub fn compose<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<String> {
        let composer = Composer::new(self.config.clone());
        let mut message = String::new();
        composer.prompter(prompter, |m| message = m)?;
        Ok(message)
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                let c = &self.config;
                println!("Locale: {}", c.locale);
                println!("Max header width: {}", c.max_header_width);
                println!("Max line width: {}", c.max_line_width);
                println!("Default type: {}", c.default_type.as_deref().unwrap_or("-"));
                println!("Default scope: {}", c.default_scope.as_deref().unwrap_or("-"));
                println!(
                    "Default issues: {}",
                    c.default_issues.as_deref().unwrap_or("-")
                );
                println!("Lowercase scope: {}", !c.disable_scope_lower_case);
                println!("Lowercase subject: {}", !c.disable_subject_lower_case);
                println!();
                println!("[types]");
                for choice in c.types.choices() {
                    println!("  {}", choice.name);
                }
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "commitprompt", &mut std::io::stdout());
                Ok(())
            }
        }
    }
}
