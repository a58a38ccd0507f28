// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::domain::{Locale, Taxonomy};
use crate::error::{Error, Result};

/// Options the composer closes over for one authoring session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum width of the header line `type(scope): subject` (default 100)
    #[serde(default = "default_max_header_width")]
    pub max_header_width: usize,

    /// Wrap width for body, breaking change and issue blocks (default 100)
    #[serde(default = "default_max_line_width")]
    pub max_line_width: usize,

    #[serde(default)]
    pub default_type: Option<String>,

    #[serde(default)]
    pub default_scope: Option<String>,

    #[serde(default)]
    pub default_subject: Option<String>,

    #[serde(default)]
    pub default_body: Option<String>,

    /// Issue references offered by default; also pre-answers "affects issues?"
    #[serde(default)]
    pub default_issues: Option<String>,

    #[serde(default)]
    pub disable_scope_lower_case: bool,

    #[serde(default)]
    pub disable_subject_lower_case: bool,

    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub types: Taxonomy,
}

fn default_max_header_width() -> usize {
    100
}

fn default_max_line_width() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_header_width: default_max_header_width(),
            max_line_width: default_max_line_width(),
            default_type: None,
            default_scope: None,
            default_subject: None,
            default_body: None,
            default_issues: None,
            disable_scope_lower_case: false,
            disable_subject_lower_case: false,
            locale: Locale::default(),
            types: Taxonomy::default(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.commitprompt.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".commitprompt.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // COMMITPROMPT_MAX_HEADER_WIDTH, COMMITPROMPT_LOCALE, ...
        figment = figment.merge(Env::prefixed("COMMITPROMPT_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.apply_cli(cli)?;
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "commitprompt").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) -> Result<()> {
        if let Some(ref l) = cli.locale {
            self.locale = Locale::parse(l).ok_or_else(|| {
                Error::Config(format!(
                    "unknown locale '{}', expected one of: {}",
                    l,
                    Locale::ALL.join(", ")
                ))
            })?;
        }
        if let Some(w) = cli.max_header_width {
            self.max_header_width = w;
        }
        if let Some(w) = cli.max_line_width {
            self.max_line_width = w;
        }
        if let Some(ref t) = cli.commit_type {
            self.default_type = Some(t.clone());
        }
        if let Some(ref s) = cli.scope {
            self.default_scope = Some(s.clone());
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_header_width == 0 {
            return Err(Error::Config("max_header_width must be at least 1".into()));
        }

        if self.max_line_width == 0 {
            return Err(Error::Config("max_line_width must be at least 1".into()));
        }

        if self.types.is_empty() {
            return Err(Error::Config("types cannot be empty".into()));
        }

        let mut seen = HashSet::new();
        for key in self.types.keys() {
            if key.trim().is_empty() {
                return Err(Error::Config("type keys cannot be blank".into()));
            }
            if !seen.insert(key) {
                return Err(Error::Config(format!("duplicate type key '{key}'")));
            }
        }

        if let Some(ref t) = self.default_type {
            if !self.types.contains(t) {
                return Err(Error::Config(format!(
                    "default_type '{}' is not one of: {}",
                    t,
                    self.types.keys().collect::<Vec<_>>().join(", ")
                )));
            }
        }

        Ok(())
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        Self::write_default(&path)?;
        Ok(path)
    }

    /// Write the commented starter config to `path`
    pub fn write_default(path: &std::path::Path) -> Result<()> {
        let content = r#"# commitprompt configuration

# Maximum width of the header line: type(scope): subject
max_header_width = 100

# Wrap width for the body, BREAKING CHANGE and issue blocks
max_line_width = 100

# Prompt language: en, zh
locale = "en"

# Keep the case of scope / subject exactly as typed
disable_scope_lower_case = false
disable_subject_lower_case = false

# Pre-filled answers
# default_type = "feat"
# default_scope = ""
# default_issues = "re #"

# Commit types, in the order they are offered. Omit to use the
# conventional-commit defaults.
# [[types]]
# key = "feat"
# description = "A new feature"
#
# [[types]]
# key = "fix"
# description = "A bug fix"
"#;

        fs::write(path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }
}
