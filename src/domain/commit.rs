// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// One commit type of the taxonomy, e.g. `feat` / "A new feature"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub key: String,
    pub description: String,
}

impl TypeEntry {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// Ordered mapping from type key to description.
///
/// Stored as a list so that configured order survives every config layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy(Vec<TypeEntry>);

const CONVENTIONAL_TYPES: &[(&str, &str)] = &[
    ("feat", "A new feature"),
    ("fix", "A bug fix"),
    ("docs", "Documentation only changes"),
    (
        "style",
        "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)",
    ),
    (
        "refactor",
        "A code change that neither fixes a bug nor adds a feature",
    ),
    ("perf", "A code change that improves performance"),
    ("test", "Adding missing tests or correcting existing tests"),
    (
        "build",
        "Changes that affect the build system or external dependencies (example scopes: cargo, npm)",
    ),
    (
        "ci",
        "Changes to our CI configuration files and scripts (example scopes: GitHub Actions, GitLab CI)",
    ),
    ("chore", "Other changes that don't modify src or test files"),
    ("revert", "Reverts a previous commit"),
];

impl Default for Taxonomy {
    fn default() -> Self {
        Self(
            CONVENTIONAL_TYPES
                .iter()
                .map(|(key, description)| TypeEntry::new(*key, *description))
                .collect(),
        )
    }
}

impl From<Vec<TypeEntry>> for Taxonomy {
    fn from(entries: Vec<TypeEntry>) -> Self {
        Self(entries)
    }
}

impl Taxonomy {
    pub fn entries(&self) -> &[TypeEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|e| e.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.key.as_str())
    }

    /// Selectable options, one per entry, in taxonomy order.
    ///
    /// Labels are `key:` padded to the longest key plus the colon, then one
    /// space and the description, so descriptions line up in a column.
    pub fn choices(&self) -> Vec<Choice> {
        let width = self
            .0
            .iter()
            .map(|e| e.key.chars().count())
            .max()
            .unwrap_or(0)
            + 1;

        self.0
            .iter()
            .map(|e| Choice {
                name: format!("{:<width$} {}", format!("{}:", e.key), e.description),
                value: e.key.clone(),
            })
            .collect()
    }
}

/// A selectable option of a list question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub value: String,
}
