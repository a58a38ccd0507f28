// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: &'static [&'static str] = &["en", "zh"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Some(Self::En),
            "zh" | "zh-cn" | "chinese" => Some(Self::Zh),
            _ => None,
        }
    }

    pub fn catalog(self) -> &'static Catalog {
        match self {
            Self::En => &EN,
            Self::Zh => &ZH,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Zh => write!(f, "zh"),
        }
    }
}

/// Prompt and rejection text for one locale
#[derive(Debug)]
pub struct Catalog {
    pub select_type: &'static str,
    pub scope: &'static str,
    /// `{}` is replaced by the subject budget
    pub subject: &'static str,
    pub body: &'static str,
    pub is_breaking: &'static str,
    pub breaking_body: &'static str,
    pub breaking: &'static str,
    pub is_issue_affected: &'static str,
    pub issues_body: &'static str,
    pub issues: &'static str,
    pub empty_subject: &'static str,
    /// `{limit}` and `{actual}` are substituted
    pub subject_too_long: &'static str,
    pub missing_breaking_subject: &'static str,
}

impl Catalog {
    pub fn subject_prompt(&self, budget: usize) -> String {
        self.subject.replace("{}", &budget.to_string())
    }

    pub fn rejection(&self, err: &ValidationError) -> String {
        match err {
            ValidationError::EmptySubject => self.empty_subject.to_string(),
            ValidationError::SubjectTooLong { limit, actual } => self
                .subject_too_long
                .replace("{limit}", &limit.to_string())
                .replace("{actual}", &actual.to_string()),
            ValidationError::MissingBreakingSubject => self.missing_breaking_subject.to_string(),
        }
    }
}

static EN: Catalog = Catalog {
    select_type: "Select the type of change that you're committing",
    scope: "What is the scope of this change (e.g. component or file name) (press enter to skip)",
    subject: "Write a short, imperative tense description of the change (max {} chars)",
    body: "Provide a longer description of the change (press enter to skip)",
    is_breaking: "Are there any breaking changes?",
    breaking_body: "A BREAKING CHANGE commit requires a body. Please enter a longer description of the commit itself",
    breaking: "Describe the breaking changes",
    is_issue_affected: "Does this change affect any open issues?",
    issues_body: "If issues are closed, the commit requires a body. Please enter a longer description of the commit itself",
    issues: "Add issue references (e.g. \"fix #123\", \"re #123\".)",
    empty_subject: "subject is required",
    subject_too_long: "Subject length must be less than or equal to {limit} characters. Current length is {actual} characters.",
    missing_breaking_subject: "Body is required for BREAKING CHANGE",
};

static ZH: Catalog = Catalog {
    select_type: "选择你的提交类型",
    scope: "更改的范围是什么？ (例如组件或文件名) (按回车跳过)",
    subject: "为这次提交增加个简短的主题 (max {} chars)",
    body: "提供此次更改的详细说明或描述 (按回车跳过)",
    is_breaking: "是否有重大或者破坏性更新？",
    breaking_body: "重大更新提交需要一个主题. 请输入具体一些的关于重大更新本身的主题描述",
    breaking: "为这个重大更新添加描述",
    is_issue_affected: "这次提交是否关联或者影响到已打开的issue?",
    issues_body: "如果了关闭issues, 请为这个提交添加一个有关关闭问题本身的具体的主题描述",
    issues: "添加问题参考 (例如： \"fix #123\", \"re #123\".)",
    empty_subject: "必须填写主题",
    subject_too_long: "主题长度必须小于或等于 {limit} 个字符。 当前字符是 {actual} 个",
    missing_breaking_subject: "需要添加主题才能继续进行",
};
