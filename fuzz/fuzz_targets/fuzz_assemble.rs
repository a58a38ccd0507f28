// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use commitprompt::domain::Answers;
use commitprompt::services::format::{assemble, filter_scope, filter_subject};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let mut parts = data.splitn(4, '\u{0}');
    let subject = parts.next().unwrap_or_default();
    let scope = parts.next().unwrap_or_default();
    let body = parts.next().unwrap_or_default();
    let breaking = parts.next().unwrap_or_default();

    let answers = Answers {
        commit_type: "feat".into(),
        scope: filter_scope(scope, false),
        subject: filter_subject(subject, false),
        body: body.to_string(),
        is_breaking: !breaking.is_empty(),
        breaking: Some(breaking.to_string()),
        ..Answers::default()
    };
    let message = assemble(&answers, 72);
    assert!(message.starts_with("feat"));
});
