// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use commitprompt::ValidationError;
use commitprompt::domain::Answers;
use commitprompt::services::format::{
    assemble, filter_scope, filter_subject, format_breaking, header_length, max_summary_length,
    paint, subject_feedback, validate_breaking_body, validate_subject,
};
use proptest::prelude::*;

fn answers(commit_type: &str, scope: &str) -> Answers {
    Answers {
        commit_type: commit_type.into(),
        scope: scope.into(),
        ..Answers::default()
    }
}

// ─── Header budget ───────────────────────────────────────────────────────────

#[test]
fn header_length_without_scope() {
    // "feat" + ": "
    assert_eq!(header_length("feat", None), 6);
}

#[test]
fn header_length_with_scope() {
    // "feat" + "(api)" + ": "
    assert_eq!(header_length("feat", Some("api")), 11);
}

#[test]
fn empty_scope_costs_nothing() {
    assert_eq!(header_length("fix", Some("")), header_length("fix", None));
}

#[test]
fn summary_budget_follows_type_and_scope() {
    assert_eq!(max_summary_length(100, &answers("feat", "")), 94);
    assert_eq!(max_summary_length(100, &answers("feat", "api")), 89);
}

#[test]
fn summary_budget_saturates_at_zero() {
    assert_eq!(max_summary_length(5, &answers("refactor", "core")), 0);
}

// ─── Subject / scope filters ─────────────────────────────────────────────────

#[test]
fn filter_subject_normalizes() {
    assert_eq!(filter_subject("  Add Foo.. ", false), "add Foo");
}

#[test]
fn filter_subject_keeps_case_when_disabled() {
    assert_eq!(filter_subject("  Add Foo.. ", true), "Add Foo");
}

#[test]
fn filter_subject_only_dots() {
    assert_eq!(filter_subject(" ... ", false), "");
}

#[test]
fn filter_subject_lowercases_non_ascii_first_char() {
    assert_eq!(filter_subject("Élan vital", false), "élan vital");
}

#[test]
fn filter_subject_strips_periods_once() {
    // Trimming happens first, so whitespace between periods survives
    assert_eq!(filter_subject("Fix bug. .", false), "fix bug. ");
    assert_eq!(
        validate_subject("Fix bug. .", false, 100, &answers("feat", "")),
        Ok(())
    );
}

#[test]
fn assemble_keeps_subject_as_stored() {
    let a = Answers {
        subject: filter_subject("Fix bug. .", false),
        ..answers("feat", "")
    };
    assert_eq!(assemble(&a, 100), "feat: fix bug. ");
}

#[test]
fn filter_scope_trims_and_lowercases() {
    assert_eq!(filter_scope("  API ", false), "api");
    assert_eq!(filter_scope("  API ", true), "API");
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[test]
fn subject_exactly_at_budget_passes() {
    // 22 - len("feat: ") = 16
    let a = answers("feat", "");
    assert_eq!(validate_subject("a".repeat(16).as_str(), false, 22, &a), Ok(()));
}

#[test]
fn subject_over_budget_reports_lengths() {
    let a = answers("feat", "");
    let err = validate_subject("a".repeat(17).as_str(), false, 22, &a).unwrap_err();
    assert_eq!(
        err,
        ValidationError::SubjectTooLong {
            limit: 16,
            actual: 17
        }
    );
    assert!(err.to_string().contains("17"));
    assert!(err.to_string().contains("16"));
}

#[test]
fn subject_is_measured_after_filtering() {
    // Trailing periods and padding do not count against the budget
    let a = answers("feat", "");
    let subject = format!("  {}... ", "a".repeat(16));
    assert_eq!(validate_subject(&subject, false, 22, &a), Ok(()));
}

#[test]
fn empty_subject_is_rejected() {
    let a = answers("feat", "");
    assert_eq!(
        validate_subject("  . ", false, 100, &a),
        Err(ValidationError::EmptySubject)
    );
}

#[test]
fn breaking_body_must_not_be_blank() {
    assert_eq!(
        validate_breaking_body("   "),
        Err(ValidationError::MissingBreakingSubject)
    );
    assert_eq!(validate_breaking_body("-"), Ok(()));
}

// ─── Live feedback ───────────────────────────────────────────────────────────

#[test]
fn feedback_shows_filtered_length_and_raw_input() {
    let a = answers("feat", "");
    let text = subject_feedback("Add Foo.", false, 100, &a);
    assert_eq!(console::strip_ansi_codes(&text), "(7) Add Foo.");
}

#[test]
fn paint_colours_by_budget() {
    console::set_colors_enabled(true);
    assert!(paint("ok", true).starts_with("\u{1b}[32m"));
    assert!(paint("long", false).starts_with("\u{1b}[31m"));
    assert_eq!(console::strip_ansi_codes(&paint("ok", true)), "ok");
}

// ─── Breaking change block ───────────────────────────────────────────────────

#[test]
fn breaking_prefix_is_added() {
    insta::assert_snapshot!(
        format_breaking("api changed", 100).unwrap(),
        @"BREAKING CHANGE: api changed"
    );
}

#[test]
fn breaking_prefix_is_not_duplicated() {
    let expected = Some("BREAKING CHANGE: foo".to_string());
    assert_eq!(format_breaking("BREAKING CHANGE: foo", 100), expected);
    assert_eq!(format_breaking("breaking change: foo", 100), expected);
    assert_eq!(format_breaking("  BREAKING CHANGE:   foo  ", 100), expected);
}

#[test]
fn blank_breaking_is_omitted() {
    assert_eq!(format_breaking("  \t ", 100), None);
}

#[test]
fn breaking_block_is_wrapped() {
    insta::assert_snapshot!(
        format_breaking("the config loader no longer reads json", 30).unwrap(),
        @r"
    BREAKING CHANGE: the config
    loader no longer reads json
    "
    );
}

// ─── Assembly ────────────────────────────────────────────────────────────────

#[test]
fn assemble_header_only() {
    let a = Answers {
        subject: "add X".into(),
        ..answers("feat", "core")
    };
    insta::assert_snapshot!(assemble(&a, 100), @"feat(core): add X");
}

#[test]
fn assemble_all_blocks() {
    let a = Answers {
        subject: "bug".into(),
        body: "line one\nline two".into(),
        is_breaking: true,
        breaking: Some("api changed".into()),
        is_issue_affected: true,
        issues: Some("fix #123".into()),
        ..answers("fix", "")
    };
    insta::assert_snapshot!(assemble(&a, 100), @r"
    fix: bug

    line one
    line two

    BREAKING CHANGE: api changed

    fix #123
    ");
}

#[test]
fn assemble_does_not_reenforce_header_width() {
    let a = Answers {
        subject: "s".repeat(120),
        ..answers("feat", "a-very-long-scope")
    };
    let message = assemble(&a, 72);
    assert_eq!(message.lines().count(), 1);
    assert!(message.chars().count() > 100);
}

#[test]
fn assemble_skips_blank_blocks() {
    let a = Answers {
        subject: "tidy".into(),
        body: "   ".into(),
        breaking: Some(" ".into()),
        issues: Some(String::new()),
        ..answers("chore", "")
    };
    assert_eq!(assemble(&a, 100), "chore: tidy");
}

#[test]
fn assemble_ignores_collected_only_fields() {
    let a = Answers {
        subject: "x".into(),
        breaking_body: Some("why it breaks".into()),
        issues_body: Some("closing".into()),
        ..answers("feat", "")
    };
    assert_eq!(assemble(&a, 100), "feat: x");
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn filtered_subject_never_ends_with_period(raw in ".*", keep_case in any::<bool>()) {
        let filtered = filter_subject(&raw, keep_case);
        prop_assert!(!filtered.ends_with('.'));
    }

    #[test]
    fn validation_never_panics(raw in ".*", width in 0usize..200) {
        let _ = validate_subject(&raw, false, width, &answers("feat", "api"));
    }
}
