// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! Greedy word wrapping for commit message blocks.
//!
//! Each input line is reflowed on its own: it is trimmed, then words are
//! packed onto lines of at most `width` characters. Words are never split, so
//! a single word longer than `width` gets a line to itself. Blank lines are
//! kept, lines are joined with `\n` and nothing is indented.

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut out: Vec<String> = Vec::new();

    for line in text.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            out.push(String::new());
            continue;
        }
        wrap_line(line, width, &mut out);
    }

    out.join("\n")
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0;
    let mut prev_end = 0;

    for m in WORD.find_iter(line) {
        let word = m.as_str();
        let word_len = word.chars().count();
        // Whitespace between this word and the previous one, kept as typed
        let gap = &line[prev_end..m.start()];
        let gap_len = gap.chars().count();
        prev_end = m.end();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + gap_len + word_len <= width {
            current.push_str(gap);
            current.push_str(word);
            current_len += gap_len + word_len;
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
}
