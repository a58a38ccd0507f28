// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use commitprompt::services::wrap::wrap;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&width, rest)) = data.split_first() else {
        return;
    };
    if let Ok(text) = std::str::from_utf8(rest) {
        let width = usize::from(width);
        for line in wrap(text, width).lines() {
            assert!(line.chars().count() <= width.max(1) || !line.contains(char::is_whitespace));
        }
    }
});
