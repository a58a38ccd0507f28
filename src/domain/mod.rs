// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod answers;
mod commit;
mod locale;

pub use answers::*;
pub use commit::*;
pub use locale::*;
