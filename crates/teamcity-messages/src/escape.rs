// Copyright (c) 2026 - present test2teamcity contributors
// SPDX-License-Identifier: MIT

//! TeamCity attribute value escaping

/// Escape a value for use inside a quoted service message attribute.
///
/// The substitutions run in a fixed order, each over the result of the
/// previous one: `|` first, so the pipes introduced for newlines and
/// brackets are not doubled again.
#[must_use]
pub fn escape(value: &str) -> String {
    value
        .replace('|', "||")
        .replace('\n', "|n")
        .replace('[', "|[")
        .replace(']', "|]")
}
