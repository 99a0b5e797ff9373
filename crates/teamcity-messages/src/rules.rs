// Copyright (c) 2026 - present test2teamcity contributors
// SPDX-License-Identifier: MIT

//! The ordered rule table
//!
//! Rules are tried top to bottom and the first one that fires decides what
//! happens to the record. A rule fires when either
//!
//! - its action filter equals the record's action and its prefix filter is
//!   unset or matches, or
//! - its prefix filter matches, whatever the action.
//!
//! Both filters are tested against the cleaned (escaped, marker-stripped)
//! output, so the table must stay an ordered list: keying it by action would
//! break precedence between the prefix rules.

use crate::event::Action;

/// What a firing rule produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// `testStarted`
    Started,
    /// `testIgnored`
    Ignored,
    /// `testFinished` with the elapsed time
    Finished,
    /// `testFailed` with the cleaned output as details
    Failed,
    /// `testStdOut` with the leading indent removed
    StdOut,
    /// `testStdErr` with the cleaned output
    StdErr,
    /// Nothing; the record is consumed silently
    Suppress,
}

/// One entry of the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Action the record must carry, if any
    pub action: Option<Action>,
    /// Literal prefix of the cleaned output, if any
    pub prefix: Option<&'static str>,
    /// What to produce when the rule fires
    pub emission: Emission,
}

impl Rule {
    const fn on_action(action: Action, emission: Emission) -> Self {
        Self {
            action: Some(action),
            prefix: None,
            emission,
        }
    }

    const fn on_output(prefix: &'static str, emission: Emission) -> Self {
        Self {
            action: Some(Action::Output),
            prefix: Some(prefix),
            emission,
        }
    }

    /// Whether the action filter is set and equals `action`
    #[must_use]
    pub fn matches_action(&self, action: Action) -> bool {
        self.action == Some(action)
    }

    /// Whether the prefix filter is set and prefixes `output`
    #[must_use]
    pub fn matches_prefix(&self, output: &str) -> bool {
        self.prefix.is_some_and(|prefix| output.starts_with(prefix))
    }

    /// Whether this rule fires for a record
    #[must_use]
    pub fn fires(&self, action: Action, cleaned_output: &str) -> bool {
        let by_action = self.matches_action(action)
            && (self.prefix.is_none() || self.matches_prefix(cleaned_output));
        by_action || self.matches_prefix(cleaned_output)
    }
}

/// Indent `go test` puts in front of test log lines
pub const OUTPUT_INDENT: &str = "    ";

/// Result markers stripped from output before matching, tried in order
pub const RESULT_MARKERS: [&str; 4] = ["--- PASS: ", "--- FAIL: ", "--- SKIP: ", "--- BENCH: "];

/// Rule table, in evaluation order
pub static RULES: [Rule; 15] = [
    Rule::on_action(Action::Run, Emission::Started),
    Rule::on_action(Action::Skip, Emission::Ignored),
    Rule::on_action(Action::Pass, Emission::Finished),
    Rule::on_action(Action::Fail, Emission::Failed),
    Rule::on_output(OUTPUT_INDENT, Emission::StdOut),
    Rule::on_output("=== RUN   ", Emission::Suppress),
    Rule::on_output("=== PAUSE ", Emission::Suppress),
    Rule::on_output("=== CONT  ", Emission::Suppress),
    Rule::on_output("--- PASS: ", Emission::Suppress),
    Rule::on_output("--- FAIL: ", Emission::Suppress),
    Rule::on_output("--- SKIP: ", Emission::Suppress),
    Rule::on_output("FAIL", Emission::Suppress),
    Rule::on_output("?   \t", Emission::Suppress),
    Rule::on_output("testing: warning: no tests to run", Emission::StdErr),
    Rule::on_output("exit status ", Emission::StdErr),
];

/// Find the first rule that fires, with its position in [`RULES`]
#[must_use]
pub fn first_match(action: Action, cleaned_output: &str) -> Option<(usize, &'static Rule)> {
    RULES
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.fires(action, cleaned_output))
}

/// Remove the first occurrence of the first result marker found in `output`
#[must_use]
pub fn strip_result_marker(output: &str) -> String {
    RESULT_MARKERS
        .iter()
        .copied()
        .find(|marker| output.contains(marker))
        .map_or_else(|| output.to_string(), |marker| output.replacen(marker, "", 1))
}
