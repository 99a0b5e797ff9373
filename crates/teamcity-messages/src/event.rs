// Copyright (c) 2026 - present test2teamcity contributors
// SPDX-License-Identifier: MIT

//! `go test -json` event records
//!
//! Each line of `go test -json` output is one [`EventRecord`]. Keys are
//! PascalCase and matched case-sensitively; unknown keys are ignored and
//! missing or `null` keys fall back to their zero value.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TranslateError;

/// What happened to a test or package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// The test has started running
    Run,
    /// The test passed
    Pass,
    /// The test or package failed
    Fail,
    /// The test was skipped
    Skip,
    /// The test or package printed output
    Output,
    /// Any other action (`pause`, `cont`, `bench`, ...) or none at all
    #[default]
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Wire name of the action
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Skip => "skip",
            Self::Output => "output",
            Self::Unknown => "unknown",
        }
    }
}

/// A single event from `go test -json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EventRecord {
    /// When the event happened, in the offset the runner reported
    pub time: Option<DateTime<FixedOffset>>,
    /// Event kind
    #[serde(deserialize_with = "null_as_default")]
    pub action: Action,
    /// Import path of the package under test
    #[serde(deserialize_with = "null_as_default")]
    pub package: String,
    /// Test or subtest name; empty for package-level events
    #[serde(deserialize_with = "null_as_default")]
    pub test: String,
    /// Printed output, only on `output` events
    #[serde(deserialize_with = "null_as_default")]
    pub output: String,
    /// Seconds spent, only on terminal events
    #[serde(deserialize_with = "null_as_default")]
    pub elapsed: f64,
    /// Reserved; no rule reads it
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl EventRecord {
    /// Decode a record from one line of `go test -json` output
    ///
    /// # Errors
    ///
    /// Returns `TranslateError::Decode` if the line is not a JSON object
    /// matching the record schema.
    pub fn parse(line: &str) -> Result<Self, TranslateError> {
        serde_json::from_str(line).map_err(TranslateError::from)
    }

    /// Whether this event concerns the package as a whole
    #[must_use]
    pub fn is_package_level(&self) -> bool {
        self.test.is_empty()
    }

    /// Unescaped display name: `package` or `package.test`
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.is_package_level() {
            self.package.clone()
        } else {
            format!("{}.{}", self.package, self.test)
        }
    }
}
