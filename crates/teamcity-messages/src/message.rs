// Copyright (c) 2026 - present test2teamcity contributors
// SPDX-License-Identifier: MIT

//! TeamCity service messages
//!
//! Every message shares one layout:
//!
//! ```text
//! ##teamcity[<kind> flowId='<name>' timestamp='<ts>' name='<name>' <attributes>]
//! ```
//!
//! Values are written as given; callers escape them with [`crate::escape`]
//! before building a message.

use std::fmt;

use chrono::{DateTime, FixedOffset};

/// `chrono` pattern for `YYYY-MM-DDThh:mm:ss.mmm`. `%.3f` truncates.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Timestamp of events that carry no `Time`
pub const ZERO_TIMESTAMP: &str = "0001-01-01T00:00:00.000";

/// Kind of service message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// A test began
    TestStarted,
    /// A test was skipped
    TestIgnored,
    /// A test passed
    TestFinished,
    /// A test or package failed
    TestFailed,
    /// Standard output captured from a test
    TestStdOut,
    /// Diagnostic output reported as standard error
    TestStdErr,
}

impl MessageKind {
    /// Message name as TeamCity expects it
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TestStarted => "testStarted",
            Self::TestIgnored => "testIgnored",
            Self::TestFinished => "testFinished",
            Self::TestFailed => "testFailed",
            Self::TestStdOut => "testStdOut",
            Self::TestStdErr => "testStdErr",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `##teamcity[...]` line, without its terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceMessage {
    /// Message kind
    pub kind: MessageKind,
    /// Escaped display name, used for both `flowId` and `name`
    pub name: String,
    /// Formatted timestamp
    pub timestamp: String,
    /// Extra attributes in emission order, values already escaped
    pub attributes: Vec<(&'static str, String)>,
}

impl ServiceMessage {
    /// Create a message with no extra attributes
    #[must_use]
    pub fn new(kind: MessageKind, name: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            timestamp: timestamp.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an extra attribute
    #[must_use]
    pub fn with_attribute(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    /// Look up an extra attribute by key
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `testStarted`, with standard output capture disabled
    #[must_use]
    pub fn test_started(name: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(MessageKind::TestStarted, name, timestamp)
            .with_attribute("captureStandardOutput", "false")
    }

    /// `testIgnored`
    #[must_use]
    pub fn test_ignored(name: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(MessageKind::TestIgnored, name, timestamp)
    }

    /// `testFinished` with a duration in milliseconds
    #[must_use]
    pub fn test_finished(name: impl Into<String>, timestamp: impl Into<String>, duration_ms: u64) -> Self {
        Self::new(MessageKind::TestFinished, name, timestamp)
            .with_attribute("duration", duration_ms.to_string())
    }

    /// `testFailed` with failure details
    #[must_use]
    pub fn test_failed(
        name: impl Into<String>,
        timestamp: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::new(MessageKind::TestFailed, name, timestamp).with_attribute("details", details)
    }

    /// `testStdOut` carrying captured output
    #[must_use]
    pub fn test_std_out(name: impl Into<String>, timestamp: impl Into<String>, out: impl Into<String>) -> Self {
        Self::new(MessageKind::TestStdOut, name, timestamp).with_attribute("out", out)
    }

    /// `testStdErr` carrying captured output
    #[must_use]
    pub fn test_std_err(name: impl Into<String>, timestamp: impl Into<String>, out: impl Into<String>) -> Self {
        Self::new(MessageKind::TestStdErr, name, timestamp).with_attribute("out", out)
    }
}

impl fmt::Display for ServiceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "##teamcity[{} flowId='{}' timestamp='{}' name='{}'",
            self.kind, self.name, self.timestamp, self.name
        )?;
        for (key, value) in &self.attributes {
            write!(f, " {key}='{value}'")?;
        }
        f.write_str("]")
    }
}

/// Format an event time as `YYYY-MM-DDThh:mm:ss.mmm` in its own offset.
///
/// A missing time formats as [`ZERO_TIMESTAMP`].
#[must_use]
pub fn format_timestamp(time: Option<&DateTime<FixedOffset>>) -> String {
    match time {
        Some(time) => time.format(TIMESTAMP_FORMAT).to_string(),
        None => ZERO_TIMESTAMP.to_string(),
    }
}

/// Convert elapsed seconds to whole milliseconds, truncating.
///
/// Negative and non-finite values clamp to zero.
#[must_use]
pub fn duration_millis(elapsed_secs: f64) -> u64 {
    let millis = (elapsed_secs * 1000.0).floor();
    if millis.is_finite() && millis > 0.0 {
        millis as u64
    } else {
        0
    }
}
