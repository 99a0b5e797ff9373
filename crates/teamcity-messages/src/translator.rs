// Copyright (c) 2026 - present test2teamcity contributors
// SPDX-License-Identifier: MIT

//! Event translation
//!
//! Turns one line of `go test -json` output into at most one TeamCity
//! service message. Translation is stateless: every line is decoded,
//! matched against [`RULES`](crate::rules::RULES) and then forgotten.
//!
//! # Example
//!
//! ```
//! use teamcity_messages::translator::{Outcome, evaluate};
//!
//! let line = r#"{"Action":"output","Package":"p","Test":"T","Output":"=== RUN   T\n"}"#;
//! assert_eq!(evaluate(line), Outcome::Suppressed { rule: 5 });
//! ```

use std::io::Write;

use tracing::{debug, trace};

use crate::error::TranslateError;
use crate::escape::escape;
use crate::event::EventRecord;
use crate::message::{ServiceMessage, duration_millis, format_timestamp};
use crate::rules::{Emission, OUTPUT_INDENT, first_match, strip_result_marker};

/// What translating a line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A rule fired and produced a message
    Emit(ServiceMessage),
    /// A rule fired but produces no output; `rule` is its index
    Suppressed {
        /// Index of the suppressing rule
        rule: usize,
    },
    /// The line decoded but no rule fired
    Unmatched,
    /// The line is not an event record
    Undecodable,
}

impl Outcome {
    /// The emitted message, if any
    #[must_use]
    pub fn into_message(self) -> Option<ServiceMessage> {
        match self {
            Self::Emit(message) => Some(message),
            _ => None,
        }
    }
}

/// Run a decoded record through the rule table
#[must_use]
pub fn evaluate_record(record: &EventRecord) -> Outcome {
    let cleaned = strip_result_marker(&escape(&record.output));

    let Some((index, rule)) = first_match(record.action, &cleaned) else {
        trace!(action = record.action.as_str(), "no rule matched");
        return Outcome::Unmatched;
    };

    let name = escape(&record.display_name());
    let timestamp = format_timestamp(record.time.as_ref());

    let message = match rule.emission {
        Emission::Started => ServiceMessage::test_started(name, timestamp),
        Emission::Ignored => ServiceMessage::test_ignored(name, timestamp),
        Emission::Finished => {
            ServiceMessage::test_finished(name, timestamp, duration_millis(record.elapsed))
        }
        Emission::Failed => ServiceMessage::test_failed(name, timestamp, cleaned),
        Emission::StdOut => {
            ServiceMessage::test_std_out(name, timestamp, cleaned.replacen(OUTPUT_INDENT, "", 1))
        }
        Emission::StdErr => ServiceMessage::test_std_err(name, timestamp, cleaned),
        Emission::Suppress => {
            trace!(rule = index, "record suppressed");
            return Outcome::Suppressed { rule: index };
        }
    };

    Outcome::Emit(message)
}

/// Decode one line and run it through the rule table
#[must_use]
pub fn evaluate(line: &str) -> Outcome {
    match EventRecord::parse(line) {
        Ok(record) => evaluate_record(&record),
        Err(err) => {
            debug!(error = %err, "skipping line that is not an event record");
            Outcome::Undecodable
        }
    }
}

/// Translate one line into a service message, if a rule emits one
#[must_use]
pub fn translate(line: &str) -> Option<ServiceMessage> {
    evaluate(line).into_message()
}

/// Translate one line and write the resulting message to `sink`.
///
/// Writes either nothing or one complete, newline-terminated line. Returns
/// whether a message was written.
///
/// # Errors
///
/// Returns `TranslateError::Io` if writing to `sink` fails. Lines that do
/// not decode are not errors.
pub fn process<W: Write + ?Sized>(line: &str, sink: &mut W) -> Result<bool, TranslateError> {
    match translate(line) {
        Some(message) => {
            writeln!(sink, "{message}")?;
            Ok(true)
        }
        None => Ok(false),
    }
}
