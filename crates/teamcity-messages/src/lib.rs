// Copyright (c) 2026 - present test2teamcity contributors
// SPDX-License-Identifier: MIT

//! teamcity-messages: go test events to TeamCity service messages
//!
//! This library crate decodes the line-delimited JSON produced by
//! `go test -json` and turns each record into at most one
//! `##teamcity[...]` service message.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use teamcity_messages::translate;
//!
//! let line = r#"{"Time":"2018-07-07T22:58:04.6231601+03:00","Action":"run","Package":"p","Test":"T"}"#;
//! let message = translate(line).expect("run records always emit");
//! assert_eq!(
//!     message.to_string(),
//!     "##teamcity[testStarted flowId='p.T' timestamp='2018-07-07T22:58:04.623' name='p.T' captureStandardOutput='false']"
//! );
//! ```

pub mod error;
pub mod escape;
pub mod event;
pub mod message;
pub mod rules;
pub mod translator;

pub use error::TranslateError;
pub use escape::escape;
pub use event::{Action, EventRecord};
pub use message::{MessageKind, ServiceMessage};
pub use rules::{Emission, RULES, Rule};
pub use translator::{Outcome, evaluate, process, translate};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::TranslateError;
    pub use crate::event::{Action, EventRecord};
    pub use crate::message::ServiceMessage;
    pub use crate::translator::{Outcome, process, translate};
}
