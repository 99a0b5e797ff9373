// Copyright (c) 2026 - present test2teamcity contributors
// SPDX-License-Identifier: MIT

//! Error types for teamcity-messages

use thiserror::Error;

/// Errors that can occur while translating test events
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The line is not a valid event record
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing a message to the sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
