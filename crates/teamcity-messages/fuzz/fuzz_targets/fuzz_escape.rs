// Copyright (c) 2026 - present test2teamcity contributors
// SPDX-License-Identifier: MIT

//! Fuzz target for attribute escaping

#![no_main]

use libfuzzer_sys::fuzz_target;

use teamcity_messages::escape;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        let escaped = escape(value);
        assert!(!escaped.contains('\n'));
        assert!(escaped.len() >= value.len());
    }
});
