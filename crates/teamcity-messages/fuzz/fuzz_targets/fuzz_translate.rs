// Copyright (c) 2026 - present test2teamcity contributors
// SPDX-License-Identifier: MIT

//! Fuzz target for event translation
//!
//! This fuzzes `process`, which decodes one line of `go test -json` output
//! and writes at most one service message.

#![no_main]

use libfuzzer_sys::fuzz_target;

use teamcity_messages::process;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string - invalid UTF-8 should be handled gracefully
    if let Ok(line) = std::str::from_utf8(data) {
        let mut sink = Vec::new();
        let written = process(line, &mut sink).expect("Vec sink never fails");

        // Either nothing, or exactly one terminated line
        if written {
            assert_eq!(sink.iter().filter(|b| **b == b'\n').count(), 1);
            assert_eq!(sink.last(), Some(&b'\n'));
        } else {
            assert!(sink.is_empty());
        }
    }
});
