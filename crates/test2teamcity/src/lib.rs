//! test2teamcity library
//!
//! This module exports the driver pieces of the `test2teamcity` binary for
//! use in integration tests.

pub mod config;
pub mod observability;
pub mod pump;
