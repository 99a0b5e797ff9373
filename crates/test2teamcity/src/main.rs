//! test2teamcity: report `go test -json` results to TeamCity
//!
//! Reads test events from stdin (or `--input`) and writes TeamCity service
//! messages to stdout (or `--output`).

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use test2teamcity::config::Config;
use test2teamcity::observability::init_tracing;
use test2teamcity::pump::translate_stream;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(config.log_level());

    config.validate().context("invalid configuration")?;

    let mut reader = config.open_input()?;
    let mut writer = config.open_output()?;

    debug!(
        input = %config.input_name(),
        output = %config.output_name(),
        "translating go test events"
    );

    let stats = translate_stream(&mut *reader, &mut *writer)
        .with_context(|| format!("failed translating {}", config.input_name()))?;

    info!(
        lines = stats.lines,
        messages = stats.messages,
        "finished translating test events"
    );

    Ok(())
}
