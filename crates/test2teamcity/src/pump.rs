//! Line pump between the input stream and the translator
//!
//! The pump hands every non-empty input line to a processing function and
//! stops at end of input or at the first empty line. Whatever the function
//! writes is forwarded verbatim and flushed straight away, so CI picks up
//! each result as soon as the test runner reports it.

use std::io::{self, BufRead, Write};

use teamcity_messages::TranslateError;
use tracing::debug;

/// Counters for one pump run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpStats {
    /// Non-empty lines handed to the processor
    pub lines: usize,
    /// Lines for which the processor wrote a message
    pub messages: usize,
}

/// Errors that stop the pump
#[derive(Debug, thiserror::Error)]
pub enum PumpError {
    /// Reading the input failed
    #[error("Failed to read input: {0}")]
    Read(#[source] io::Error),

    /// Flushing the output failed
    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),

    /// The processor reported an error
    #[error(transparent)]
    Translate(#[from] TranslateError),
}

/// Feed `reader` line by line to `process`, which writes into `writer`.
///
/// Trailing `\r\n` or `\n` is removed before a line is processed and
/// invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// Returns `PumpError` on the first read, write or processing failure.
pub fn pump<R, W, F>(reader: &mut R, writer: &mut W, mut process: F) -> Result<PumpStats, PumpError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
    F: FnMut(&str, &mut W) -> Result<bool, TranslateError>,
{
    let mut stats = PumpStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(PumpError::Read)? == 0 {
            debug!("end of input");
            break;
        }

        let line = trim_line_ending(&buf);
        if line.is_empty() {
            debug!(line = stats.lines + 1, "empty line, stopping");
            break;
        }

        stats.lines += 1;
        let line = String::from_utf8_lossy(line);
        if process(&line, writer)? {
            stats.messages += 1;
            writer.flush().map_err(PumpError::Write)?;
        }
    }

    Ok(stats)
}

/// Run the `go test -json` translator over a whole stream
///
/// # Errors
///
/// Returns `PumpError` on the first read or write failure.
pub fn translate_stream<R, W>(reader: &mut R, writer: &mut W) -> Result<PumpStats, PumpError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let stats = pump(reader, writer, |line, sink| teamcity_messages::process(line, sink))?;
    writer.flush().map_err(PumpError::Write)?;
    Ok(stats)
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}
