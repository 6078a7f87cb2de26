use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Extracts the quality lines from a FASTQ file.
///
/// The scan is marker-driven rather than record-indexed: whenever a line
/// starts with `+`, the *next* line is taken verbatim as a quality string,
/// and every other line is discarded. This accepts the same input shapes as
/// a strict 4-line-per-record parser for well-formed files, but also
/// tolerates (and silently mis-scores) malformed ones, which is the
/// documented contract.
///
/// Lines are raw byte strings. Quality data is not required to be UTF-8;
/// arbitrary bytes pass through untouched and score like any other.
///
/// # Errors
///
/// This function will return an error if the file cannot be opened or read.
pub fn quality_lines(input: &str) -> Result<Vec<Vec<u8>>> {
    let file = File::open(input).context("Unable to open the input file.")?;
    quality_lines_from(BufReader::new(file))
}

/// Marker-driven quality-line scan over any buffered reader.
///
/// A `+` line at end-of-file still yields a quality string: the missing next
/// line is treated as empty, matching how the tool has always behaved on
/// truncated files.
pub fn quality_lines_from<R: BufRead>(mut reader: R) -> Result<Vec<Vec<u8>>> {
    let mut quality = Vec::new();
    let mut line = Vec::new();

    while read_line(&mut reader, &mut line)? {
        // an empty line has no first byte and is simply skipped
        if line.first() == Some(&b'+') {
            read_line(&mut reader, &mut line)?;
            quality.push(line.clone());
        }
    }

    Ok(quality)
}

/// Reads one line into `buf` with the terminator (`\n` or `\r\n`) stripped.
/// Returns `false` once the reader is exhausted, leaving `buf` empty.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<bool> {
    buf.clear();
    let n = reader.read_until(b'\n', buf)?;
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(n > 0)
}
