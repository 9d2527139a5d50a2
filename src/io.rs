//! Reads a file into a `LineSet`. Files are read through a buffered reader
//! with the ability to decode UTF-16, so callers only ever see UTF-8 lines.
use bstr::{io::BufReadExt, ByteSlice};
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};
use tracing::debug;

use crate::error::Error;
use crate::set::{LineSet, LineTerminator};

/// Load the lines of the file at `path` into a `LineSet`, one element per
/// distinct line.
///
/// Fails with `Error::FileAccess` if the file can't be opened, and with
/// `Error::Read` if reading fails or a line is not valid UTF-8. The file is
/// closed before this returns, whatever the outcome.
pub fn load_line_set(path: &Path) -> Result<LineSet, Error> {
    let file = File::open(path)
        .map_err(|source| Error::FileAccess { path: path.to_owned(), source })?;
    let set = line_set_from_reader(file)
        .map_err(|source| Error::Read { path: path.to_owned(), source })?;
    debug!(path = %path.display(), lines = set.len(), "loaded line set");
    Ok(set)
}

/// Scan `reader` into a `LineSet`. A line is zero or more bytes followed by
/// `\n` or `\r\n`; the last line needn't have a terminator, and loses a
/// trailing `\r` if it has none.
pub fn line_set_from_reader(reader: impl Read) -> io::Result<LineSet> {
    let mut reader = BufReader::new(
        DecodeReaderBytesBuilder::new()
            .bom_sniffing(true) // Look at the BOM to detect UTF-16 files and convert to UTF-8
            .strip_bom(true) // Remove the BOM before sending data to us
            .utf8_passthru(true) // Don't transcode UTF-8; we validate each line ourselves
            .build(reader),
    );

    let mut set = LineSet::default();
    let mut line_number = 0_usize;
    reader.for_byte_line_with_terminator(|line| {
        line_number += 1;
        let (line, terminator) = split_terminator(line);
        if line_number == 1 {
            set.set_line_terminator(terminator);
        }
        let line = line.to_str().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {line_number} is not valid UTF-8: {e}"),
            )
        })?;
        set.insert(line.to_owned());
        Ok(true)
    })?;
    Ok(set)
}

/// Split `line` into its text and its terminator. An unterminated last line
/// counts as `\n`-terminated, and loses one trailing `\r` like any other.
fn split_terminator(line: &[u8]) -> (&[u8], LineTerminator) {
    let Some(line) = line.strip_suffix(b"\n") else {
        return (line.strip_suffix(b"\r").unwrap_or(line), LineTerminator::Lf);
    };
    match line.strip_suffix(b"\r") {
        Some(line) => (line, LineTerminator::CrLf),
        None => (line, LineTerminator::Lf),
    }
}
