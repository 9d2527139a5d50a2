//! What the front end does with the outcome of a calculation.
use is_terminal::IsTerminal;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::set::LineSet;
use crate::styles::StyleSheet;

/// A place to show the outcome of `exec`: either the result set or the
/// error that ended the calculation.
pub trait Report {
    /// Show the result of a successful calculation.
    fn result(&mut self, set: &LineSet) -> io::Result<()>;

    /// Show why a calculation failed.
    fn error(&mut self, error: &Error) -> io::Result<()>;
}

/// Reports to a terminal: results to `out`, one line per element, and
/// errors to `err` as `lineset: error: <message>`.
#[derive(Debug)]
pub struct Terminal<O: io::Write, E: io::Write> {
    out: O,
    err: E,
    style: &'static StyleSheet,
    sort: bool,
}

impl<O: io::Write, E: io::Write> Terminal<O, E> {
    /// If `sort` is set, results are printed in sorted order rather than
    /// first-seen order.
    pub fn new(out: O, err: E, style: &'static StyleSheet, sort: bool) -> Self {
        Terminal { out, err, style, sort }
    }
}

impl<O: io::Write, E: io::Write> Report for Terminal<O, E> {
    fn result(&mut self, set: &LineSet) -> io::Result<()> {
        if self.sort {
            let mut sorted = set.clone();
            sorted.sort();
            sorted.output_to(&mut self.out)
        } else {
            set.output_to(&mut self.out)
        }
    }

    fn error(&mut self, error: &Error) -> io::Result<()> {
        writeln!(
            self.err,
            "{}: {} {error}",
            self.style.app_name("lineset"),
            self.style.error("error:")
        )?;
        self.err.flush()
    }
}

/// Where results go: the file at `path` if there is one, otherwise stdout,
/// buffered unless it's a terminal.
pub fn result_writer(path: Option<&Path>) -> Result<Box<dyn Write>, Error> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(|source| Error::Create { path: path.to_owned(), source })?,
        )),
        None if io::stdout().is_terminal() => Box::new(io::stdout().lock()),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
