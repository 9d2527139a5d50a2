//! Provides the `LineSet` structure: the lines of one file, each kept once.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use std::io;

type Lines = IndexSet<String, FxBuildHasher>;

/// A `LineSet` is a set of lines, each line represented as an element of an
/// `IndexSet`.
/// * Lines iterate in the order they were first inserted. Nothing depends on
///   that order for correctness, but it makes output reproducible.
/// * Equality is set equality: two `LineSet`s with the same lines are equal
///   whatever their order or line terminator.
/// * A `LineSet` loaded from a file also remembers the line terminator used on
///   that file's first line. On output, the `LineSet` uses the same terminator.
#[derive(Debug, Clone, Default)]
pub struct LineSet {
    lines: Lines,
    line_terminator: LineTerminator,
}

/// The line terminator used when writing a `LineSet`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineTerminator {
    fn as_bytes(self) -> &'static [u8] {
        match self {
            LineTerminator::Lf => b"\n",
            LineTerminator::CrLf => b"\r\n",
        }
    }
}

impl LineSet {
    /// An empty set that will be written with `line_terminator`.
    #[must_use]
    pub fn with_terminator(line_terminator: LineTerminator) -> Self {
        LineSet { lines: Lines::default(), line_terminator }
    }

    pub(crate) fn set_line_terminator(&mut self, line_terminator: LineTerminator) {
        self.line_terminator = line_terminator;
    }

    /// Insert `line`, returning `false` if it was already present.
    pub(crate) fn insert(&mut self, line: String) -> bool {
        self.lines.insert(line)
    }

    /// `IndexSet`'s `.retain` is `O(n)` and preserves the order of the
    /// remaining lines.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&String) -> bool) {
        self.lines.retain(keep);
    }

    /// Does the set hold `line`?
    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    /// Number of distinct lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Is the set empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// The terminator `output_to` will write after each line.
    #[must_use]
    pub fn line_terminator(&self) -> LineTerminator {
        self.line_terminator
    }

    /// Reorder the lines bytewise. The set itself doesn't change.
    pub fn sort(&mut self) {
        self.lines.sort();
    }

    /// Output the `LineSet`'s lines, each followed by the line terminator.
    pub fn output_to(&self, mut out: impl io::Write) -> io::Result<()> {
        let terminator = self.line_terminator.as_bytes();
        for line in &self.lines {
            out.write_all(line.as_bytes())?;
            out.write_all(terminator)?;
        }
        out.flush()
    }
}

impl PartialEq for LineSet {
    fn eq(&self, other: &Self) -> bool {
        self.lines == other.lines
    }
}
impl Eq for LineSet {}

impl Extend<String> for LineSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}

impl FromIterator<String> for LineSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        LineSet { lines: iter.into_iter().collect(), line_terminator: LineTerminator::default() }
    }
}

impl<'a> FromIterator<&'a str> for LineSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<indexmap::set::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter().map(String::as_str as fn(&String) -> &str)
    }
}
