//! Houses the `exec` function
//!
use std::path::PathBuf;
use tracing::info;

use crate::error::{Error, Invalid};
use crate::io::load_line_set;
use crate::operations::{calculate, selected};
use crate::set::LineSet;

/// Everything one calculation needs: the operation name and the two files.
/// Any of them may be missing, in which case `exec` reports an
/// `Error::InvalidOperation`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Name of the set operation, parsed by `OpName::from_str`
    pub op: Option<String>,
    /// The left operand
    pub first: Option<PathBuf>,
    /// The right operand
    pub second: Option<PathBuf>,
}

/// Loads both files named in `request` and calculates the set operation it
/// names. Each file is treated as a set of lines:
///
/// * `intersect` returns the lines that occur in both files,
/// * `union` returns the lines that occur in either file, and
/// * `diff` returns the lines that occur in the first file but not the second.
///
/// The operation name and both paths are checked before any file is opened.
pub fn exec(request: &Request) -> Result<LineSet, Error> {
    let operation = selected(request.op.as_deref())?;
    let (Some(first), Some(second)) = (&request.first, &request.second) else {
        return Err(Invalid::MissingFile.into());
    };

    let first = load_line_set(first)?;
    let second = load_line_set(second)?;

    let result = calculate(operation, &first, &second);
    info!(
        ?operation,
        first = first.len(),
        second = second.len(),
        result = result.len(),
        "calculated"
    );
    Ok(result)
}
