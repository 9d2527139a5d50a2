//! Code to parse the command line using `clap`, and definitions of the
//! parsed result

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use crate::calculate::Request;
use crate::error::Invalid;

/// Returns the parsed command line.
#[must_use]
pub fn parsed() -> Args {
    Args::parse()
}

/// The set operation requested
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OpName {
    /// Print the lines present in both files
    Intersect,
    /// Print the lines present in either file
    Union,
    /// Print the lines present in the first file but not the second
    Diff,
}

impl FromStr for OpName {
    type Err = Invalid;

    /// Accepts the English names (and their long forms) in any ASCII case,
    /// and the labels 交集, 并集 and 差集.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "intersect" | "intersection" | "交集" => Ok(OpName::Intersect),
            "union" | "并集" => Ok(OpName::Union),
            "diff" | "difference" | "差集" => Ok(OpName::Diff),
            _ => Err(Invalid::UnknownOperation(name.to_string())),
        }
    }
}

/// When to color error messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color if stderr supports it
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// `Args` contains the parsed command line.
#[derive(Debug, Parser)]
#[command(name = "lineset", version, about, long_about = None)]
pub struct Args {
    /// Operation: intersect, union, or diff (lines of FILE1 not in FILE2)
    #[arg(value_name = "OP")]
    pub op: Option<String>,

    /// First input file
    #[arg(value_name = "FILE1")]
    pub first: Option<PathBuf>,

    /// Second input file
    #[arg(value_name = "FILE2")]
    pub second: Option<PathBuf>,

    /// Print the result sorted instead of in first-seen order
    #[arg(long)]
    pub sort: bool,

    /// Write the result to PATH instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// When to color error messages
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The calculation the command line asks for
    #[must_use]
    pub fn request(&self) -> Request {
        Request { op: self.op.clone(), first: self.first.clone(), second: self.second.clone() }
    }
}
