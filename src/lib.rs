//! `lineset` treats each of two files as a set of lines and prints their
//! intersection, union, or difference.
//!
//! The `exec` function is the kernel of the application: the `io` module
//! reads each file into a `LineSet`, and the `operations` module does the set
//! algebra. The `args` module parses the command line, and the `report`
//! module shows the outcome.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod calculate;
pub mod error;
pub mod io;
pub mod logging;
pub mod operations;
pub mod report;
pub mod set;
pub mod styles;

pub use crate::calculate::{exec, Request};
pub use crate::error::{Error, Invalid};
pub use crate::set::LineSet;
