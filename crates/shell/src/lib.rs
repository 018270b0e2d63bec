//! `shopfront-shell`
//!
//! **Responsibility:** thin terminal front end for the catalog pipeline.
//!
//! Each input line becomes a [`ShellCommand`]; catalog commands are dispatched
//! to the pipeline and the resulting view is rendered as text.

pub mod input;
pub mod render;
pub mod session;

pub use input::{InputError, ShellCommand, parse_line};
pub use session::{Session, Step};
