//! Interactive command layer.
//!
//! Parses input lines into [`Command`]s, runs them against an [`Assistant`]
//! session, and drives the prompt loop.

pub mod handlers;
pub mod parser;
pub mod repl;

pub use handlers::{Assistant, Reply};
pub use parser::Command;
pub use repl::run;
