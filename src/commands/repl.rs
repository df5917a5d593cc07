//! Read-eval-print loop over any line source.

use super::handlers::{Assistant, Reply};
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run the dialogue until `close`/`exit` or end of input.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` are returned.
pub fn run<R: BufRead, W: Write>(assistant: &mut Assistant, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{}", WELCOME)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                tracing::info!("End of input, closing session");
                writeln!(output)?;
                break;
            }
        };

        match assistant.handle_line(&line) {
            Reply::Message(text) => writeln!(output, "{}", text)?,
            Reply::Exit(text) => {
                writeln!(output, "{}", text)?;
                break;
            }
            Reply::Silent => {}
        }
    }

    output.flush()
}
