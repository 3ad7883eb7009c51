use std::io::{self, BufRead, Write};

use crate::session::Session;

const PROMPT: &str = ">> ";

/// Runs an interactive read-eval-print loop.
///
/// Every line is run in the same [`Session`], so declarations persist from
/// one line to the next. The value of each line, or its error, is written to
/// `output`; an error never ends the loop. The loop ends at end of input or
/// when a line reads `exit` or `quit`.
///
/// # Example
/// ```
/// use mutex_lang::repl::start;
///
/// let input = "var mut x = 1;\nx = x + 1;\nexit\n";
/// let mut output = Vec::new();
/// start(input.as_bytes(), &mut output).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains(">> 2\n"));
/// ```
pub fn start<R: BufRead, W: Write>(mut input: R, output: &mut W) -> io::Result<()> {
    let mut session = Session::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "quit" {
            writeln!(output, "Exiting...")?;
            return Ok(());
        }
        if trimmed.is_empty() {
            continue;
        }

        match session.run(&line) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(error) => writeln!(output, "{error}")?,
        }
        session.reset_error();
    }
}
