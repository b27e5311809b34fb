use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::session::Session;

/// Printed before every line read.
pub const PROMPT: &str = ">> ";

/// Typing this on its own line ends the session.
pub const QUIT_COMMAND: &str = ".quit";

/// Runs the read-eval-print loop until `.quit` or end of input.
///
/// Each line is parsed and evaluated as a separate program in one shared
/// session. A produced value is written as its rendering followed by a
/// newline; a line that produces no value writes nothing. Syntax errors are
/// written to `output` and the loop continues.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `output`.
///
/// # Example
/// ```
/// use turtls::repl::start;
///
/// let input = b"let x = 5;\nx * 2\n.quit\nx\n";
/// let mut output = Vec::new();
/// start(&input[..], &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), ">> >> 10\n>> ");
/// ```
pub fn start<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut session = Session::new();
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("end of input");
            return Ok(());
        };

        if line.trim_end() == QUIT_COMMAND {
            debug!("quit requested");
            return Ok(());
        }

        match session.run(&line) {
            Ok(Some(value)) => writeln!(output, "{value}")?,
            Ok(None) => {},
            Err(error) => writeln!(output, "{error}")?,
        }
    }
}
