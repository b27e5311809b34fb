use std::{io, path::PathBuf};

use thiserror::Error;

use crate::error::ParseError;

/// Failures of the front end before or around evaluation.
///
/// Evaluation failures are not represented here: they are ordinary
/// [`Value::Error`](crate::interpreter::value::core::Value::Error) results.
#[derive(Debug, Error)]
pub enum RunError {
    /// The script file could not be read.
    #[error("Failed to read the input file '{}': {source}", path.display())]
    Io {
        /// Path of the script.
        path:   PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// Script files must use the `.turtls` extension.
    #[error("Please provide a file with the .{} extension, found '{}'.", crate::SCRIPT_EXTENSION, path.display())]
    WrongExtension {
        /// Path of the rejected script.
        path: PathBuf,
    },
    /// The script failed to tokenize or parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
