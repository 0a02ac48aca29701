use std::path::PathBuf;

use tileseam::image::ImageError;
use tileseam::io::IoError;

/// Which side of the conversion a file format was checked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The file is read.
    Input,
    /// The file is written.
    Output,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Direction::Input => write!(f, "input"),
            Direction::Output => write!(f, "output"),
        }
    }
}

/// An error type for the command line tool.
///
/// The `Display` output is the exact line printed to the user.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Missing or malformed arguments.
    #[error("{0}")]
    Usage(String),

    /// No codec handles the file extension.
    #[error("Error: \"{extension}\" is not a supported {direction} file format")]
    Format {
        /// The offending extension.
        extension: String,
        /// Whether the file was to be read or written.
        direction: Direction,
    },

    /// A numeric option is out of range.
    #[error("Error: {option} {problem}")]
    Value {
        /// Human readable option name, e.g. `tile width`.
        option: &'static str,
        /// What is wrong with the value.
        problem: &'static str,
    },

    /// The input could not be decoded.
    #[error("Error: could not load file: {}", path.display())]
    Load {
        /// The input path.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: IoError,
    },

    /// The output could not be encoded or written.
    #[error("Error: could not write file: {}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: IoError,
    },

    /// The tiles could not be padded.
    #[error("Error: could not pad tiles: {0}")]
    Pad(#[from] ImageError),
}

impl CliError {
    /// Process exit code for the error.
    pub fn exit_code(&self) -> i32 {
        -1
    }
}
