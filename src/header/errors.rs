/// Errors from the header generation layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while parsing a command or writing a header.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// No command was supplied at all.
    #[error("Usage: xsigma-headers <command> [output_file] [variant]")]
    Usage,

    /// The command is not recognized, or is missing its output path.
    #[error("Unknown command: {command}")]
    UnknownCommand {
        /// The command token as given on the command line.
        command: String,
    },

    /// Creating or writing the output file failed.
    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        /// The output path that could not be written.
        path: PathBuf,
        /// The underlying filesystem error.
        source: std::io::Error,
    },
}

/// Exit code mapping for `HeaderError` variants.
impl HeaderError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage | Self::UnknownCommand { .. } | Self::Io { .. } => 1,
        }
    }

    /// Whether the message belongs on stdout in text mode.
    ///
    /// Argument errors have always been printed to stdout by this tool;
    /// filesystem failures go to stderr.
    #[must_use]
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::Usage | Self::UnknownCommand { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_message() {
        let err = HeaderError::UnknownCommand {
            command: "bogus".to_owned(),
        };
        assert_eq!(err.to_string(), "Unknown command: bogus");
        assert_eq!(err.exit_code(), 1);
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_usage_message() {
        assert!(HeaderError::Usage.to_string().starts_with("Usage: "));
        assert_eq!(HeaderError::Usage.exit_code(), 1);
    }

    #[test]
    fn test_io_error_is_not_argument_error() {
        let err = HeaderError::Io {
            path: PathBuf::from("missing/out.h"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(!err.is_argument_error());
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("missing/out.h"));
    }
}
