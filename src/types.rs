/// Shared serializable output types.
///
/// These are what gets reported on stdout/stderr, either as JSON or rendered
/// as a table. They are decoupled from `HeaderKind` and `HeaderError`.
use serde::{Deserialize, Serialize};

use crate::header::{HeaderError, HeaderKind};

/// Report of a single header emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitOutput {
    /// Command that produced the header ("version" or "threads").
    pub header: String,
    /// Output path as given on the command line.
    pub path: String,
    /// Threading backend, threads header only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Include-guard symbol of the generated header.
    pub guard: String,
    /// Size of the rendered header in bytes.
    pub bytes: usize,
    /// Whether this was a dry-run (nothing written).
    pub dry_run: bool,
    /// Rendered header text. Only carried on `--dry-run`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

impl EmitOutput {
    /// Build the report for `kind` destined for `path`.
    ///
    /// `contents` is `Some` only on a dry-run, where nothing was written.
    #[must_use]
    pub fn new(
        kind: HeaderKind,
        path: &std::path::Path,
        bytes: usize,
        contents: Option<String>,
    ) -> Self {
        Self {
            header: kind.name().to_owned(),
            path: path.display().to_string(),
            variant: kind.variant().map(|v| v.as_str().to_owned()),
            guard: kind.guard().to_owned(),
            bytes,
            dry_run: contents.is_some(),
            contents,
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Offending command token, for unknown-command errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `HeaderError`.
    #[must_use]
    pub fn from_header_error(err: &HeaderError) -> Self {
        let (code, command) = match err {
            HeaderError::Usage => ("usage", None),
            HeaderError::UnknownCommand { command } => ("unknown_command", Some(command.clone())),
            HeaderError::Io { .. } => ("io_error", None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                command,
            },
        }
    }
}
