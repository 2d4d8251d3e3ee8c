/// CLI argument definitions via clap derive.
use std::ffi::OsString;

use clap::{Parser, ValueEnum};

/// xsigma-headers: generate XSigma configuration headers.
///
/// Commands: `version` writes the version macros header; `threads` writes the
/// threading backend header (pass `win32` as the variant for Win32 threads).
#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "xsigma-headers",
    about = "Generate XSigma configuration headers at build time",
    version
)]
pub struct Cli {
    /// How to report a successful emission. `quiet` prints nothing.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "quiet")]
    pub format: OutputFormat,

    /// Shorthand for --format json.
    #[arg(long, global = true, conflicts_with = "format")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Render the header without writing the output file.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Print timing spans to stderr for debugging.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Positional arguments, kept raw: `<COMMAND> [OUTPUT_FILE] [VARIANT] ...`.
    ///
    /// `COMMAND` is `version` or `threads`. `OUTPUT_FILE` is created or
    /// truncated. `VARIANT` `win32` selects Win32 threads, anything else
    /// pthreads. Flags are only recognized before `COMMAND`; from there on
    /// every token, hyphenated or not, is passed through as-is, and tokens
    /// after `VARIANT` are ignored.
    #[arg(
        value_name = "COMMAND [OUTPUT_FILE] [VARIANT]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

/// Report format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Print nothing on success.
    #[default]
    Quiet,
    /// JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Aligned table with headers (human-readable).
    Table,
    /// Output path only.
    Path,
}
