/// Output formatting: quiet, JSON, table and path modes for reports and errors.
use std::io::Write;
use std::time::Instant;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::header::HeaderError;
use crate::types::{EmitOutput, ErrorOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all command handlers.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, render only; never touch the output file.
    pub dry_run: bool,
    /// When true, print timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            dry_run: false,
            debug,
        }
    }

    /// Render only, leaving the output file untouched.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json | OutputFormat::Compact)
    }
}

// --- Emission report ---

/// Write the report of one emission to stdout.
///
/// In `quiet` format nothing is printed, except that a dry-run prints the
/// rendered header verbatim.
pub fn write_emit(result: &EmitOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Quiet => {
            if let Some(contents) = &result.contents {
                print!("{contents}");
            }
        }
        OutputFormat::Json => print_report(result, true),
        OutputFormat::Compact => print_report(result, false),
        OutputFormat::Path => println!("{}", result.path),
        OutputFormat::Table => println!("{}", emit_table(result, ctx)),
    }
}

fn emit_table(result: &EmitOutput, ctx: &OutputCtx) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["HEADER", "PATH", "VARIANT", "GUARD", "BYTES", "WRITTEN"]);
    }
    table.add_row([
        result.header.as_str(),
        result.path.as_str(),
        result.variant.as_deref().unwrap_or(""),
        result.guard.as_str(),
        &result.bytes.to_string(),
        if result.dry_run { "no" } else { "yes" },
    ]);
    table
}

// --- Error output ---

/// Write a structured error.
///
/// JSON formats get the error envelope on stderr. In text formats argument
/// errors go to stdout and filesystem errors to stderr.
pub fn write_error(err: &HeaderError, ctx: &OutputCtx) {
    if ctx.is_json() {
        let envelope = ErrorOutput::from_header_error(err);
        let s = serde_json::to_string_pretty(&envelope).unwrap_or_default();
        let _ = writeln!(std::io::stderr().lock(), "{s}");
    } else if err.is_argument_error() {
        println!("{err}");
    } else {
        let _ = writeln!(std::io::stderr().lock(), "Error: {err}");
    }
}

// --- Debug timer ---

/// Elapsed-time span for `--debug`, reported on stderr when dropped.
///
/// Handlers open `render` or `write`; `main` wraps argument resolution in
/// `parse_command`. Inactive timers print nothing.
pub struct DebugTimer {
    label: &'static str,
    start: Instant,
    active: bool,
}

impl DebugTimer {
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let micros = self.start.elapsed().as_micros();
            eprintln!("[debug] {}: {micros}us", self.label);
        }
    }
}

// --- JSON ---

/// Print `value` on stdout, pretty for `json` and single-line for `compact`.
fn print_report<T: Serialize + ?Sized>(value: &T, pretty: bool) {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::header::{HeaderKind, ThreadsVariant};

    fn ctx(format: OutputFormat, no_header: bool) -> OutputCtx {
        OutputCtx::new(format, false, no_header, false)
    }

    #[test]
    fn test_json_flag_overrides_format() {
        assert_eq!(resolve_format(OutputFormat::Table, true), OutputFormat::Json);
        assert_eq!(resolve_format(OutputFormat::Path, false), OutputFormat::Path);
        assert_eq!(resolve_format(OutputFormat::Quiet, false), OutputFormat::Quiet);
    }

    #[test]
    fn test_is_json() {
        assert!(ctx(OutputFormat::Json, false).is_json());
        assert!(ctx(OutputFormat::Compact, false).is_json());
        assert!(!ctx(OutputFormat::Quiet, false).is_json());
        assert!(OutputCtx::new(OutputFormat::Quiet, true, false, false).is_json());
    }

    #[test]
    fn test_timer_follows_debug_flag() {
        let quiet = ctx(OutputFormat::Quiet, false).timer("render");
        assert!(!quiet.active);
        assert_eq!(quiet.label, "render");

        let debug = OutputCtx::new(OutputFormat::Quiet, false, false, true).timer("write");
        assert!(debug.active);
        assert_eq!(debug.label, "write");
    }

    #[test]
    fn test_emit_table_rows() {
        let kind = HeaderKind::Threads(ThreadsVariant::Pthreads);
        let report = EmitOutput::new(kind, Path::new("xsigma_threads.h"), 120, None);

        let rendered = emit_table(&report, &ctx(OutputFormat::Table, false)).to_string();
        assert!(rendered.contains("HEADER"));
        assert!(rendered.contains("xsigma_threads.h"));
        assert!(rendered.contains("pthreads"));
        assert!(rendered.contains("XSIGMA_THREADS_H"));
        assert!(rendered.contains("120"));

        let bare = emit_table(&report, &ctx(OutputFormat::Table, true)).to_string();
        assert!(!bare.contains("HEADER"));
        assert!(bare.contains("threads"));
    }
}
