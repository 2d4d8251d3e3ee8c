/// Command dispatch: parses positionals into a `Command` and routes it to its handler.
pub mod threads;
pub mod version;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::cli::OutputCtx;
use crate::cli::args::Cli;
use crate::cli::output::write_emit;
use crate::header::{HeaderError, HeaderKind, ThreadsVariant};
use crate::types::EmitOutput;

/// A fully resolved invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write the version macros header.
    Version { output_file: PathBuf },
    /// Write the threads header with the chosen backend.
    Threads {
        output_file: PathBuf,
        variant: ThreadsVariant,
    },
}

impl Command {
    /// Resolve the positional arguments of `cli`.
    ///
    /// # Errors
    ///
    /// See [`Command::from_args`].
    pub fn from_cli(cli: &Cli) -> Result<Self, HeaderError> {
        Self::from_args(&cli.args)
    }

    /// Resolve `<command> [output_file] [variant] ...`. Tokens past the
    /// variant are ignored.
    ///
    /// An empty output path counts as missing.
    ///
    /// # Errors
    ///
    /// Returns `HeaderError::Usage` when no command is given, and
    /// `HeaderError::UnknownCommand` for an unrecognized command or a
    /// recognized one without an output path.
    pub fn from_args<S: AsRef<OsStr>>(args: &[S]) -> Result<Self, HeaderError> {
        let Some(command) = args.first().map(AsRef::<OsStr>::as_ref) else {
            return Err(HeaderError::Usage);
        };
        let output_file = args
            .get(1)
            .map(AsRef::<OsStr>::as_ref)
            .filter(|p: &&OsStr| !p.is_empty())
            .map(PathBuf::from);
        let variant = args.get(2).map(AsRef::<OsStr>::as_ref);

        match (command.to_str(), output_file) {
            (Some("version"), Some(output_file)) => Ok(Self::Version { output_file }),
            (Some("threads"), Some(output_file)) => Ok(Self::Threads {
                output_file,
                variant: ThreadsVariant::from_token(variant),
            }),
            _ => Err(HeaderError::UnknownCommand {
                command: command.to_string_lossy().into_owned(),
            }),
        }
    }
}

/// Dispatch a resolved `Command` to its handler.
///
/// # Errors
///
/// Returns `HeaderError` if the output file cannot be written.
pub fn dispatch(command: &Command, ctx: &OutputCtx) -> Result<(), HeaderError> {
    match command {
        Command::Version { output_file } => version::run(output_file, ctx),
        Command::Threads {
            output_file,
            variant,
        } => threads::run(output_file, *variant, ctx),
    }
}

/// Shared tail of every handler: write (or just render on `--dry-run`) and report.
fn emit_and_report<F>(
    kind: HeaderKind,
    output_file: &Path,
    ctx: &OutputCtx,
    write: F,
) -> Result<(), HeaderError>
where
    F: FnOnce(&Path) -> Result<usize, HeaderError>,
{
    let report = if ctx.dry_run {
        let _t_render = ctx.timer("render");
        let contents = kind.render();
        EmitOutput::new(kind, output_file, contents.len(), Some(contents))
    } else {
        let _t_write = ctx.timer("write");
        let bytes = write(output_file)?;
        EmitOutput::new(kind, output_file, bytes, None)
    };

    write_emit(&report, ctx);
    Ok(())
}
