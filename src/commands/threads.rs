/// `threads` command: write the threading backend header.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::header::{HeaderError, HeaderKind, ThreadsVariant, emit_threads};

/// Run `xsigma-headers threads <output_file> [win32]`.
///
/// # Errors
///
/// Returns `HeaderError::Io` if the output file cannot be written.
pub fn run(
    output_file: &Path,
    variant: ThreadsVariant,
    ctx: &OutputCtx,
) -> Result<(), HeaderError> {
    super::emit_and_report(HeaderKind::Threads(variant), output_file, ctx, |path| {
        emit_threads(path, variant)
    })
}
