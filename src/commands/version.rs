/// `version` command: write the version macros header.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::header::{HeaderError, HeaderKind, emit_version};

/// Run `xsigma-headers version <output_file>`.
///
/// # Errors
///
/// Returns `HeaderError::Io` if the output file cannot be written.
pub fn run(output_file: &Path, ctx: &OutputCtx) -> Result<(), HeaderError> {
    super::emit_and_report(HeaderKind::Version, output_file, ctx, emit_version)
}
