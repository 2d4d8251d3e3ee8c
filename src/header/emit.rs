/// Header emission: render a header and write it over the output file.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::errors::HeaderError;
use super::template::{HeaderKind, ThreadsVariant};

/// Write the version macros header to `output_file`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns `HeaderError::Io` if the file cannot be created or written.
pub fn emit_version(output_file: &Path) -> Result<usize, HeaderError> {
    write_header(output_file, &HeaderKind::Version.render())
}

/// Write the threads header for `variant` to `output_file`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns `HeaderError::Io` if the file cannot be created or written.
pub fn emit_threads(output_file: &Path, variant: ThreadsVariant) -> Result<usize, HeaderError> {
    write_header(output_file, &HeaderKind::Threads(variant).render())
}

/// Create or truncate `path` and write `contents` in full.
///
/// The file handle is dropped before returning on every path.
///
/// # Errors
///
/// Returns `HeaderError::Io` carrying `path` on any filesystem failure.
pub fn write_header(path: &Path, contents: &str) -> Result<usize, HeaderError> {
    let io_err = |source: std::io::Error| HeaderError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    Ok(contents.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_version_writes_rendered_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xsigma_version_macros.h");
        let written = emit_version(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, HeaderKind::Version.render());
        assert_eq!(written, text.len());
    }

    #[test]
    fn test_emit_threads_variants() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xsigma_threads.h");

        emit_threads(&path, ThreadsVariant::Win32).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("#define XSIGMA_USE_WIN32_THREADS 1\n"));
        assert!(!text.contains("XSIGMA_USE_PTHREADS"));

        emit_threads(&path, ThreadsVariant::Pthreads).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("#define XSIGMA_USE_PTHREADS 1\n"));
        assert!(!text.contains("XSIGMA_USE_WIN32_THREADS"));
    }

    #[test]
    fn test_emit_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.h");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        emit_version(&path).unwrap();
        let first = std::fs::read(&path).unwrap();
        emit_version(&path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, HeaderKind::Version.render().into_bytes());
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_parent_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.h");
        let err = emit_version(&path).unwrap_err();
        match err {
            HeaderError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
        assert!(!path.exists());
    }
}
