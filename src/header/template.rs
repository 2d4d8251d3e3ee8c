/// Header templates: include-guard symbols and the `#define` entries of each header.
///
/// Every header shares the same layout:
///
/// ```text
/// #ifndef GUARD
/// #define GUARD
///
/// #define NAME VALUE
/// ...
///
/// #endif // GUARD
/// ```
use std::ffi::OsStr;
use std::fmt::{self, Write};

/// Major component of the generated library version.
pub const MAJOR_VERSION: u32 = 1;
/// Minor component of the generated library version.
pub const MINOR_VERSION: u32 = 0;
/// Build component of the generated library version.
pub const BUILD_VERSION: u32 = 0;
/// Upper bound on worker threads advertised by the threads header.
pub const MAX_THREADS: u32 = 64;

/// Threading backend selected for the threads header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadsVariant {
    /// POSIX threads. Selected unless `win32` is asked for explicitly.
    #[default]
    Pthreads,
    /// Native Win32 threads.
    Win32,
}

impl ThreadsVariant {
    /// Parse the optional variant token. Only the exact literal `win32`
    /// selects [`ThreadsVariant::Win32`]; any other token, valid UTF-8 or
    /// not, selects pthreads.
    #[must_use]
    pub fn from_token(token: Option<&OsStr>) -> Self {
        match token {
            Some(token) if token == OsStr::new("win32") => Self::Win32,
            _ => Self::Pthreads,
        }
    }

    /// Short lowercase name used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pthreads => "pthreads",
            Self::Win32 => "win32",
        }
    }

    /// The macro that announces this backend.
    #[must_use]
    pub fn backend_macro(self) -> &'static str {
        match self {
            Self::Pthreads => "XSIGMA_USE_PTHREADS",
            Self::Win32 => "XSIGMA_USE_WIN32_THREADS",
        }
    }
}

/// Right-hand side of a `#define`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefineValue {
    /// Bare integer literal.
    Int(u32),
    /// Double-quoted string literal.
    Str(String),
}

impl fmt::Display for DefineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

/// One `#define NAME VALUE` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    pub name: &'static str,
    pub value: DefineValue,
}

impl Define {
    fn int(name: &'static str, value: u32) -> Self {
        Self {
            name,
            value: DefineValue::Int(value),
        }
    }
}

/// The headers this tool knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// `xsigma_version_macros.h`
    Version,
    /// `xsigma_threads.h`
    Threads(ThreadsVariant),
}

impl HeaderKind {
    /// Command name that produces this header.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Threads(_) => "threads",
        }
    }

    /// Include-guard symbol.
    #[must_use]
    pub fn guard(self) -> &'static str {
        match self {
            Self::Version => "XSIGMA_VERSION_MACROS_H",
            Self::Threads(_) => "XSIGMA_THREADS_H",
        }
    }

    /// Threading backend, for the threads header only.
    #[must_use]
    pub fn variant(self) -> Option<ThreadsVariant> {
        match self {
            Self::Version => None,
            Self::Threads(variant) => Some(variant),
        }
    }

    /// Ordered `#define` entries between the guards.
    #[must_use]
    pub fn defines(self) -> Vec<Define> {
        match self {
            Self::Version => vec![
                Define::int("XSIGMA_MAJOR_VERSION", MAJOR_VERSION),
                Define::int("XSIGMA_MINOR_VERSION", MINOR_VERSION),
                Define::int("XSIGMA_BUILD_VERSION", BUILD_VERSION),
                Define {
                    name: "XSIGMA_VERSION_FULL",
                    value: DefineValue::Str(format!(
                        "{MAJOR_VERSION}.{MINOR_VERSION}.{BUILD_VERSION}"
                    )),
                },
            ],
            Self::Threads(variant) => vec![
                Define::int(variant.backend_macro(), 1),
                Define::int("XSIGMA_MAX_THREADS", MAX_THREADS),
            ],
        }
    }

    /// Render the complete header text, LF line endings and trailing newline included.
    #[must_use]
    pub fn render(self) -> String {
        let guard = self.guard();
        let mut out = String::new();
        let _ = writeln!(out, "#ifndef {guard}");
        let _ = writeln!(out, "#define {guard}");
        out.push('\n');
        for define in self.defines() {
            let _ = writeln!(out, "#define {} {}", define.name, define.value);
        }
        out.push('\n');
        let _ = writeln!(out, "#endif // {guard}");
        out
    }
}
