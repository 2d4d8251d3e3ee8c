/// Header domain layer: templates, rendering, file emission.
pub mod emit;
pub mod errors;
pub mod template;

pub use emit::{emit_threads, emit_version};
pub use errors::HeaderError;
pub use template::{HeaderKind, ThreadsVariant};
