//! Resource manifest management
//!
//! Assembles `reqstool_config.yml` from the traceability files present in a
//! project, writes and removes it, and keeps Poetry's include list pointing
//! at everything reqstool needs inside the source distribution.

pub mod assembler;
pub mod errors;
pub mod include_list;
pub mod manifest_writer;
pub mod paths;
pub mod types;
pub mod whitespace;

pub use assembler::assemble;
pub use errors::ManifestError;
pub use paths::{annotations_path, ResourcePaths, MANIFEST_FILE_NAME};
pub use types::{ResourceManifest, Resources};
