//! Annotation extraction
//!
//! The annotations file is produced by the `reqstool-python-decorators`
//! package. It is driven from here through the project's Python interpreter.

pub mod errors;
pub mod extractor;

pub use errors::ExtractorError;
pub use extractor::{AnnotationExtractor, DecoratorProcessor};
