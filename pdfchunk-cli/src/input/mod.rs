//! Input handling module

pub mod document_loader;
pub mod glob_resolver;

pub use document_loader::open_document;
pub use glob_resolver::resolve_patterns;
