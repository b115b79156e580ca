//! UVSS: lossless parser and diagnostics for the UI stylesheet language.
//!
//! # Example
//!
//! ```
//! let source = "button { color: red; }\nlabel {";
//!
//! let document = uvss_lib::parse(source);
//! assert_eq!(document.to_full_string(), source);
//! eprintln!("{}", document.diagnostics().printer().source(source).render());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod ast;
pub mod diagnostics;
pub mod document;
pub mod parser;
pub mod syntax;


pub use diagnostics::{
    Diagnostic, DiagnosticId, DiagnosticInfo, Diagnostics, DiagnosticsPrinter, Severity,
};
pub use document::{Document, DocumentBuilder, ParseConfig, parse};
pub use syntax::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Errors surfaced by the public API.
///
/// Malformed input is never an error by itself: it produces diagnostics on a complete tree.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Raised by [`Document::into_result`] when any diagnostic has `Error` severity.
    #[error("stylesheet has {} errors", .0.error_count())]
    Invalid(Diagnostics),
}

pub type Result<T> = std::result::Result<T, Error>;
