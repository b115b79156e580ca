//! Entry points: parse a stylesheet into a [`Document`].

use rowan::TextSize;

use crate::analyze::analyze;
use crate::ast::Root;
use crate::diagnostics::{Diagnostics, DiagnosticsPrinter};
use crate::parser::parse_green;
use crate::syntax::{SyntaxNode, TreePrinter};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Run the semantic pass after parsing.
    pub semantic_checks: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            semantic_checks: true,
        }
    }
}

pub struct DocumentBuilder<'src> {
    pub src: &'src str,
    config: ParseConfig,
}

impl<'src> DocumentBuilder<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            config: ParseConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_semantic_checks(mut self, value: bool) -> Self {
        self.config.semantic_checks = value;
        self
    }

    /// Lexes, parses and (unless disabled) checks `src`. Never fails.
    pub fn parse(self) -> Document {
        let _span = tracing::debug_span!("parse", len = self.src.len()).entered();

        let syntax = SyntaxNode::new_root(parse_green(self.src));
        let mut diagnostics: Diagnostics = syntax.diagnostics().into_iter().collect();
        if self.config.semantic_checks {
            diagnostics.extend(analyze(&syntax));
        }
        diagnostics.sort();

        tracing::debug!(
            diagnostics = diagnostics.len(),
            errors = diagnostics.error_count(),
            "parsed stylesheet"
        );

        Document {
            syntax,
            diagnostics,
            config: self.config,
        }
    }
}

/// A parsed stylesheet: the immutable tree plus every diagnostic found in it.
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct Document {
    syntax: SyntaxNode,
    diagnostics: Diagnostics,
    config: ParseConfig,
}

impl Document {
    pub fn syntax(&self) -> SyntaxNode {
        self.syntax.clone()
    }

    pub fn root(&self) -> Root {
        Root::cast(self.syntax()).expect("parser always produces a Document node")
    }

    pub fn config(&self) -> ParseConfig {
        self.config
    }

    /// The exact source text this document was parsed from.
    pub fn to_full_string(&self) -> String {
        self.syntax.to_full_string()
    }

    pub fn full_width(&self) -> TextSize {
        self.syntax.full_width()
    }

    pub fn width(&self) -> TextSize {
        self.syntax.width()
    }

    /// Tree and semantic diagnostics, ordered by location.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// No diagnostic of `Error` severity.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn into_result(self) -> Result<Document> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::Invalid(self.diagnostics))
        }
    }

    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(&self.syntax)
    }

    pub fn dump(&self) -> String {
        self.printer().dump()
    }

    /// Diagnostics rendered against this document's own text.
    pub fn render_diagnostics(&self, path: Option<&str>, colored: bool) -> String {
        let source = self.to_full_string();
        let mut printer = DiagnosticsPrinter::new(&self.diagnostics)
            .source(&source)
            .colored(colored);
        if let Some(path) = path {
            printer = printer.path(path);
        }
        printer.render()
    }
}

/// Parses `src` with the default configuration.
pub fn parse(src: &str) -> Document {
    DocumentBuilder::new(src).parse()
}

impl TryFrom<&str> for Document {
    type Error = Error;

    /// Parses and rejects stylesheets with errors.
    fn try_from(src: &str) -> Result<Self> {
        parse(src).into_result()
    }
}

#[cfg(test)]
impl Document {
    #[track_caller]
    pub(crate) fn expect_valid(src: &str) -> Self {
        let document = parse(src);
        assert!(
            document.is_valid(),
            "expected a valid stylesheet, got:\n{}",
            document.diagnostics().printer().render()
        );
        document
    }

    /// Parses `src` and returns its diagnostics, one line each.
    #[track_caller]
    pub(crate) fn expect_invalid(src: &str) -> String {
        let document = parse(src);
        assert!(!document.is_valid(), "expected diagnostics for {src:?}");
        document.diagnostics().printer().render()
    }

    pub(crate) fn dump_cst(&self) -> String {
        self.printer().dump()
    }

    pub(crate) fn dump_cst_full(&self) -> String {
        self.printer().with_trivia(true).dump()
    }

    pub(crate) fn dump_cst_with_diagnostics(&self) -> String {
        self.printer().with_diagnostics(true).dump()
    }
}
