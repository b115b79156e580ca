//! CST dump, one element per line, two-space indentation.

use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use super::node::{SyntaxNode, SyntaxToken};
use super::trivia::Trivia;

pub struct TreePrinter<'n> {
    root: &'n SyntaxNode,
    trivia: bool,
    spans: bool,
    diagnostics: bool,
}

impl<'n> TreePrinter<'n> {
    pub fn new(root: &'n SyntaxNode) -> Self {
        Self {
            root,
            trivia: false,
            spans: false,
            diagnostics: false,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    /// Lists diagnostics stored on each element below it.
    pub fn with_diagnostics(mut self, value: bool) -> Self {
        self.diagnostics = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, 0, w)
    }

    fn format_node(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        writeln!(w, "{}{:?}{}", prefix, node.kind(), self.span_str(node.span()))?;
        if self.diagnostics {
            for info in node.own_diagnostics() {
                writeln!(w, "{}  ! {}", prefix, info.message())?;
            }
        }

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_node(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => self.format_token(&t, indent + 1, w)?,
            }
        }
        Ok(())
    }

    fn format_token(&self, token: &SyntaxToken, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        if self.trivia {
            self.format_trivia(token.leading_trivia(), &prefix, w)?;
        }

        let span = self.span_str(token.span());
        if token.is_missing() {
            writeln!(w, "{}{:?}{} (missing)", prefix, token.kind(), span)?;
        } else {
            writeln!(w, "{}{:?}{} {:?}", prefix, token.kind(), span, token.text())?;
        }
        if self.diagnostics {
            for info in token.green().diagnostics() {
                writeln!(w, "{}  ! {}", prefix, info.message())?;
            }
        }

        if self.trivia {
            self.format_trivia(token.trailing_trivia(), &prefix, w)?;
        }
        Ok(())
    }

    fn format_trivia(&self, trivia: &[Trivia], prefix: &str, w: &mut impl Write) -> std::fmt::Result {
        for t in trivia {
            writeln!(w, "{}{:?} {:?}", prefix, t.kind(), t.text())?;
        }
        Ok(())
    }

    fn span_str(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}

impl SyntaxNode {
    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }
}
