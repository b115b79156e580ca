//! Red view over the green tree.
//!
//! A red element is a green element plus its absolute offset. Red elements are created on
//! demand while walking down from the root and are cheap to clone (one `Arc` bump).
//! `position` is where the element's full span starts, i.e. before its leading trivia.

use rowan::{NodeOrToken, TextRange, TextSize};

use super::green::{GreenElement, GreenNode, GreenToken, element_full_width};
use super::kind::SyntaxKind;
use super::trivia::Trivia;
use crate::diagnostics::{Diagnostic, DiagnosticInfo};

pub type SyntaxElement = NodeOrToken<SyntaxNode, SyntaxToken>;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SyntaxNode {
    green: GreenNode,
    offset: TextSize,
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SyntaxToken {
    green: GreenToken,
    offset: TextSize,
}

impl SyntaxNode {
    pub fn new_root(green: GreenNode) -> Self {
        Self {
            green,
            offset: TextSize::from(0),
        }
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    pub fn kind(&self) -> SyntaxKind {
        self.green.kind()
    }

    pub fn position(&self) -> TextSize {
        self.offset
    }

    pub fn full_width(&self) -> TextSize {
        self.green.full_width()
    }

    pub fn width(&self) -> TextSize {
        self.green.width()
    }

    pub fn is_missing(&self) -> bool {
        self.green.is_missing()
    }

    pub fn leading_trivia_width(&self) -> TextSize {
        self.green.leading_trivia_width()
    }

    pub fn trailing_trivia_width(&self) -> TextSize {
        self.green.trailing_trivia_width()
    }

    /// Content span, without the outer trivia.
    pub fn span(&self) -> TextRange {
        TextRange::at(self.offset + self.leading_trivia_width(), self.width())
    }

    pub fn full_span(&self) -> TextRange {
        TextRange::at(self.offset, self.full_width())
    }

    /// Exact source text covered by this node, trivia included.
    pub fn to_full_string(&self) -> String {
        let mut out = String::with_capacity(u32::from(self.full_width()) as usize);
        self.green.write_full_text(&mut out);
        out
    }

    /// Source text of the content span.
    pub fn text(&self) -> String {
        let full = self.to_full_string();
        let start = u32::from(self.leading_trivia_width()) as usize;
        let end = start + u32::from(self.width()) as usize;
        full[start..end].to_owned()
    }

    pub fn children(&self) -> impl Iterator<Item = SyntaxNode> + use<> {
        self.children_with_tokens().filter_map(NodeOrToken::into_node)
    }

    pub fn children_with_tokens(&self) -> ChildrenWithTokens {
        ChildrenWithTokens {
            parent: self.green.clone(),
            index: 0,
            offset: self.offset,
        }
    }

    /// This node and every node below it, in document order.
    pub fn descendants(&self) -> impl Iterator<Item = SyntaxNode> + use<> {
        self.descendants_with_tokens()
            .filter_map(NodeOrToken::into_node)
    }

    pub fn descendants_with_tokens(&self) -> Preorder {
        Preorder {
            stack: vec![NodeOrToken::Node(self.clone())],
        }
    }

    /// Every token below this node, missing ones included, in document order.
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> + use<> {
        self.descendants_with_tokens()
            .filter_map(NodeOrToken::into_token)
    }

    pub fn first_token(&self) -> Option<SyntaxToken> {
        self.tokens().next()
    }

    pub fn last_token(&self) -> Option<SyntaxToken> {
        self.tokens().last()
    }

    pub fn first_child_by_kind(&self, kind: SyntaxKind) -> Option<SyntaxNode> {
        self.children().find(|child| child.kind() == kind)
    }

    pub fn first_token_by_kind(&self, kind: SyntaxKind) -> Option<SyntaxToken> {
        self.children_with_tokens()
            .filter_map(NodeOrToken::into_token)
            .find(|token| token.kind() == kind)
    }

    /// Token whose full span (trivia included) contains `offset`.
    ///
    /// The end of the node maps to its last token so that the end of input resolves to
    /// `EndOfFile`.
    pub fn token_at_offset(&self, offset: TextSize) -> Option<SyntaxToken> {
        let range = self.full_span();
        if offset < range.start() || offset > range.end() {
            return None;
        }
        if offset == range.end() {
            return self.last_token();
        }
        let mut node = self.clone();
        loop {
            let child = node
                .children_with_tokens()
                .find(|child| element_full_span(child).contains(offset))?;
            match child {
                NodeOrToken::Node(child) => node = child,
                NodeOrToken::Token(token) => return Some(token),
            }
        }
    }

    /// All diagnostics of this subtree with absolute locations, in document order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for element in self.descendants_with_tokens() {
            let (infos, anchor) = match &element {
                NodeOrToken::Node(node) => (node.green.diagnostics(), node.content_start()),
                NodeOrToken::Token(token) => (token.green.diagnostics(), token.content_start()),
            };
            out.extend(
                infos
                    .iter()
                    .map(|info| Diagnostic::resolve(info.clone(), element.clone(), anchor)),
            );
        }
        out
    }

    /// Diagnostics stored on this node only.
    pub fn own_diagnostics(&self) -> &[DiagnosticInfo] {
        self.green.diagnostics()
    }

    fn content_start(&self) -> TextSize {
        self.offset + self.leading_trivia_width()
    }
}

impl std::fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}@{:?}", self.kind(), self.full_span())
    }
}

impl SyntaxToken {
    pub fn green(&self) -> &GreenToken {
        &self.green
    }

    pub fn kind(&self) -> SyntaxKind {
        self.green.kind()
    }

    pub fn text(&self) -> &str {
        self.green.text()
    }

    pub fn position(&self) -> TextSize {
        self.offset
    }

    pub fn full_width(&self) -> TextSize {
        self.green.full_width()
    }

    pub fn width(&self) -> TextSize {
        self.green.width()
    }

    pub fn is_missing(&self) -> bool {
        self.green.is_missing()
    }

    pub fn leading_trivia(&self) -> &[Trivia] {
        self.green.leading_trivia()
    }

    pub fn trailing_trivia(&self) -> &[Trivia] {
        self.green.trailing_trivia()
    }

    pub fn leading_trivia_width(&self) -> TextSize {
        self.green.leading_trivia_width()
    }

    pub fn trailing_trivia_width(&self) -> TextSize {
        self.green.trailing_trivia_width()
    }

    pub fn span(&self) -> TextRange {
        TextRange::at(self.content_start(), self.width())
    }

    pub fn full_span(&self) -> TextRange {
        TextRange::at(self.offset, self.full_width())
    }

    pub fn to_full_string(&self) -> String {
        let mut out = String::new();
        self.green.write_full_text(&mut out);
        out
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let anchor = self.content_start();
        self.green
            .diagnostics()
            .iter()
            .map(|info| Diagnostic::resolve(info.clone(), NodeOrToken::Token(self.clone()), anchor))
            .collect()
    }

    fn content_start(&self) -> TextSize {
        self.offset + self.leading_trivia_width()
    }
}

impl std::fmt::Debug for SyntaxToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}@{:?} {:?}", self.kind(), self.span(), self.text())
    }
}

pub fn element_kind(element: &SyntaxElement) -> SyntaxKind {
    match element {
        NodeOrToken::Node(node) => node.kind(),
        NodeOrToken::Token(token) => token.kind(),
    }
}

pub fn element_span(element: &SyntaxElement) -> TextRange {
    match element {
        NodeOrToken::Node(node) => node.span(),
        NodeOrToken::Token(token) => token.span(),
    }
}

pub fn element_full_span(element: &SyntaxElement) -> TextRange {
    match element {
        NodeOrToken::Node(node) => node.full_span(),
        NodeOrToken::Token(token) => token.full_span(),
    }
}

/// Direct children of a node, with offsets.
#[derive(Debug, Clone)]
pub struct ChildrenWithTokens {
    parent: GreenNode,
    index: usize,
    offset: TextSize,
}

impl Iterator for ChildrenWithTokens {
    type Item = SyntaxElement;

    fn next(&mut self) -> Option<SyntaxElement> {
        let child = self.parent.children().get(self.index)?.clone();
        let offset = self.offset;
        self.index += 1;
        self.offset += element_full_width(&child);
        Some(match child {
            GreenElement::Node(green) => NodeOrToken::Node(SyntaxNode { green, offset }),
            GreenElement::Token(green) => NodeOrToken::Token(SyntaxToken { green, offset }),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.parent.children().len() - self.index;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for ChildrenWithTokens {}

/// Depth-first, parents before children.
#[derive(Debug, Clone)]
pub struct Preorder {
    stack: Vec<SyntaxElement>,
}

impl Iterator for Preorder {
    type Item = SyntaxElement;

    fn next(&mut self) -> Option<SyntaxElement> {
        let element = self.stack.pop()?;
        if let NodeOrToken::Node(node) = &element {
            let first = self.stack.len();
            self.stack.extend(node.children_with_tokens());
            self.stack[first..].reverse();
        }
        Some(element)
    }
}
