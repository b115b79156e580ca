//! Immutable, position-free syntax tree.
//!
//! Green elements only know their kind, their text and their children. Absolute positions
//! are computed on demand by the red view in [`super::node`], so the same subtree can be
//! shared between trees (it is reference counted and never mutated after construction).

use std::sync::Arc;

use rowan::{NodeOrToken, TextSize};

use super::kind::SyntaxKind;
use super::trivia::{Trivia, trivia_width};
use crate::diagnostics::{DiagnosticInfo, report};

pub type GreenElement = NodeOrToken<GreenNode, GreenToken>;

/// Leaf: significant text plus the trivia it owns.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GreenToken(Arc<GreenTokenData>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GreenTokenData {
    kind: SyntaxKind,
    text: Box<str>,
    leading: Box<[Trivia]>,
    trailing: Box<[Trivia]>,
    is_missing: bool,
    diagnostics: Option<Vec<DiagnosticInfo>>,
}

impl GreenToken {
    pub fn new(
        kind: SyntaxKind,
        text: impl Into<Box<str>>,
        leading: Vec<Trivia>,
        trailing: Vec<Trivia>,
    ) -> Self {
        assert!(kind.is_token(), "GreenToken::new: {kind:?} is a node kind");
        Self(Arc::new(GreenTokenData {
            kind,
            text: text.into(),
            leading: leading.into_boxed_slice(),
            trailing: trailing.into_boxed_slice(),
            is_missing: false,
            diagnostics: None,
        }))
    }

    /// Zero-width placeholder for an expected-but-absent token.
    pub fn missing(kind: SyntaxKind) -> Self {
        assert!(kind.is_token(), "GreenToken::missing: {kind:?} is a node kind");
        Self(Arc::new(GreenTokenData {
            kind,
            text: "".into(),
            leading: Box::default(),
            trailing: Box::default(),
            is_missing: true,
            diagnostics: None,
        }))
    }

    /// Returns this token with `info` appended. Only used while the tree is being built.
    pub fn with_diagnostic(mut self, info: DiagnosticInfo) -> Self {
        report(&mut Arc::make_mut(&mut self.0).diagnostics, info);
        self
    }

    /// Same text and trivia under a different kind (contextual keywords used as names).
    pub fn with_kind(mut self, kind: SyntaxKind) -> Self {
        assert!(kind.is_token(), "GreenToken::with_kind: {kind:?} is a node kind");
        Arc::make_mut(&mut self.0).kind = kind;
        self
    }

    pub fn kind(&self) -> SyntaxKind {
        self.0.kind
    }

    pub fn text(&self) -> &str {
        &self.0.text
    }

    pub fn leading_trivia(&self) -> &[Trivia] {
        &self.0.leading
    }

    pub fn trailing_trivia(&self) -> &[Trivia] {
        &self.0.trailing
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_missing
    }

    pub fn diagnostics(&self) -> &[DiagnosticInfo] {
        self.0.diagnostics.as_deref().unwrap_or_default()
    }

    pub fn width(&self) -> TextSize {
        TextSize::of(self.text())
    }

    pub fn leading_trivia_width(&self) -> TextSize {
        trivia_width(self.leading_trivia())
    }

    pub fn trailing_trivia_width(&self) -> TextSize {
        trivia_width(self.trailing_trivia())
    }

    pub fn full_width(&self) -> TextSize {
        self.leading_trivia_width() + self.width() + self.trailing_trivia_width()
    }

    pub fn write_full_text(&self, out: &mut String) {
        for trivia in self.leading_trivia() {
            out.push_str(trivia.text());
        }
        out.push_str(self.text());
        for trivia in self.trailing_trivia() {
            out.push_str(trivia.text());
        }
    }
}

impl std::fmt::Debug for GreenToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreenToken")
            .field("kind", &self.kind())
            .field("text", &self.text())
            .field("missing", &self.is_missing())
            .finish()
    }
}

/// Interior node. `full_width` is cached at construction; it never changes afterwards.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GreenNode(Arc<GreenNodeData>);

#[derive(Debug, PartialEq, Eq, Hash)]
struct GreenNodeData {
    kind: SyntaxKind,
    full_width: TextSize,
    children: Box<[GreenElement]>,
    diagnostics: Option<Vec<DiagnosticInfo>>,
}

impl GreenNode {
    pub fn new(kind: SyntaxKind, children: Vec<GreenElement>) -> Self {
        Self::with_diagnostics(kind, children, None)
    }

    /// A node that carries its own diagnostics, spanning all of its tokens.
    pub fn with_diagnostics(
        kind: SyntaxKind,
        children: Vec<GreenElement>,
        diagnostics: Option<Vec<DiagnosticInfo>>,
    ) -> Self {
        assert!(kind.is_node(), "GreenNode::new: {kind:?} is a token kind");
        let full_width = children.iter().map(element_full_width).sum();
        Self(Arc::new(GreenNodeData {
            kind,
            full_width,
            children: children.into_boxed_slice(),
            diagnostics,
        }))
    }

    pub fn kind(&self) -> SyntaxKind {
        self.0.kind
    }

    pub fn children(&self) -> &[GreenElement] {
        &self.0.children
    }

    pub fn diagnostics(&self) -> &[DiagnosticInfo] {
        self.0.diagnostics.as_deref().unwrap_or_default()
    }

    pub fn full_width(&self) -> TextSize {
        self.0.full_width
    }

    /// First token that occupies text. Missing tokens without trivia are skipped.
    pub fn first_token(&self) -> Option<&GreenToken> {
        self.children()
            .iter()
            .filter(|child| element_full_width(child) > TextSize::from(0))
            .find_map(|child| match child {
                NodeOrToken::Node(node) => node.first_token(),
                NodeOrToken::Token(token) => Some(token),
            })
    }

    /// Last token that occupies text. Missing tokens without trivia are skipped.
    pub fn last_token(&self) -> Option<&GreenToken> {
        self.children()
            .iter()
            .rev()
            .filter(|child| element_full_width(child) > TextSize::from(0))
            .find_map(|child| match child {
                NodeOrToken::Node(node) => node.last_token(),
                NodeOrToken::Token(token) => Some(token),
            })
    }

    pub fn leading_trivia_width(&self) -> TextSize {
        self.first_token()
            .map_or(TextSize::from(0), GreenToken::leading_trivia_width)
    }

    pub fn trailing_trivia_width(&self) -> TextSize {
        self.last_token()
            .map_or(TextSize::from(0), GreenToken::trailing_trivia_width)
    }

    /// Content width: `full_width` minus the outer leading and trailing trivia.
    pub fn width(&self) -> TextSize {
        let trivia = self.leading_trivia_width() + self.trailing_trivia_width();
        self.full_width().checked_sub(trivia).unwrap_or_default()
    }

    /// True when every token below is a missing token (vacuously true when empty).
    pub fn is_missing(&self) -> bool {
        self.children().iter().all(|child| match child {
            NodeOrToken::Node(node) => node.is_missing(),
            NodeOrToken::Token(token) => token.is_missing(),
        })
    }

    pub fn write_full_text(&self, out: &mut String) {
        for child in self.children() {
            match child {
                NodeOrToken::Node(node) => node.write_full_text(out),
                NodeOrToken::Token(token) => token.write_full_text(out),
            }
        }
    }
}

impl std::fmt::Debug for GreenNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreenNode")
            .field("kind", &self.kind())
            .field("full_width", &self.full_width())
            .field("children", &self.children())
            .finish()
    }
}

pub fn element_full_width(element: &GreenElement) -> TextSize {
    match element {
        NodeOrToken::Node(node) => node.full_width(),
        NodeOrToken::Token(token) => token.full_width(),
    }
}

/// Builds a green tree bottom-up, one token at a time.
#[derive(Debug, Default)]
pub struct GreenNodeBuilder {
    parents: Vec<OpenNode>,
    children: Vec<GreenElement>,
}

#[derive(Debug)]
struct OpenNode {
    kind: SyntaxKind,
    first_child: usize,
}

impl GreenNodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.parents.push(OpenNode {
            kind,
            first_child: self.children.len(),
        });
    }

    pub fn token(&mut self, token: GreenToken) {
        self.children.push(NodeOrToken::Token(token));
    }

    pub fn finish_node(&mut self) {
        let OpenNode { kind, first_child } = self
            .parents
            .pop()
            .expect("GreenNodeBuilder::finish_node called with no open node");
        let children = self.children.split_off(first_child);
        let node = GreenNode::new(kind, children);
        self.children.push(NodeOrToken::Node(node));
    }

    /// Returns the single root node. Panics if nodes are still open.
    pub fn finish(mut self) -> GreenNode {
        assert!(
            self.parents.is_empty(),
            "GreenNodeBuilder::finish called with unfinished nodes"
        );
        assert_eq!(
            self.children.len(),
            1,
            "GreenNodeBuilder::finish expects exactly one root"
        );
        match self.children.pop() {
            Some(NodeOrToken::Node(node)) => node,
            _ => panic!("GreenNodeBuilder::finish: root must be a node"),
        }
    }
}
