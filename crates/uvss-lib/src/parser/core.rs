//! Parser state machine and low-level operations.

use std::collections::VecDeque;

use rowan::TextSize;

use super::invariants::DEBUG_FUEL;
use super::lexer::Lexer;
use crate::diagnostics::DiagnosticInfo;
use crate::syntax::token_sets::CLOSING_DELIMITERS;
use crate::syntax::{GreenNode, GreenNodeBuilder, GreenToken, SyntaxKind, TokenSet};

/// Pulls tokens lazily from the lexer and builds the green tree as it goes.
///
/// Trivia never reaches the parser as separate tokens: it is already owned by the
/// significant tokens, so lookahead counts significant tokens only.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    lookahead: VecDeque<GreenToken>,
    builder: GreenNodeBuilder,
    /// Full end of the last consumed token.
    offset: TextSize,
    /// Whether the last consumed token carried trailing trivia.
    trailing_gap: bool,
    last_missing_pos: Option<TextSize>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexer::new(source),
            lookahead: VecDeque::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            offset: TextSize::from(0),
            trailing_gap: false,
            last_missing_pos: None,
            debug_fuel: std::cell::Cell::new(DEBUG_FUEL),
        }
    }

    pub fn finish(self) -> GreenNode {
        assert!(
            self.lookahead.is_empty(),
            "parser finished before consuming EndOfFile"
        );
        self.builder.finish()
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(DEBUG_FUEL);
    }

    fn fill(&mut self, n: usize) {
        while self.lookahead.len() <= n {
            match self.lexer.next() {
                Some(token) => self.lookahead.push_back(token),
                None => break,
            }
        }
    }

    /// Kind of the `n`-th significant token ahead. Past the end this is `EndOfFile`.
    pub(super) fn nth(&mut self, n: usize) -> SyntaxKind {
        self.ensure_progress();
        self.fill(n);
        self.lookahead
            .get(n)
            .map_or(SyntaxKind::EndOfFile, GreenToken::kind)
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn at(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_set(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.nth(1) == kind
    }

    pub(super) fn eof(&mut self) -> bool {
        self.at(SyntaxKind::EndOfFile)
    }

    /// Identifier, or a keyword that can stand in for one.
    pub(super) fn at_name(&mut self) -> bool {
        let kind = self.current();
        kind == SyntaxKind::Identifier || kind.is_keyword()
    }

    /// Trivia separates the current token from the previous one.
    pub(super) fn gap_before_current(&mut self) -> bool {
        self.fill(0);
        self.trailing_gap
            || self
                .lookahead
                .front()
                .is_some_and(|token| !token.leading_trivia().is_empty())
    }

    pub(super) fn offset(&self) -> TextSize {
        self.offset
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind);
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn take(&mut self) -> GreenToken {
        self.fill(0);
        let token = self
            .lookahead
            .pop_front()
            .expect("lexer always ends with EndOfFile");
        self.reset_debug_fuel();
        self.offset += token.full_width();
        self.trailing_gap = !token.trailing_trivia().is_empty();
        token
    }

    pub(super) fn bump(&mut self) {
        let token = self.take();
        self.builder.token(token);
    }

    /// Consumes the current token under another kind (a keyword used as a name).
    pub(super) fn bump_remap(&mut self, kind: SyntaxKind) {
        let token = self.take().with_kind(kind);
        self.builder.token(token);
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: insert a zero-width `kind` token here and report it, without consuming.
    pub(super) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.missing(kind);
        false
    }

    /// Consumes a name, re-tagging keywords as `Identifier`.
    pub(super) fn expect_name(&mut self) -> bool {
        if self.at(SyntaxKind::Identifier) {
            self.bump();
            return true;
        }
        if self.current().is_keyword() {
            self.bump_remap(SyntaxKind::Identifier);
            return true;
        }
        self.missing(SyntaxKind::Identifier);
        false
    }

    fn missing(&mut self, kind: SyntaxKind) {
        let mut token = GreenToken::missing(kind);
        if self.should_report(self.offset, kind) {
            token = token.with_diagnostic(DiagnosticInfo::missing_token(kind));
        }
        tracing::trace!(%kind, offset = u32::from(self.offset), "inserted missing token");
        self.builder.token(token);
    }

    /// A missing closing delimiter is always reported: each one closes a different
    /// construct. Any other missing token is reported only when it is the first one at
    /// its offset, so `color;` yields `Colon expected` without a cascade for the value.
    fn should_report(&mut self, pos: TextSize, kind: SyntaxKind) -> bool {
        let first_at_pos = self.last_missing_pos != Some(pos);
        self.last_missing_pos = Some(pos);
        first_at_pos || CLOSING_DELIMITERS.contains(kind)
    }

    /// Skips the current token inside an `Error` node and reports it.
    ///
    /// `EndOfFile` belongs to the document and is never skipped.
    pub(super) fn error_and_bump(&mut self) {
        if self.eof() {
            return;
        }
        let token = self.take();
        let info = DiagnosticInfo::unexpected_token(&token);
        tracing::trace!(
            kind = %token.kind(),
            offset = u32::from(self.offset - token.full_width()),
            "skipped unexpected token"
        );
        self.start_node(SyntaxKind::Error);
        self.builder.token(token.with_diagnostic(info));
        self.finish_node();
    }
}
