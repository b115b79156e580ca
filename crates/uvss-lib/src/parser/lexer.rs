//! Lexer for UVSS.
//!
//! Two layers. [`RawLexer`] runs the logos automaton and yields one `(kind, range)` per
//! lexeme, trivia included. [`Lexer`] groups those lexemes into [`GreenToken`]s that own
//! their trivia: a token keeps the trivia that follows it up to and including the first
//! line break, everything after that leads the next token. The final `EndOfFile` token
//! owns whatever trivia is left at the end of the buffer.
//!
//! ## Error handling
//!
//! Nothing here fails. Consecutive unrecognised characters coalesce into one `Garbage`
//! token and a `/*` without its `*/` becomes an `UnterminatedComment` token that runs to
//! the end of the buffer. The parser reports both.

use std::iter::Peekable;
use std::ops::Range;

use logos::Logos;

use crate::syntax::{GreenToken, SyntaxKind, Trivia, TriviaKind};

/// A lexeme before trivia attachment. `range` indexes into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub kind: SyntaxKind,
    pub range: Range<usize>,
}

impl RawToken {
    fn new(kind: SyntaxKind, range: Range<usize>) -> Self {
        Self { kind, range }
    }
}

/// Logos output with garbage coalesced and unterminated comments reclassified.
pub struct RawLexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, SyntaxKind>,
    pending: Option<RawToken>,
}

impl<'src> RawLexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: SyntaxKind::lexer(source),
            pending: None,
        }
    }

    fn classify(&self, kind: SyntaxKind, range: Range<usize>) -> RawToken {
        if kind == SyntaxKind::MultiLineComment {
            let text = &self.source[range.clone()];
            if text.len() < 4 || !text.ends_with("*/") {
                return RawToken::new(SyntaxKind::UnterminatedComment, range);
            }
        }
        RawToken::new(kind, range)
    }
}

impl Iterator for RawLexer<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        let mut error_start: Option<usize> = None;
        loop {
            match self.inner.next() {
                Some(Ok(kind)) => {
                    let token = self.classify(kind, self.inner.span());
                    if let Some(start) = error_start.take() {
                        let end = token.range.start;
                        self.pending = Some(token);
                        return Some(RawToken::new(SyntaxKind::Garbage, start..end));
                    }
                    return Some(token);
                }
                Some(Err(())) => {
                    if error_start.is_none() {
                        error_start = Some(self.inner.span().start);
                    }
                }
                None => {
                    return error_start
                        .take()
                        .map(|start| RawToken::new(SyntaxKind::Garbage, start..self.source.len()));
                }
            }
        }
    }
}

/// Lazy, one-shot stream of trivia-carrying tokens, always ending with `EndOfFile`.
pub struct Lexer<'src> {
    source: &'src str,
    raw: Peekable<RawLexer<'src>>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            raw: RawLexer::new(source).peekable(),
            finished: false,
        }
    }

    fn trivia(&self, token: &RawToken) -> Trivia {
        let kind = TriviaKind::from_syntax_kind(token.kind)
            .expect("trivia() is only called on trivia lexemes");
        Trivia::new(kind, &self.source[token.range.clone()])
    }

    fn next_if_trivia(&mut self) -> Option<RawToken> {
        self.raw.next_if(|token| token.kind.is_trivia())
    }
}

impl Iterator for Lexer<'_> {
    type Item = GreenToken;

    fn next(&mut self) -> Option<GreenToken> {
        if self.finished {
            return None;
        }

        let mut leading = Vec::new();
        while let Some(token) = self.next_if_trivia() {
            leading.push(self.trivia(&token));
        }

        let Some(token) = self.raw.next() else {
            self.finished = true;
            return Some(GreenToken::new(
                SyntaxKind::EndOfFile,
                "",
                leading,
                Vec::new(),
            ));
        };

        let mut trailing = Vec::new();
        while let Some(trivia) = self.next_if_trivia() {
            let ends_line = trivia.kind == SyntaxKind::EndOfLine;
            trailing.push(self.trivia(&trivia));
            if ends_line {
                break;
            }
        }

        Some(GreenToken::new(
            token.kind,
            &self.source[token.range],
            leading,
            trailing,
        ))
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenizes the whole buffer eagerly.
pub fn lex(source: &str) -> Vec<GreenToken> {
    Lexer::new(source).collect()
}
