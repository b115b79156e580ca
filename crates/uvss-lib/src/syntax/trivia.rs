//! Whitespace and comments owned by tokens.

use rowan::TextSize;

use super::kind::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    Whitespace,
    /// `\n`, `\r\n` or `\r`. Ends a token's trailing trivia.
    EndOfLine,
    SingleLineComment,
    MultiLineComment,
}

impl TriviaKind {
    pub fn from_syntax_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::Whitespace => Some(Self::Whitespace),
            SyntaxKind::EndOfLine => Some(Self::EndOfLine),
            SyntaxKind::SingleLineComment => Some(Self::SingleLineComment),
            SyntaxKind::MultiLineComment => Some(Self::MultiLineComment),
            _ => None,
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(self, Self::SingleLineComment | Self::MultiLineComment)
    }
}

/// A run of non-significant text. Owned by exactly one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trivia {
    kind: TriviaKind,
    text: Box<str>,
}

impl Trivia {
    pub fn new(kind: TriviaKind, text: impl Into<Box<str>>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> TriviaKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> TextSize {
        TextSize::of(&*self.text)
    }
}

pub(crate) fn trivia_width(trivia: &[Trivia]) -> TextSize {
    trivia.iter().map(Trivia::width).sum()
}
