//! Syntax kinds for UVSS.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! Kinds double as labels in diagnostic messages, so `Display` prints the variant name.

use logos::Logos;

/// All token and node kinds. Tokens first, then nodes.
/// Token discriminants stay below 64 so they fit a [`TokenSet`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[regex(r"[ \t\x0C]+")]
    Whitespace = 0,

    #[token("\n")]
    #[token("\r\n")]
    #[token("\r")]
    EndOfLine,

    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    SingleLineComment,

    /// Runs to the first `*/`, or to end of input (reclassified as `UnterminatedComment`).
    #[token("/*", block_comment)]
    MultiLineComment,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(".")]
    Period,

    #[token("#")]
    Hash,

    #[token("@")]
    AtSign,

    #[token("*")]
    Asterisk,

    #[token("=")]
    Equals,

    #[token("<>")]
    NotEquals,

    #[token("<")]
    LessThan,

    #[token("<=")]
    LessThanEquals,

    #[token(">")]
    GreaterThan,

    #[token(">=")]
    GreaterThanEquals,

    /// Logical-child combinator.
    #[token(">?")]
    GreaterThanQuestion,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("/")]
    Slash,

    #[token("|")]
    Pipe,

    #[token("!")]
    Exclamation,

    #[token("!important")]
    ImportantKeyword,

    #[token("animation")]
    AnimationKeyword,

    #[token("keyframe")]
    KeyframeKeyword,

    #[token("trigger")]
    TriggerKeyword,

    #[token("property")]
    PropertyKeyword,

    #[token("event")]
    EventKeyword,

    #[token("set")]
    SetKeyword,

    #[token("play-storyboard")]
    PlayStoryboardKeyword,

    #[token("play-sfx")]
    PlaySfxKeyword,

    #[token("target")]
    TargetKeyword,

    #[regex(r"[0-9]+(?:\.[0-9]+)?")]
    Number,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    StringLiteral,

    /// Defined after keywords so they take precedence on equal length.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_\-]*")]
    Identifier,

    /// `/*` without a closing `*/`.
    UnterminatedComment,
    /// Coalesced unrecognized characters.
    Garbage,
    /// Zero-width final token; carries the trailing trivia of the buffer.
    EndOfFile,

    // --- Node kinds (non-terminals) ---
    Document,
    RuleSet,
    SelectorList,
    Selector,
    SelectorPart,
    PseudoClass,
    SelectorArgument,
    PropertyDeclaration,
    PropertyName,
    PropertyValue,
    Trigger,
    TriggerCondition,
    EventName,
    SetAction,
    PlayStoryboardAction,
    PlaySfxAction,
    Storyboard,
    StoryboardTarget,
    Animation,
    Keyframe,
    /// Wraps a token skipped during recovery.
    Error,
}

use SyntaxKind::*;

fn block_comment(lex: &mut logos::Lexer<SyntaxKind>) -> bool {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |i| i + 2);
    lex.bump(len);
    true
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Whitespace | EndOfLine | SingleLineComment | MultiLineComment
        )
    }

    #[inline]
    pub fn is_token(self) -> bool {
        self <= EndOfFile
    }

    #[inline]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            AnimationKeyword
                | KeyframeKeyword
                | TriggerKeyword
                | PropertyKeyword
                | EventKeyword
                | SetKeyword
                | PlayStoryboardKeyword
                | PlaySfxKeyword
                | TargetKeyword
        )
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage | UnterminatedComment)
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// 64-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i <= EndOfFile as u16 {
                // SAFETY: `i` is a token discriminant and SyntaxKind is repr(u16)
                let kind: SyntaxKind = unsafe { std::mem::transmute::<u16, SyntaxKind>(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens that can begin a selector part. Keywords are accepted too, as names.
    pub const SELECTOR_PART_FIRST: TokenSet =
        TokenSet::new(&[Identifier, Asterisk, Hash, Period, Colon]);

    pub const COMBINATORS: TokenSet = TokenSet::new(&[GreaterThan, GreaterThanQuestion]);

    pub const COMPARISON_OPERATORS: TokenSet = TokenSet::new(&[
        Equals,
        NotEquals,
        LessThan,
        LessThanEquals,
        GreaterThan,
        GreaterThanEquals,
    ]);

    /// Tokens that end a declaration or action value.
    pub const VALUE_END: TokenSet = TokenSet::new(&[
        Semicolon,
        CloseBrace,
        OpenBrace,
        ImportantKeyword,
        AtSign,
        EndOfFile,
    ]);

    /// Tokens that end a trigger condition value.
    pub const CONDITION_VALUE_END: TokenSet = VALUE_END.union(TokenSet::single(Comma));

    /// Tokens that end a keyframe value; `;` is allowed inside the braces.
    pub const KEYFRAME_VALUE_END: TokenSet =
        TokenSet::new(&[CloseBrace, OpenBrace, KeyframeKeyword, EndOfFile]);

    /// Missing ones are reported even after another missing token at the same offset.
    pub const CLOSING_DELIMITERS: TokenSet = TokenSet::new(&[CloseBrace, CloseParen]);

    /// Starts of constructs owned by an enclosing production; list parsers stop here.
    pub const BODY_RECOVERY: TokenSet = TokenSet::new(&[CloseBrace, AtSign, EndOfFile]);

    pub const STORYBOARD_RECOVERY: TokenSet = BODY_RECOVERY.union(TokenSet::single(TargetKeyword));

    /// Keyframe lists and trigger action lists.
    pub const NESTED_RECOVERY: TokenSet =
        STORYBOARD_RECOVERY.union(TokenSet::new(&[AnimationKeyword, TriggerKeyword]));
}
